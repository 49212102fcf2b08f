//! Component abstraction for the Hireview TUI.
//!
//! Components are self-contained UI elements that handle their own input
//! and rendering while integrating with the application through a
//! consistent interface. They never mutate global state directly beyond
//! their own state container on `App`; anything else is reported back as an
//! `Effect` for the runtime to process.

use crossterm::event::{KeyEvent, MouseEvent};
use hireview_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI element with its own input handling and rendering.
///
/// Lifecycle: the main view constructs a component when its route becomes
/// active, calls `on_route_enter`, routes key/mouse/message events to it
/// while active, and calls `on_route_exit` when navigating away.
pub trait Component: std::fmt::Debug {
    /// Called when the component's route becomes the active view.
    fn on_route_enter(&mut self, _app: &mut App) -> Vec<Effect> {
        Vec::new()
    }

    /// Called when navigating away from the component's route.
    fn on_route_exit(&mut self, _app: &mut App) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events while this component is the active view.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events while this component is the active view.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Draw the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and recording hit-test areas; state changes belong in event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the bottom hint bar while the component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
