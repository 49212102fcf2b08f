//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input, ticks, and the
//!   simulated-analysis task.
//! - Route keys to focused components and execute returned `Effect`s.
//!
//! A dedicated input thread blocks on `crossterm::event::read()` and
//! forwards events over a channel, ensuring reliable resize delivery across
//! terminals. The ticker runs fast while animating and slow when idle.

use anyhow::Result;
use crossterm::event::MouseEventKind;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use hireview_catalog::JobCatalog;
use hireview_types::{AnalysisOutcome, Effect, Msg};
use ratatui::{Terminal, prelude::*};
use std::time::{Duration, Instant};
use tokio::task::{AbortHandle, JoinHandle};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::RunOptions;
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;
use rat_focus::FocusBuilder;

/// How long a simulated analysis batch takes to report completion.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

/// Spawn a dedicated input thread that blocks on terminal input and
/// forwards `crossterm` events over a Tokio channel.
///
/// Keeping `poll()` and `read()` on the same OS thread avoids lost or
/// delayed events in some terminals.
async fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    let mut last_mouse_event: Option<Instant> = Some(Instant::now());

    tokio::spawn(async move {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            if event::poll(sixteen_ms).is_ok() {
                match event::read() {
                    Ok(event) => {
                        // Throttle mouse move events to once per 16 ms.
                        let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                        let should_send = !is_mouse_move || last_mouse_event.is_some_and(|last| last.elapsed() >= sixteen_ms);
                        if is_mouse_move && should_send {
                            last_mouse_event = Some(Instant::now());
                        }

                        if should_send && let Err(e) = sender.send(event).await {
                            tracing::warn!("Failed to send event: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read event: {}", e);
                        break;
                    }
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Rebuild focus just before rendering so structure changes (modal
    // open/close, analyze button appearing) are reflected.
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the event
/// producer, runs the async event loop, and performs cleanup on exit.
pub async fn run_app(catalog: JobCatalog, options: RunOptions) -> Result<()> {
    let mut input_receiver = spawn_input_thread().await;
    let mut main_view = MainView::new();

    let theme = theme::load(options.theme.as_deref());
    let mut app = App::new(catalog, theme, options.analysis_delay);
    let mut terminal = setup_terminal()?;

    let initial_route = app.current_route;
    main_view.set_current_route(&mut app, initial_route);

    let mut pending_analyses: FuturesUnordered<JoinHandle<AnalysisOutcome>> = FuturesUnordered::new();
    let mut active_analysis: Option<AbortHandle> = None;
    let mut effects: Vec<Effect> = Vec::with_capacity(5);

    // Ticking strategy: fast while animating, very slow when idle.
    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    // Track the last known terminal size to synthesize Resize messages when
    // some terminals fail to emit them reliably.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let needs_animation = app.executing || !effects.is_empty() || app.settings.save_hint_visible();
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }
        let mut needs_render = false;
        tokio::select! {
            // Terminal input events
            maybe_event = input_receiver.recv() => {
                if let Some(event) = maybe_event {
                    if let Event::Key(key_event) = event
                        && key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
                            break;
                        }
                    effects.extend(handle_input_event(&mut app, &mut main_view, event));
                } else {
                    // Input channel closed; shut down cleanly.
                    break;
                }
                needs_render = true;
            }

            // Periodic animation tick
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, &Msg::Tick));
                needs_render = needs_animation || !effects.is_empty();
            }

            // Simulated analysis completions
            Some(joined) = pending_analyses.next(), if !pending_analyses.is_empty() => {
                match joined {
                    Ok(outcome) => {
                        active_analysis = None;
                        effects.extend(main_view.handle_message(&mut app, &Msg::AnalysisCompleted(outcome)));
                    }
                    Err(error) if error.is_cancelled() => {
                        tracing::debug!("analysis batch aborted");
                    }
                    Err(error) => {
                        tracing::warn!("analysis task failed: {error}");
                        app.executing = false;
                    }
                }
                needs_render = true;
            }

            // Handle Ctrl+C
            _ = signal::ctrl_c() => { break; }
        }

        if !effects.is_empty() {
            // Move effects out of their Vec so effects produced while
            // processing are queued for the next pass.
            let mut effects_to_process = Vec::with_capacity(effects.len());
            effects_to_process.append(&mut effects);

            handle_navigation_effects(&mut app, &mut main_view, &mut effects_to_process, &mut effects);
            process_effects(
                &mut app,
                effects_to_process,
                &mut pending_analyses,
                &mut active_analysis,
            );
            needs_render = true;
        }

        // Fallback: detect terminal size changes even if no explicit Resize
        // event was received.
        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            let _ = app.update(&Msg::Resize(w, h));
            needs_render = true;
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    if let Some(handle) = active_analysis.take() {
        handle.abort();
    }
    cleanup_terminal(&mut terminal)?;
    Ok(())
}

/// Pull navigation effects out of the batch and apply them first, so view
/// and modal transitions happen before any remaining work effects run.
fn handle_navigation_effects(app: &mut App, main_view: &mut MainView, effects: &mut Vec<Effect>, queued_effects: &mut Vec<Effect>) {
    let navigation_effects = effects
        .extract_if(0.., |effect| {
            matches!(effect, Effect::SwitchTo(_) | Effect::ShowModal(_) | Effect::CloseModal)
        })
        .collect::<Vec<Effect>>();

    for effect in navigation_effects {
        match effect {
            Effect::SwitchTo(route) => {
                if let Some(mut view) = main_view.content_view.take() {
                    queued_effects.extend(view.on_route_exit(app));
                }
                main_view.set_current_route(app, route);
                if let Some(view) = main_view.content_view.as_mut() {
                    queued_effects.extend(view.on_route_enter(app));
                }
            }
            Effect::ShowModal(modal) => {
                main_view.set_open_modal_kind(app, Some(modal));
                if let Some(view) = main_view.modal_view.as_mut() {
                    queued_effects.extend(view.on_route_enter(app));
                }
            }
            Effect::CloseModal => {
                if let Some(mut view) = main_view.modal_view.take() {
                    queued_effects.extend(view.on_route_exit(app));
                }
                main_view.set_open_modal_kind(app, None);
                main_view.restore_focus(app);
            }
            _ => {}
        }
    }
}

/// Executes work effects: starting and aborting simulated analysis batches.
fn process_effects(
    app: &mut App,
    effects: Vec<Effect>,
    pending_analyses: &mut FuturesUnordered<JoinHandle<AnalysisOutcome>>,
    active_analysis: &mut Option<AbortHandle>,
) {
    for effect in effects {
        match effect {
            Effect::AnalyzeRequested => {
                let Some((batch_id, file_count)) = app.upload.begin_analysis() else {
                    continue;
                };
                let delay = app.ctx.analysis_delay;
                tracing::info!(batch = batch_id, files = file_count, "starting simulated analysis");
                let handle = tokio::spawn(async move {
                    time::sleep(delay).await;
                    AnalysisOutcome { batch_id, file_count }
                });
                *active_analysis = Some(handle.abort_handle());
                pending_analyses.push(handle);
                app.throbber_idx = 0;
                app.executing = true;
            }
            Effect::AnalysisAbortRequested => {
                if let Some(handle) = active_analysis.take() {
                    handle.abort();
                }
                app.upload.cancel_analysis();
                app.executing = false;
                app.throbber_idx = 0;
            }
            // Navigation effects were already handled.
            Effect::SwitchTo(_) | Effect::ShowModal(_) | Effect::CloseModal => {}
        }
    }
}
