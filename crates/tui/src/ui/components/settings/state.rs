use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// Ticks the transient "saved" hint stays visible after pressing Save.
const SAVE_HINT_TICKS: u8 = 30;

/// Free-form numeric text field.
///
/// Holds exactly what the user typed; values are not validated or clamped,
/// so a negative retention period is representable. Only digits and a
/// leading minus sign are accepted while typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInput {
    buffer: String,
}

impl NumberInput {
    pub fn new(initial: i64) -> Self {
        Self {
            buffer: initial.to_string(),
        }
    }

    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '-' && self.buffer.is_empty()) {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn value(&self) -> Option<i64> {
        self.buffer.parse().ok()
    }
}

/// Identifies one of the four scoring sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    HardMatch,
    SoftMatch,
    MinimumPassing,
    AutoApprove,
}

/// Settings page state.
///
/// Lives on `App` for the whole session, so edits survive navigating away
/// and back. Nothing is persisted to disk; Save only flashes the hint.
#[derive(Debug)]
pub struct SettingsState {
    pub hard_match_weight: u8,
    pub soft_match_weight: u8,
    pub minimum_passing_score: u8,
    pub auto_approve_threshold: u8,
    pub max_file_size_mb: NumberInput,
    pub data_retention_days: NumberInput,
    save_hint_ticks: u8,
    pub container_focus: FocusFlag,
    pub f_hard_match: FocusFlag,
    pub f_soft_match: FocusFlag,
    pub f_passing_score: FocusFlag,
    pub f_auto_approve: FocusFlag,
    pub f_max_file_size: FocusFlag,
    pub f_retention: FocusFlag,
    pub f_save: FocusFlag,
    pub last_area: Rect,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            hard_match_weight: 40,
            soft_match_weight: 60,
            minimum_passing_score: 50,
            auto_approve_threshold: 85,
            max_file_size_mb: NumberInput::new(10),
            data_retention_days: NumberInput::new(365),
            save_hint_ticks: 0,
            container_focus: FocusFlag::named("settings"),
            f_hard_match: FocusFlag::named("settings.hard_match"),
            f_soft_match: FocusFlag::named("settings.soft_match"),
            f_passing_score: FocusFlag::named("settings.passing_score"),
            f_auto_approve: FocusFlag::named("settings.auto_approve"),
            f_max_file_size: FocusFlag::named("settings.max_file_size"),
            f_retention: FocusFlag::named("settings.retention"),
            f_save: FocusFlag::named("settings.save"),
            last_area: Rect::default(),
        }
    }
}

impl SettingsState {
    /// Adjusts a slider by `delta`, saturating at the 0..=100 range.
    ///
    /// The weights are independent; they are not normalized to sum to 100.
    pub fn adjust(&mut self, weight: Weight, delta: i16) {
        let slot = match weight {
            Weight::HardMatch => &mut self.hard_match_weight,
            Weight::SoftMatch => &mut self.soft_match_weight,
            Weight::MinimumPassing => &mut self.minimum_passing_score,
            Weight::AutoApprove => &mut self.auto_approve_threshold,
        };
        *slot = (*slot as i16 + delta).clamp(0, 100) as u8;
    }

    pub fn mark_saved(&mut self) {
        self.save_hint_ticks = SAVE_HINT_TICKS;
    }

    pub fn save_hint_visible(&self) -> bool {
        self.save_hint_ticks > 0
    }

    /// Advances transient UI timers; called on every runtime tick.
    pub fn tick(&mut self) {
        self.save_hint_ticks = self.save_hint_ticks.saturating_sub(1);
    }
}

impl HasFocus for SettingsState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_hard_match);
        builder.leaf_widget(&self.f_soft_match);
        builder.leaf_widget(&self.f_passing_score);
        builder.leaf_widget(&self.f_auto_approve);
        builder.leaf_widget(&self.f_max_file_size);
        builder.leaf_widget(&self.f_retention);
        builder.leaf_widget(&self.f_save);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_configuration() {
        let state = SettingsState::default();
        assert_eq!(state.hard_match_weight, 40);
        assert_eq!(state.soft_match_weight, 60);
        assert_eq!(state.minimum_passing_score, 50);
        assert_eq!(state.auto_approve_threshold, 85);
        assert_eq!(state.max_file_size_mb.value(), Some(10));
        assert_eq!(state.data_retention_days.value(), Some(365));
    }

    #[test]
    fn sliders_clamp_to_percent_range() {
        let mut state = SettingsState::default();
        state.adjust(Weight::SoftMatch, 100);
        assert_eq!(state.soft_match_weight, 100);
        state.adjust(Weight::HardMatch, -100);
        assert_eq!(state.hard_match_weight, 0);
    }

    #[test]
    fn weights_are_not_normalized() {
        let mut state = SettingsState::default();
        state.adjust(Weight::HardMatch, 60);
        state.adjust(Weight::SoftMatch, 40);
        let sum = state.hard_match_weight as u16 + state.soft_match_weight as u16;
        assert!(sum > 100);
    }

    #[test]
    fn number_input_accepts_negative_values() {
        let mut input = NumberInput::new(365);
        input.backspace();
        input.backspace();
        input.backspace();
        input.push('-');
        input.push('5');
        assert_eq!(input.text(), "-5");
        assert_eq!(input.value(), Some(-5));
    }

    #[test]
    fn number_input_rejects_letters_and_inner_minus() {
        let mut input = NumberInput::new(10);
        input.push('x');
        input.push('-');
        assert_eq!(input.text(), "10");
    }

    #[test]
    fn save_hint_expires_after_ticks() {
        let mut state = SettingsState::default();
        state.mark_saved();
        assert!(state.save_hint_visible());
        for _ in 0..SAVE_HINT_TICKS {
            state.tick();
        }
        assert!(!state.save_hint_visible());
    }
}
