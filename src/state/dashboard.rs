//! Dashboard page state.
//!
//! Manages recent-activity navigation and the growth chart period.

use crate::data::Period;

/// State for the Dashboard view.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Currently selected row in the recent-activity list.
    pub selected_index: usize,
    /// Scroll offset for the activity list.
    pub scroll: usize,
    /// Period shown by the growth chart.
    pub period: Period,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            scroll: 0,
            period: Period::Week,
        }
    }

    /// Navigates to the previous activity.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.ensure_visible();
            true
        } else {
            false
        }
    }

    /// Navigates to the next activity.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate_down(&mut self, max_items: usize) -> bool {
        let max_index = max_items.saturating_sub(1);
        if self.selected_index < max_index {
            self.selected_index += 1;
            self.ensure_visible();
            true
        } else {
            false
        }
    }

    /// Switches the chart between week and year.
    pub fn toggle_period(&mut self) -> Period {
        self.period = self.period.toggled();
        self.period
    }

    fn ensure_visible(&mut self) {
        const WINDOW_SIZE: usize = 5;
        if self.selected_index < self.scroll {
            self.scroll = self.selected_index;
        } else if self.selected_index >= self.scroll + WINDOW_SIZE {
            self.scroll = self.selected_index.saturating_sub(WINDOW_SIZE - 1);
        }
    }

    /// Resets selection to valid range for the given item count.
    pub fn clamp_selection(&mut self, max_items: usize) {
        self.selected_index = self.selected_index.min(max_items.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_default_values() {
        let state = DashboardState::new();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.scroll, 0);
        assert_eq!(state.period, Period::Week);
    }

    #[test]
    fn test_navigate_up_at_top() {
        let mut state = DashboardState::new();
        assert!(!state.navigate_up());
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_navigate_down_stops_at_last_activity() {
        let mut state = DashboardState::new();
        for _ in 0..10 {
            state.navigate_down(5);
        }
        assert_eq!(state.selected_index, 4);
        assert!(!state.navigate_down(5));
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut state = DashboardState::new();
        for _ in 0..7 {
            state.navigate_down(10);
        }
        assert_eq!(state.selected_index, 7);
        assert_eq!(state.scroll, 3);
    }

    #[test]
    fn test_toggle_period() {
        let mut state = DashboardState::new();
        assert_eq!(state.toggle_period(), Period::Year);
        assert_eq!(state.toggle_period(), Period::Week);
    }

    #[test]
    fn test_clamp_selection_empty_list() {
        let mut state = DashboardState {
            selected_index: 5,
            ..Default::default()
        };
        state.clamp_selection(0);
        assert_eq!(state.selected_index, 0);
    }
}
