//! Header notification panel state.

use crate::data::Notification;

#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub open: bool,
    pub selected_index: usize,
}

impl NotificationsState {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            items,
            open: false,
            selected_index: 0,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn navigate_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn navigate_down(&mut self) -> bool {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    /// Removes the selected notification and returns it.
    pub fn clear_selected(&mut self) -> Option<Notification> {
        if self.selected_index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(self.selected_index);
        self.selected_index = self.selected_index.min(self.items.len().saturating_sub(1));
        Some(removed)
    }
}
