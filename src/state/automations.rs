//! Automations page state.
//!
//! Owns the working copy of the automation list together with the status
//! filter, the name search and the "new automation" form.

use crate::data::{Automation, AutomationStatus, Platform, SCHEDULE_CHOICES};

const NEW_AUTOMATION_NEXT_RUN: &str = "Today at 3:00 PM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Paused,
}

impl StatusFilter {
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Paused,
            StatusFilter::Paused => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Paused => "Paused",
        }
    }

    fn matches(self, status: AutomationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == AutomationStatus::Active,
            StatusFilter::Paused => status == AutomationStatus::Paused,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Platform,
    Schedule,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Platform,
            FormField::Platform => FormField::Schedule,
            FormField::Schedule => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Schedule,
            FormField::Description => FormField::Name,
            FormField::Platform => FormField::Description,
            FormField::Schedule => FormField::Platform,
        }
    }
}

/// Inputs of the "new automation" form.
#[derive(Debug, Clone, Default)]
pub struct AutomationForm {
    pub name: String,
    pub description: String,
    pub platform_index: usize,
    pub schedule_index: usize,
    pub field: FormField,
}

impl AutomationForm {
    pub fn platform(&self) -> Platform {
        Platform::AUTOMATION_CHOICES[self.platform_index % Platform::AUTOMATION_CHOICES.len()]
    }

    pub fn schedule(&self) -> &'static str {
        SCHEDULE_CHOICES[self.schedule_index % SCHEDULE_CHOICES.len()]
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    pub fn push_char(&mut self, c: char) {
        match self.field {
            FormField::Name => self.name.push(c),
            FormField::Description => self.description.push(c),
            FormField::Platform | FormField::Schedule => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Platform | FormField::Schedule => {}
        }
    }

    /// Steps the focused choice field forwards or backwards.
    pub fn cycle_choice(&mut self, forward: bool) {
        let (index, len) = match self.field {
            FormField::Platform => (&mut self.platform_index, Platform::AUTOMATION_CHOICES.len()),
            FormField::Schedule => (&mut self.schedule_index, SCHEDULE_CHOICES.len()),
            FormField::Name | FormField::Description => return,
        };
        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Automation name is required")]
    EmptyName,
}

#[derive(Debug, Clone, Default)]
pub struct AutomationsState {
    pub items: Vec<Automation>,
    pub filter: StatusFilter,
    pub search: String,
    pub search_active: bool,
    pub selected_index: usize,
    pub form: Option<AutomationForm>,
}

impl AutomationsState {
    pub fn new(items: Vec<Automation>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Automations passing the status filter and the case-insensitive search.
    pub fn visible(&self) -> Vec<&Automation> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|a| self.filter.matches(a.status))
            .filter(|a| needle.is_empty() || a.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected(&self) -> Option<&Automation> {
        self.visible().get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<u32> {
        self.selected().map(|a| a.id)
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
        if self.selected_index + 1 < self.visible().len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    pub fn cycle_filter(&mut self) -> StatusFilter {
        self.filter = self.filter.next();
        self.clamp_selection();
        self.filter
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search.clear();
        self.clamp_selection();
    }

    /// Flips the selected automation between active and paused.
    pub fn toggle_selected(&mut self) -> Option<&Automation> {
        let id = self.selected_id()?;
        let automation = self.items.iter_mut().find(|a| a.id == id)?;
        automation.status = automation.status.toggled();
        tracing::info!(
            event = "ui.automation.toggled",
            id = automation.id,
            status = automation.status.label()
        );
        self.clamp_selection();
        self.items.iter().find(|a| a.id == id)
    }

    pub fn delete_selected(&mut self) -> Option<Automation> {
        let id = self.selected_id()?;
        let pos = self.items.iter().position(|a| a.id == id)?;
        let removed = self.items.remove(pos);
        tracing::info!(event = "ui.automation.deleted", id = removed.id);
        self.clamp_selection();
        Some(removed)
    }

    /// Next free id: one past the largest, or 1 for an empty list.
    pub fn next_id(&self) -> u32 {
        self.items.iter().map(|a| a.id).max().map_or(1, |max| max + 1)
    }

    pub fn open_form(&mut self) {
        self.form = Some(AutomationForm::default());
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Creates an automation from the open form and closes it.
    ///
    /// The form stays open when validation fails.
    pub fn submit_form(&mut self) -> Result<u32, FormError> {
        let Some(form) = self.form.as_ref() else {
            return Err(FormError::EmptyName);
        };
        let name = form.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        let automation = Automation {
            id: self.next_id(),
            name: name.to_string(),
            platform: form.platform(),
            status: AutomationStatus::Active,
            schedule: form.schedule().to_string(),
            last_run: "Never".into(),
            next_run: NEW_AUTOMATION_NEXT_RUN.into(),
            description: form.description.trim().to_string(),
            stats: vec![
                ("Actions today".into(), "0".into()),
                ("Total actions".into(), "0".into()),
            ],
        };
        let id = automation.id;
        tracing::info!(event = "ui.automation.created", id, platform = automation.platform.label());
        self.items.push(automation);
        self.form = None;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Store;

    fn state() -> AutomationsState {
        AutomationsState::new(Store::new().automations)
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut state = state();
        let toggled = state.toggle_selected().unwrap();
        assert_eq!(toggled.status, AutomationStatus::Paused);
        assert_eq!(toggled.next_run_label(), "Paused");

        let toggled = state.toggle_selected().unwrap();
        assert_eq!(toggled.status, AutomationStatus::Active);
        assert_eq!(toggled.next_run_label(), "Tomorrow at 10:00 AM");
    }

    #[test]
    fn test_delete_removes_selected() {
        let mut state = state();
        state.navigate_down();
        let removed = state.delete_selected().unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(state.items.len(), 4);
        assert_eq!(state.selected().map(|a| a.id), Some(3));
    }

    #[test]
    fn test_create_uses_next_id() {
        let mut state = state();
        state.open_form();
        let form = state.form.as_mut().unwrap();
        "Pinterest pins".chars().for_each(|c| form.push_char(c));
        form.next_field();
        "Pins boards".chars().for_each(|c| form.push_char(c));
        form.next_field();
        form.cycle_choice(true);
        form.next_field();
        form.cycle_choice(false);
        form.prev_field();
        form.prev_field();
        form.push_char('!');

        let id = state.submit_form().unwrap();
        assert_eq!(id, 6);
        assert!(state.form.is_none());

        let created = state.items.last().unwrap();
        assert_eq!(created.name, "Pinterest pins");
        assert_eq!(created.description, "Pins boards!");
        assert_eq!(created.platform, Platform::Twitter);
        assert_eq!(created.schedule, "Custom");
        assert_eq!(created.status, AutomationStatus::Active);
        assert_eq!(created.last_run, "Never");
    }

    #[test]
    fn test_create_on_empty_list_starts_at_one() {
        let mut state = AutomationsState::new(Vec::new());
        assert_eq!(state.next_id(), 1);
        state.open_form();
        state.form.as_mut().unwrap().push_char('x');
        assert_eq!(state.submit_form(), Ok(1));
    }

    #[test]
    fn test_empty_name_rejected_and_form_kept() {
        let mut state = state();
        state.open_form();
        state.form.as_mut().unwrap().push_char(' ');
        assert_eq!(state.submit_form(), Err(FormError::EmptyName));
        assert!(state.form.is_some());
        assert_eq!(state.items.len(), 5);
    }

    #[test]
    fn test_status_filter() {
        let mut state = state();
        assert_eq!(state.cycle_filter(), StatusFilter::Active);
        assert_eq!(state.visible().len(), 4);
        assert_eq!(state.cycle_filter(), StatusFilter::Paused);
        let paused: Vec<u32> = state.visible().iter().map(|a| a.id).collect();
        assert_eq!(paused, vec![3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut state = state();
        "tiktok".chars().for_each(|c| state.push_search_char(c));
        let ids: Vec<u32> = state.visible().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![4]);

        state.clear_search();
        assert_eq!(state.visible().len(), 5);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut state = state();
        for _ in 0..4 {
            state.navigate_down();
        }
        assert_eq!(state.selected_index, 4);
        state.cycle_filter();
        state.cycle_filter();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected().map(|a| a.id), Some(3));
    }

    #[test]
    fn test_toggle_under_filter_clamps() {
        let mut state = state();
        state.cycle_filter();
        state.navigate_down();
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected().map(|a| a.id), Some(5));
        state.toggle_selected();
        assert_eq!(state.visible().len(), 3);
        assert_eq!(state.selected_index, 2);
    }
}
