//! Application State
//!
//! Everything the UI draws, as one value passed to each handler.

use crate::config::ListConfig;
use crate::domain::ItemId;
use crate::view::RowList;

/// Whether the form adds a new item or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(ItemId),
}

/// The add/update form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub input: String,
    pub mode: EditMode,
    pub button_label: String,
    pub button_icon: String,
    pub button_color: String,
    /// Bumped whenever the input should take focus
    pub focus_generation: u32,
}

impl FormState {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            input: String::new(),
            mode: EditMode::Idle,
            button_label: config.add_label.clone(),
            button_icon: config.add_icon.clone(),
            button_color: config.add_color.clone(),
            focus_generation: 0,
        }
    }

    /// Back to add mode with an empty, focused input
    pub fn reset(&mut self, config: &ListConfig) {
        let focus_generation = self.focus_generation.wrapping_add(1);
        *self = Self { focus_generation, ..Self::new(config) };
    }

    /// Switch to update mode for `id`, prefilled with its text
    pub fn begin_edit(&mut self, config: &ListConfig, id: ItemId, text: &str) {
        self.mode = EditMode::Editing(id);
        self.input = text.to_string();
        self.button_label = config.update_label.clone();
        self.button_icon = config.update_icon.clone();
        self.button_color = config.update_color.clone();
        self.focus_generation = self.focus_generation.wrapping_add(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub rows: RowList,
    pub form: FormState,
    /// Clear button and filter input are shown only when rows exist
    pub controls_visible: bool,
}

impl ListState {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            rows: RowList::new(),
            form: FormState::new(config),
            controls_visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_edit_then_reset() {
        let config = ListConfig::default();
        let mut form = FormState::new(&config);
        form.begin_edit(&config, ItemId(3), "Milk");
        assert_eq!(form.mode, EditMode::Editing(ItemId(3)));
        assert_eq!(form.input, "Milk");
        assert_eq!(form.button_label, "Update Item");
        assert_eq!(form.button_color, "#228B22");
        assert_eq!(form.focus_generation, 1);

        form.reset(&config);
        assert_eq!(form.mode, EditMode::Idle);
        assert!(form.input.is_empty());
        assert_eq!(form.button_label, "Add Item");
        assert_eq!(form.button_icon, "fa-solid fa-plus");
        assert_eq!(form.focus_generation, 2);
    }
}
