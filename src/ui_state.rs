//! Page state for the public calendar
//!
//! What the visitor has selected; everything shown is derived from this
//! plus the fetched events.

use serde::{Deserialize, Serialize};

/// Calendar layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Twelve month cards with their event lists
    #[default]
    Monthly,
    /// Whole-year day grid
    Annual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub view: View,

    /// `None` shows every category
    pub selected_category: Option<String>,

    pub year: i32,
}

impl UiState {
    pub fn new(year: i32) -> Self {
        Self {
            view: View::Monthly,
            selected_category: None,
            year,
        }
    }

    pub fn select_category(&mut self, category_id: Option<String>) {
        self.selected_category = category_id;
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Monthly => View::Annual,
            View::Annual => View::Monthly,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = UiState::new(2026);
        assert_eq!(state.view, View::Monthly);
        assert_eq!(state.selected_category, None);
        assert_eq!(state.year, 2026);
    }

    #[test]
    fn test_toggle_and_select() {
        let mut state = UiState::new(2026);
        state.toggle_view();
        assert_eq!(state.view, View::Annual);
        state.toggle_view();
        assert_eq!(state.view, View::Monthly);

        state.select_category(Some("enduro".to_string()));
        assert_eq!(state.selected_category.as_deref(), Some("enduro"));
        state.select_category(None);
        assert!(state.selected_category.is_none());
    }
}
