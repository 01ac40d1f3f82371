//! Row View Model
//!
//! The rendered list as data. The UI draws exactly these rows in this
//! order; visibility and the edit marker live here, not in the DOM.

use crate::domain::{locale_cmp, Item, ItemId};

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: ItemId,
    pub text: String,
    /// False when hidden by the filter
    pub visible: bool,
    /// Marker for the row being edited
    pub editing: bool,
}

impl Row {
    fn new(item: Item) -> Self {
        Self { id: item.id, text: item.text, visible: true, editing: false }
    }
}

/// Ordered rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowList {
    rows: Vec<Row>,
}

impl RowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| r.visible).count()
    }

    /// Row texts in display order
    pub fn texts(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.text.clone()).collect()
    }

    pub fn find(&self, id: ItemId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.rows.iter().any(|r| r.text == text)
    }

    /// Append a visible row at the end
    pub fn render_row(&mut self, item: Item) {
        self.rows.push(Row::new(item));
    }

    /// Append one row per item, in order
    pub fn render_all(&mut self, items: impl IntoIterator<Item = Item>) {
        for item in items {
            self.render_row(item);
        }
    }

    /// Remove every row
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Reorder rows alphabetically; stable, so equal texts keep their order
    pub fn sort_visible(&mut self) {
        self.rows.sort_by(|a, b| locale_cmp(&a.text, &b.text));
    }

    /// Show rows whose text contains `substring`, ignoring case; hide the rest
    pub fn set_filter(&mut self, substring: &str) {
        let needle = substring.to_lowercase();
        for row in &mut self.rows {
            row.visible = row.text.to_lowercase().contains(&needle);
        }
    }

    /// Remove a row by id, returning it
    pub fn remove(&mut self, id: ItemId) -> Option<Row> {
        let index = self.rows.iter().position(|r| r.id == id)?;
        Some(self.rows.remove(index))
    }

    /// Move the edit marker to `id`. Returns false if no such row exists.
    pub fn mark_editing(&mut self, id: ItemId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        for row in &mut self.rows {
            row.editing = row.id == id;
        }
        true
    }

    pub fn clear_marker(&mut self) {
        for row in &mut self.rows {
            row.editing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(texts: &[&str]) -> RowList {
        let mut rows = RowList::new();
        rows.render_all(
            texts.iter().enumerate().map(|(i, t)| Item::new(ItemId(i as u32), *t)),
        );
        rows
    }

    #[test]
    fn test_render_all_keeps_order() {
        let rows = list(&["Milk", "Eggs", "Bread"]);
        assert_eq!(rows.texts(), vec!["Milk", "Eggs", "Bread"]);
        assert_eq!(rows.visible_count(), 3);
    }

    #[test]
    fn test_sort_visible() {
        let mut rows = list(&["Milk", "eggs", "Bread"]);
        rows.sort_visible();
        assert_eq!(rows.texts(), vec!["Bread", "eggs", "Milk"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut rows = list(&["Milk", "Eggs", "Bread"]);
        rows.set_filter("E");
        let shown: Vec<_> = rows.rows().iter().filter(|r| r.visible).map(|r| r.text.as_str()).collect();
        assert_eq!(shown, vec!["Eggs", "Bread"]);

        rows.set_filter("");
        assert_eq!(rows.visible_count(), 3);
    }

    #[test]
    fn test_new_row_is_visible_until_next_filter() {
        let mut rows = list(&["Milk"]);
        rows.set_filter("x");
        assert_eq!(rows.visible_count(), 0);
        rows.render_row(Item::new(ItemId(9), "Cheese"));
        assert_eq!(rows.visible_count(), 1);
        rows.set_filter("x");
        assert_eq!(rows.visible_count(), 0);
    }

    #[test]
    fn test_single_edit_marker() {
        let mut rows = list(&["Milk", "Eggs"]);
        assert!(rows.mark_editing(ItemId(0)));
        assert!(rows.mark_editing(ItemId(1)));
        let marked: Vec<_> = rows.rows().iter().filter(|r| r.editing).map(|r| r.id).collect();
        assert_eq!(marked, vec![ItemId(1)]);
        assert!(!rows.mark_editing(ItemId(42)));

        rows.clear_marker();
        assert!(rows.rows().iter().all(|r| !r.editing));
    }

    #[test]
    fn test_remove_by_id() {
        let mut rows = list(&["Milk", "Eggs"]);
        assert_eq!(rows.remove(ItemId(0)).map(|r| r.text), Some("Milk".to_string()));
        assert_eq!(rows.remove(ItemId(0)), None);
        assert_eq!(rows.texts(), vec!["Eggs"]);
    }
}
