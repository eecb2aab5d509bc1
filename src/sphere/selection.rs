//! Hover and selection tracking for sphere items

use super::item::SphereItem;

/// The item currently shown in the detail overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Selected {
    pub index: usize,
    pub item: SphereItem,
}

/// Manages the hovered index and the single selected item
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    hovered: Option<usize>,
    selected: Option<Selected>,
}

impl SelectionState {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected(&self) -> Option<&Selected> {
        self.selected.as_ref()
    }

    pub fn selected_item(&self) -> Option<&SphereItem> {
        self.selected.as_ref().map(|s| &s.item)
    }

    /// Pointer entered item `index`
    pub fn hover_enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Pointer left item `index`. Stale leaves for other items are ignored.
    pub fn hover_leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Selects `item`, replacing any previous selection outright
    pub fn select(&mut self, index: usize, item: SphereItem) {
        log::debug!("Selected item {} ({})", index, item.id);
        self.selected = Some(Selected { index, item });
    }

    /// Closes the overlay
    pub fn dismiss(&mut self) {
        if let Some(previous) = self.selected.take() {
            log::debug!("Dismissed item {} ({})", previous.index, previous.item.id);
        }
    }

    /// Drops hover and selection, used when the item set changes
    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::item::ItemVisual;

    fn item(id: &str) -> SphereItem {
        SphereItem::new(id, ItemVisual::Missing)
    }

    #[test]
    fn test_select_replaces() {
        let mut selection = SelectionState::new();
        selection.select(1, item("a"));
        selection.select(4, item("b"));
        let selected = selection.selected().unwrap();
        assert_eq!(selected.index, 4);
        assert_eq!(selected.item.id, "b");
    }

    #[test]
    fn test_dismiss_clears() {
        let mut selection = SelectionState::new();
        selection.select(0, item("a"));
        selection.dismiss();
        assert!(selection.selected().is_none());
        selection.dismiss();
        assert!(selection.selected_item().is_none());
    }

    #[test]
    fn test_hover_leave_only_clears_matching_index() {
        let mut selection = SelectionState::new();
        selection.hover_enter(3);
        selection.hover_leave(2);
        assert_eq!(selection.hovered(), Some(3));
        selection.hover_leave(3);
        assert_eq!(selection.hovered(), None);
    }
}
