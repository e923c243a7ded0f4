use ratatui::widgets::ListState;

use crate::controller::ListingStatus;
use crate::observable::Observable;
use crate::source::Product;

pub struct App {
    /// Fetch status published by the controller.
    pub status: Observable<Option<ListingStatus>>,
    /// Fetched products published by the controller.
    pub items: Observable<Vec<Product>>,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
}

impl App {
    pub fn new(status: Observable<Option<ListingStatus>>, items: Observable<Vec<Product>>) -> Self {
        Self {
            status,
            items,
            list_state: ListState::default(),
            quit: false,
        }
    }

    pub fn current_status(&self) -> Option<ListingStatus> {
        self.status.get()
    }

    pub fn item_count(&self) -> usize {
        self.items.with(Vec::len)
    }

    /// Drop a selection that no longer points at an item.
    pub fn sync_selection(&mut self) {
        let len = self.item_count();
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        let len = self.item_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.item_count() == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.item_count();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::observable::{self, Publisher};

    pub(crate) struct Harness {
        pub status: Publisher<Option<ListingStatus>>,
        pub items: Publisher<Vec<Product>>,
        pub app: App,
    }

    pub(crate) fn harness() -> Harness {
        let (status, status_view) = observable::channel(None);
        let (items, items_view) = observable::channel(Vec::new());
        Harness {
            status,
            items,
            app: App::new(status_view, items_view),
        }
    }

    pub(crate) fn sample_items() -> Vec<Product> {
        vec![
            Product::new(1, "Phone"),
            Product::new(2, "Laptop"),
            Product::new(3, "Perfume"),
        ]
    }

    fn loaded() -> Harness {
        let h = harness();
        h.items.publish(sample_items());
        h.status.publish(Some(ListingStatus::Done));
        h
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_app_starts_empty() {
        let h = harness();
        assert_eq!(h.app.item_count(), 0);
        assert_eq!(h.app.current_status(), None);
        assert!(!h.app.quit);
        assert!(h.app.list_state.selected().is_none());
    }

    #[test]
    fn app_reflects_published_values() {
        let h = loaded();
        assert_eq!(h.app.current_status(), Some(ListingStatus::Done));
        assert_eq!(h.app.item_count(), 3);
    }

    // -- navigation ----------------------------------------------------------

    #[test]
    fn navigation_on_empty_is_noop() {
        let mut h = harness();
        h.app.select_next();
        h.app.select_previous();
        h.app.select_first();
        h.app.select_last();
        assert!(h.app.list_state.selected().is_none());
    }

    #[test]
    fn select_next_starts_at_zero_then_advances() {
        let mut h = loaded();

        h.app.select_next();
        assert_eq!(h.app.list_state.selected(), Some(0));

        h.app.select_next();
        assert_eq!(h.app.list_state.selected(), Some(1));

        h.app.select_next();
        assert_eq!(h.app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_next_clamps_at_last_item() {
        let mut h = loaded();
        h.app.select_last();
        h.app.select_next();
        assert_eq!(h.app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_previous_clamps_at_zero() {
        let mut h = loaded();
        h.app.select_first();
        h.app.select_previous();
        assert_eq!(h.app.list_state.selected(), Some(0));
    }

    #[test]
    fn select_previous_moves_up() {
        let mut h = loaded();
        h.app.select_last();
        h.app.select_previous();
        assert_eq!(h.app.list_state.selected(), Some(1));
    }

    #[test]
    fn select_first_and_last_jump() {
        let mut h = loaded();
        h.app.select_last();
        assert_eq!(h.app.list_state.selected(), Some(2));
        h.app.select_first();
        assert_eq!(h.app.list_state.selected(), Some(0));
    }

    // -- selection sync ------------------------------------------------------

    #[test]
    fn sync_selection_clears_when_items_are_reset() {
        let mut h = loaded();
        h.app.select_last();

        h.items.publish(Vec::new());
        h.app.sync_selection();

        assert!(h.app.list_state.selected().is_none());
    }

    #[test]
    fn sync_selection_clamps_to_shorter_list() {
        let mut h = loaded();
        h.app.select_last();

        h.items.publish(vec![Product::new(9, "Only")]);
        h.app.sync_selection();

        assert_eq!(h.app.list_state.selected(), Some(0));
    }
}
