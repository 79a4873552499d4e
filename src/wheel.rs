//! Generic wheel selection.
//!
//! Provides a trait and the list implementation for wheel-style selection.
//! This eliminates duplicate select_next/select_prev logic across the picker
//! columns and host-side menus.

/// A generic trait for wheel-style list selection.
///
/// Implementors only provide storage; navigation comes from the default
/// methods and wraps around at both ends.
pub trait Wheel {
    /// The type of items in the wheel
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current highlighted index
    fn selected_index(&self) -> usize;

    /// Set the highlighted index
    fn set_selected_index(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the wheel is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Highlight the next item (wraps around)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let next = (self.selected_index() + 1) % self.len();
            self.set_selected_index(next);
        }
    }

    /// Highlight the previous item (wraps around)
    fn select_prev(&mut self) {
        if !self.is_empty() {
            let prev = self
                .selected_index()
                .checked_sub(1)
                .unwrap_or(self.len() - 1);
            self.set_selected_index(prev);
        }
    }

    /// Get the currently highlighted item
    fn selected_item(&self) -> Option<&Self::Item> {
        self.items().get(self.selected_index())
    }
}

/// One column of selectable string values.
#[derive(Debug, Clone)]
pub struct ListWheel {
    items: Vec<String>,
    selected: usize,
}

impl ListWheel {
    /// Create a wheel over `items`, pre-highlighting `preselect` when it is
    /// in bounds. An out-of-bounds or absent index leaves row 0 highlighted.
    pub fn new(items: Vec<String>, preselect: Option<usize>) -> Self {
        let selected = preselect.filter(|i| *i < items.len()).unwrap_or(0);
        Self { items, selected }
    }
}

impl Wheel for ListWheel {
    type Item = String;

    fn items(&self) -> &[String] {
        &self.items
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(n: usize) -> ListWheel {
        ListWheel::new((0..n).map(|i| i.to_string()).collect(), None)
    }

    #[test]
    fn test_select_next_wraps() {
        let mut w = wheel(3);
        w.select_next();
        w.select_next();
        assert_eq!(w.selected_index(), 2);
        w.select_next();
        assert_eq!(w.selected_index(), 0);
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut w = wheel(3);
        w.select_prev();
        assert_eq!(w.selected_index(), 2);
    }

    #[test]
    fn test_empty_wheel_is_safe() {
        let mut w = wheel(0);
        w.select_next();
        w.select_prev();
        assert_eq!(w.selected_index(), 0);
        assert!(w.selected_item().is_none());
    }

    #[test]
    fn test_preselect_in_bounds() {
        let w = ListWheel::new(vec!["a".into(), "b".into()], Some(1));
        assert_eq!(w.selected_index(), 1);
    }

    #[test]
    fn test_preselect_out_of_bounds_ignored() {
        let w = ListWheel::new(vec!["a".into(), "b".into()], Some(9));
        assert_eq!(w.selected_index(), 0);
    }
}
