use thiserror::Error;

/// Category value that matches every item.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Index into a fixed, ordered collection with wraparound on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    index: usize,
    len: usize,
}

impl Selector {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn count(self) -> usize {
        self.len
    }

    pub fn is_selected(self, index: usize) -> bool {
        self.index == index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }

        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }

        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn select(self, index: usize) -> Result<Self, SelectionError> {
        if index >= self.len {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.len,
            });
        }

        Ok(Self { index, ..self })
    }
}

pub trait Categorized {
    fn category(&self) -> &str;
}

/// Items whose category equals `filter`, or every item for [`ALL_CATEGORIES`].
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter == ALL_CATEGORIES {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.category() == filter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: u32,
        category: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.category
        }
    }

    fn six_items() -> Vec<Item> {
        ["web", "web", "web", "mobile", "desktop", "web"]
            .into_iter()
            .zip(1..)
            .map(|(category, id)| Item { id, category })
            .collect()
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for len in 1..=8 {
            for start in 0..len {
                let origin = Selector::new(len).select(start).expect("start in range");
                let mut current = origin;
                for _ in 0..len {
                    current = current.next();
                }
                assert_eq!(current, origin, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn prev_n_times_returns_to_start() {
        for len in 1..=8 {
            for start in 0..len {
                let origin = Selector::new(len).select(start).expect("start in range");
                let mut current = origin;
                for _ in 0..len {
                    current = current.prev();
                }
                assert_eq!(current, origin, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        assert_eq!(Selector::new(4).prev().index(), 3);
        assert_eq!(Selector::new(4).prev().next().index(), 0);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let selector = Selector::new(3).select(1).expect("in range");

        assert_eq!(
            selector.select(3),
            Err(SelectionError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(selector.index(), 1);
    }

    #[test]
    fn empty_selector_never_moves() {
        let selector = Selector::new(0);
        assert_eq!(selector.next().index(), 0);
        assert_eq!(selector.prev().index(), 0);
        assert!(selector.select(0).is_err());
    }

    #[test]
    fn filter_keeps_matching_items_in_order() {
        let items = six_items();

        let web: Vec<u32> = filter_by_category(&items, "web")
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(web, vec![1, 2, 3, 6]);

        let all = filter_by_category(&items, ALL_CATEGORIES);
        assert_eq!(all.len(), 6);
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn filter_with_unknown_category_is_empty() {
        let items = six_items();
        assert!(filter_by_category(&items, "embedded").is_empty());
    }
}
