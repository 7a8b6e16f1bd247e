use crate::control::PageAction;

/// Index of the page currently shown, always within `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Starts at the first page. `len` is clamped to at least one page.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn jump(&mut self, page: usize) {
        self.index = page.min(self.len - 1);
    }

    /// Moves according to `action`. Returns false for actions that do not navigate.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::Previous => self.previous(),
            PageAction::Next => self.next(),
            PageAction::First => self.jump(0),
            PageAction::Last => self.jump(self.len - 1),
            PageAction::Jump(page) => self.jump(page),
            PageAction::Delete => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_start() {
        let mut cursor = Cursor::new(3);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut cursor = Cursor::new(3);
        cursor.previous();
        assert_eq!(cursor.index(), 2);
        cursor.previous();
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let mut cursor = Cursor::new(len);
                cursor.jump(start);
                for _ in 0..len {
                    cursor.next();
                }
                assert_eq!(cursor.index(), start);
                for _ in 0..len {
                    cursor.previous();
                }
                assert_eq!(cursor.index(), start);
            }
        }
    }

    #[test]
    fn jumps_are_clamped() {
        let mut cursor = Cursor::new(4);
        assert!(cursor.apply(PageAction::Jump(10)));
        assert_eq!(cursor.index(), 3);
        assert!(cursor.apply(PageAction::First));
        assert_eq!(cursor.index(), 0);
        assert!(cursor.apply(PageAction::Last));
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn delete_does_not_move() {
        let mut cursor = Cursor::new(4);
        cursor.next();
        assert!(!cursor.apply(PageAction::Delete));
        assert_eq!(cursor.index(), 1);
    }
}
