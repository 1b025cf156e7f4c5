/// Column of an unindented line.
pub const BASE_LEVEL: u32 = 1;

/// Indentation columns of the currently open blocks, innermost on top.
///
/// Never empty: the base level sits at the bottom and cannot be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStack {
    levels: Vec<u32>,
}

impl Default for IndentStack {
    fn default() -> Self {
        IndentStack {
            levels: vec![BASE_LEVEL],
        }
    }
}

impl IndentStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> u32 {
        *self.levels.last().unwrap_or(&BASE_LEVEL)
    }

    /// Opens a block at `level`, which must be deeper than the current one.
    pub fn push(&mut self, level: u32) {
        debug_assert!(level > self.top(), "indent levels must increase");
        self.levels.push(level);
    }

    /// Closes the innermost block. Returns `None` at the base level.
    pub fn pop(&mut self) -> Option<u32> {
        if self.levels.len() > 1 {
            self.levels.pop()
        } else {
            None
        }
    }

    /// Number of open blocks above the base level.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_base() {
        let stack = IndentStack::new();
        assert_eq!(stack.top(), BASE_LEVEL);
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.levels(), &[1]);
    }

    #[test]
    fn test_push_pop() {
        let mut stack = IndentStack::new();
        stack.push(5);
        stack.push(9);
        assert_eq!(stack.top(), 9);
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop(), Some(9));
        assert_eq!(stack.pop(), Some(5));
        assert_eq!(stack.top(), 1);
    }

    #[test]
    fn test_base_cannot_be_popped() {
        let mut stack = IndentStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.levels(), &[1]);
    }
}
