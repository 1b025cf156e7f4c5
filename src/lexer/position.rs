/// Columns between tab stops.
pub const TAB_WIDTH: u32 = 8;

/// Line and column of the next unconsumed character, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: u32,
    pub column: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor { line: 1, column: 1 }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves past one consumed character.
    ///
    /// `\r` never moves the cursor, so `\r\n` and `\n\r` both count as a
    /// single line break.
    pub fn advance(&mut self, ch: char) {
        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\t' => self.column += TAB_WIDTH - (self.column - 1) % TAB_WIDTH,
            '\r' => {}
            _ => self.column += 1,
        }
    }

    pub fn advance_str(&mut self, text: &str) {
        text.chars().for_each(|ch| self.advance(ch));
    }
}

/// Column that a run of leading spaces and tabs ends at.
pub fn indent_column(run: &str) -> u32 {
    let mut total = 0;

    for ch in run.chars() {
        match ch {
            '\t' => total += TAB_WIDTH - total % TAB_WIDTH,
            _ => total += 1,
        }
    }

    total + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_column_spaces() {
        assert_eq!(indent_column(""), 1);
        assert_eq!(indent_column(" "), 2);
        assert_eq!(indent_column("    "), 5);
    }

    #[test]
    fn test_indent_column_tabs() {
        assert_eq!(indent_column("\t"), 9);
        assert_eq!(indent_column("   \t"), 9);
        assert_eq!(indent_column("\t\t"), 17);
        assert_eq!(indent_column("\t  "), 11);
        assert_eq!(indent_column("        \t"), 17);
    }

    #[test]
    fn test_cursor_plain_characters() {
        let mut cursor = Cursor::new();
        cursor.advance_str("abc");
        assert_eq!(cursor, Cursor { line: 1, column: 4 });
    }

    #[test]
    fn test_cursor_tab_stops() {
        let mut cursor = Cursor::new();
        cursor.advance('\t');
        assert_eq!(cursor.column, 9);

        let mut cursor = Cursor::new();
        cursor.advance_str("ab\t");
        assert_eq!(cursor.column, 9);

        cursor.advance('\t');
        assert_eq!(cursor.column, 17);
    }

    #[test]
    fn test_cursor_line_breaks() {
        for text in ["x\n", "x\r\n", "x\n\r"] {
            let mut cursor = Cursor::new();
            cursor.advance_str(text);
            assert_eq!(cursor, Cursor { line: 2, column: 1 }, "{:?}", text);
        }
    }

    #[test]
    fn test_cursor_lone_carriage_return() {
        let mut cursor = Cursor::new();
        cursor.advance_str("a\rb");
        assert_eq!(cursor, Cursor { line: 1, column: 3 });
    }
}
