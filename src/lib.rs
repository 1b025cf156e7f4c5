#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, io, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};
use crate::lexer::position::TAB_WIDTH;

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Start of a matched piece of source text.
///
/// Only the lexer produces these (through `Lexer::locate`), everything else
/// just reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub source_name: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.source_name, self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `file`, without its line break.
pub fn get_line_at_position(file: PathBuf, line: u32) -> io::Result<String> {
    let content = fs::read_to_string(&file)?;
    Ok(line_of(&content, line).unwrap_or_default())
}

fn line_of(content: &str, line: u32) -> Option<String> {
    content
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(|text| text.trim_end_matches('\r').to_string())
}

/// Replaces tabs with spaces up to the next tab stop, so that character
/// offsets in the result line up with lexer columns.
pub fn expand_tabs(text: &str) -> String {
    let mut result = String::new();
    let mut width = 0;

    for c in text.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - width % TAB_WIDTH;
            result.push_str(&" ".repeat(pad as usize));
            width += pad;
        } else {
            result.push(c);
            width += 1;
        }
    }

    result
}

pub fn display_error(error: &Error, file: PathBuf) {
    /*
        Error: UnexpectedCharacter (Unexpected character: $)
        -> example.py
           |
        20 | x = $
           | ----^
    */

    let location = error.get_location();
    let line_text = get_line_at_position(file.clone(), location.line).unwrap_or_default();

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file.as_os_str().to_string_lossy());
    eprintln!("{:>padding$}", "|");
    eprintln!("{} | {}", line_string, expand_tabs(&line_text).trim_end());

    let arrows = location.column as usize;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let line =
            super::get_line_at_position(std::path::PathBuf::from("tests/test_file.txt"), 1)
                .unwrap();
        assert_eq!(line, "if ready:");

        let line =
            super::get_line_at_position(std::path::PathBuf::from("tests/test_file.txt"), 4)
                .unwrap();
        assert_eq!(line, "print(\"done\")");
    }

    #[test]
    fn test_line_past_end_is_empty() {
        let line =
            super::get_line_at_position(std::path::PathBuf::from("tests/test_file.txt"), 99)
                .unwrap();
        assert_eq!(line, "");
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(super::expand_tabs("\tx"), "        x");
        assert_eq!(super::expand_tabs("ab\tc"), "ab      c");
        assert_eq!(super::expand_tabs("no tabs"), "no tabs");
    }

    #[test]
    fn test_location_display() {
        let location = super::Location {
            source_name: std::rc::Rc::new("main.py".to_string()),
            line: 3,
            column: 9,
        };
        assert_eq!(location.to_string(), "main.py:3:9");
    }
}
