//! Lexical analysis for the indentation-sensitive language.
//!
//! Converts source text into tokens, one per call, for a pull-based parser.
//! It handles:
//!
//! - Line/column tracking with 8-column tab stops
//! - Synthesizing NEWLINE, INDENT and DEDENT from line structure
//! - Keywords, identifiers, integer and string literals, and operators,
//!   matched with an ordered table of regex patterns
//! - Skipping comments, blank lines and inline whitespace

pub mod escape;
pub mod indent;
pub mod lexer;
pub mod patterns;
pub mod position;
pub mod tokens;
