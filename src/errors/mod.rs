//! Lexical diagnostics.
//!
//! Every lexical error is fatal: the scanning session stops and a single
//! error is surfaced, carrying the location it was raised at. This module
//! defines:
//!
//! - The error structure pairing a failure with its source location
//! - The error variants the lexer can raise
//! - Optional hints shown next to the error name

pub mod errors;

#[cfg(test)]
mod tests;
