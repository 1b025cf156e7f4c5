//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler for payload-free tokens
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's payload (`Option<TokenValue>`)
/// * `$location` - Where the token's text starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, Some(TokenValue::Int(42)), location);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $location:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            location: $location,
        }
    };
}

/// Creates a pattern handler for tokens that carry no payload.
///
/// The generated handler records the current location, consumes the
/// matched text and returns a token of the given kind.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer,
         text: &str|
         -> Result<Option<$crate::lexer::tokens::Token>, $crate::errors::errors::Error> {
            Ok(Some(lexer.emit($kind, None, text)))
        }
    };
}
