use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER,
};

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP},
};

/// Handles the text a pattern matched. `Ok(None)` means the text was
/// consumed without producing a token.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    pub regex: Regex,
    pub handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("pattern table regexes are valid"),
        handler,
    }
}

lazy_static! {
    /// In-line rules, tried in order; the first one that matches wins.
    pub static ref INLINE_PATTERNS: Vec<RegexPattern> = vec![
        pattern("^\"[^\"\n\r\t]*\"", string_handler),
        pattern(r"^\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusAssign)),
        pattern("^-=", MK_DEFAULT_HANDLER!(TokenKind::MinusAssign)),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEq)),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equal)),
        pattern("^[A-Za-z_][A-Za-z0-9_]*", symbol_handler),
        pattern("^(0|[1-9][0-9]*)", number_handler),
        pattern("^//", MK_DEFAULT_HANDLER!(TokenKind::IntDiv)),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assign)),
        pattern(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus)),
        pattern(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Times)),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::LParen)),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::RParen)),
        pattern("^%", MK_DEFAULT_HANDLER!(TokenKind::Mod)),
        pattern("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        pattern("^(#[^\n\r]*)?(\r\n|\n\r|\n)", newline_handler),
        pattern("^#[^\n\r]*", skip_handler),
        pattern("^[ \t\r]+", skip_handler),
    ];

    /// A line holding nothing but whitespace and maybe a comment.
    pub static ref BLANK_LINE: Regex =
        Regex::new("^[ \t\r]*(#[^\n\r]*)?(\r\n|\n\r|\n|\\z)").expect("blank line regex is valid");

    /// Leading indentation of a line.
    pub static ref INDENTATION: Regex = Regex::new("^[ \t]*").expect("indentation regex is valid");
}

fn string_handler(lexer: &mut Lexer, text: &str) -> Result<Option<Token>, Error> {
    let value = lexer.unescape(&text[1..text.len() - 1]);
    Ok(Some(lexer.emit(
        TokenKind::String,
        Some(TokenValue::Str(value)),
        text,
    )))
}

fn symbol_handler(lexer: &mut Lexer, text: &str) -> Result<Option<Token>, Error> {
    match RESERVED_LOOKUP.get(text) {
        Some(kind) => Ok(Some(lexer.emit(*kind, None, text))),
        None => Ok(Some(lexer.emit(
            TokenKind::Name,
            Some(TokenValue::Str(String::from(text))),
            text,
        ))),
    }
}

fn number_handler(lexer: &mut Lexer, text: &str) -> Result<Option<Token>, Error> {
    match text.parse::<i64>() {
        Ok(value) => Ok(Some(lexer.emit(
            TokenKind::Number,
            Some(TokenValue::Int(value)),
            text,
        ))),
        Err(_) => Err(lexer.fail(ErrorImpl::NumberParseError {
            token: String::from(text),
        })),
    }
}

fn newline_handler(lexer: &mut Lexer, text: &str) -> Result<Option<Token>, Error> {
    let token = lexer.emit(TokenKind::Newline, None, text);
    lexer.start_line();
    Ok(Some(token))
}

fn skip_handler(lexer: &mut Lexer, text: &str) -> Result<Option<Token>, Error> {
    lexer.consume(text);
    Ok(None)
}
