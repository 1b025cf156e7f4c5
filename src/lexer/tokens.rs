use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("if", TokenKind::If);
        map.insert("while", TokenKind::While);
        map.insert("print", TokenKind::Print);
        map.insert("pass", TokenKind::Pass);
        map.insert("input", TokenKind::Input);
        map.insert("int", TokenKind::IntType);
        map.insert("str", TokenKind::StrType);
        map.insert("True", TokenKind::True);
        map.insert("False", TokenKind::False);
        map.insert("None", TokenKind::None);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Newline,
    Indent,
    Dedent,

    String,
    Number,
    Name,

    Assign,      // =
    PlusAssign,  // +=
    MinusAssign, // -=

    Less,   // <
    LessEq, // <=
    Equal,  // ==

    LParen,
    RParen,
    Colon,

    Plus,
    Minus,
    Times,
    IntDiv, // //
    Mod,    // %

    // Reserved
    And,
    Or,
    Not,
    If,
    While,
    Print,
    Pass,
    Input,
    IntType,
    StrType,
    True,
    False,
    None,
}

impl TokenKind {
    /// The name the grammar refers to this kind by.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Name => "NAME",
            TokenKind::Assign => "ASSIGN",
            TokenKind::PlusAssign => "PLUS_ASSIGN",
            TokenKind::MinusAssign => "MINUS_ASSIGN",
            TokenKind::Less => "LESS",
            TokenKind::LessEq => "LESS_EQ",
            TokenKind::Equal => "EQUAL",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::IntDiv => "INT_DIV",
            TokenKind::Mod => "MOD",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::If => "IF",
            TokenKind::While => "WHILE",
            TokenKind::Print => "PRINT",
            TokenKind::Pass => "PASS",
            TokenKind::Input => "INPUT",
            TokenKind::IntType => "INT_TYPE",
            TokenKind::StrType => "STR_TYPE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::None => "NONE",
        }
    }

    /// Tokens synthesized from line structure rather than matched text.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::EOF
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Int(i64),
    Str(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Str(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub location: Location,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({})", self.kind, value),
            None => write!(f, "{} ()", self.kind),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            Some(TokenValue::Int(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn debug(&self) {
        println!(
            "{}:{}\t{}",
            self.location.line, self.location.column, self
        );
    }
}
