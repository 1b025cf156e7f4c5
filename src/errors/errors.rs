use std::fmt::Display;

use thiserror::Error;

use crate::Location;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    location: Location,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: Location) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &Location {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::BadIndentation => "BadIndentation",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::BadIndentation => ErrorTip::Suggestion(String::from(
                "This line does not line up with any enclosing block",
            )),
            ErrorImpl::UnexpectedCharacter { character } => match character {
                '"' => ErrorTip::Suggestion(String::from(
                    "Strings must be closed on the same line and cannot contain tabs",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Bad indentation.")]
    BadIndentation,
    #[error("Unexpected character: {character}")]
    UnexpectedCharacter { character: char },
    #[error("Integer literal out of range: {token}")]
    NumberParseError { token: String },
}
