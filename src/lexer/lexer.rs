use std::{cmp::Ordering, rc::Rc};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location, MK_TOKEN,
};

use super::{
    escape,
    indent::IndentStack,
    patterns::{BLANK_LINE, INDENTATION, INLINE_PATTERNS},
    position::{indent_column, Cursor},
    tokens::{Token, TokenKind, TokenValue},
};

/// Decodes the interior of a string literal.
pub type Unescaper = fn(&str) -> String;

/// Which rules are active for the next piece of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// At the start of a logical line, before its indentation is resolved.
    LineStart,
    /// Inside the body of a logical line.
    InLine,
    /// Closing blocks until the stack top matches the pending indentation.
    DedentResolution,
}

/// One scanning session over a single source text.
///
/// Tokens are pulled one at a time with [`Lexer::next_token`]. The first
/// error ends the session: every later call returns that same error.
pub struct Lexer {
    source: String,
    pos: usize,
    cursor: Cursor,
    mode: Mode,
    indents: IndentStack,
    file: Rc<String>,
    unescaper: Unescaper,
    failure: Option<Error>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            cursor: Cursor::new(),
            mode: Mode::LineStart,
            indents: IndentStack::new(),
            file: file_name,
            unescaper: escape::unescape,
            failure: None,
        }
    }

    pub fn with_unescaper(mut self, unescaper: Unescaper) -> Lexer {
        self.unescaper = unescaper;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn indent_levels(&self) -> &[u32] {
        self.indents.levels()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn locate(&self, cursor: Cursor) -> Location {
        Location {
            source_name: Rc::clone(&self.file),
            line: cursor.line,
            column: cursor.column,
        }
    }

    fn here(&self) -> Location {
        self.locate(self.cursor)
    }

    /// Raises `error` at the current location and ends the session.
    pub fn fail(&mut self, error: ErrorImpl) -> Error {
        let error = Error::new(error, self.here());
        debug!(error = %error, "lexing failed");
        self.failure = Some(error.clone());
        error
    }

    pub(crate) fn unescape(&self, raw: &str) -> String {
        (self.unescaper)(raw)
    }

    /// Consumes `text`, which must be the prefix of the remaining input.
    pub(crate) fn consume(&mut self, text: &str) {
        debug_assert!(self.remainder().starts_with(text));
        self.cursor.advance_str(text);
        self.pos += text.len();
    }

    /// Builds a token located at the start of `text`, then consumes `text`.
    pub(crate) fn emit(&mut self, kind: TokenKind, value: Option<TokenValue>, text: &str) -> Token {
        let location = self.here();
        self.consume(text);
        MK_TOKEN!(kind, value, location)
    }

    fn structural(&self, kind: TokenKind) -> Token {
        MK_TOKEN!(kind, None, self.here())
    }

    pub(crate) fn start_line(&mut self) {
        self.mode = Mode::LineStart;
    }

    /// Returns the next token. Once `EOF` has been returned, keeps returning it.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        loop {
            let step = match self.mode {
                Mode::LineStart => self.line_start()?,
                Mode::DedentResolution => self.dedent_resolution()?,
                Mode::InLine => self.in_line()?,
            };

            if let Some(token) = step {
                trace!(
                    kind = %token.kind,
                    line = token.location.line,
                    column = token.location.column,
                    "token"
                );
                return Ok(token);
            }
        }
    }

    fn line_start(&mut self) -> Result<Option<Token>, Error> {
        if self.at_eof() {
            return Ok(Some(self.end_of_input()));
        }

        if let Some(blank) = BLANK_LINE.find(self.remainder()) {
            let text = blank.as_str().to_owned();
            self.consume(&text);
            return Ok(None);
        }

        let run = self.indentation();
        let level = indent_column(&run);

        match self.indents.top().cmp(&level) {
            Ordering::Equal => {
                self.consume(&run);
                self.mode = Mode::InLine;
                Ok(None)
            }
            Ordering::Less => {
                let token = self.emit(TokenKind::Indent, None, &run);
                self.indents.push(level);
                debug!(column = level, depth = self.indents.depth(), "block opened");
                self.mode = Mode::InLine;
                Ok(Some(token))
            }
            Ordering::Greater => {
                self.mode = Mode::DedentResolution;
                Ok(None)
            }
        }
    }

    fn dedent_resolution(&mut self) -> Result<Option<Token>, Error> {
        let run = self.indentation();
        let target = indent_column(&run);

        match self.indents.top().cmp(&target) {
            Ordering::Less => Err(self.fail(ErrorImpl::BadIndentation)),
            Ordering::Greater => {
                let token = self.structural(TokenKind::Dedent);
                let closed = self.indents.pop();
                debug!(?closed, target_column = target, "block closed");
                Ok(Some(token))
            }
            Ordering::Equal => {
                self.consume(&run);
                self.mode = Mode::InLine;
                Ok(None)
            }
        }
    }

    fn in_line(&mut self) -> Result<Option<Token>, Error> {
        if self.at_eof() {
            return Ok(Some(self.end_of_input()));
        }

        for pattern in INLINE_PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(self.remainder()) {
                let text = matched.as_str().to_owned();
                return (pattern.handler)(self, &text);
            }
        }

        let next = self.remainder().chars().next();
        match next {
            Some(character) => Err(self.fail(ErrorImpl::UnexpectedCharacter { character })),
            None => Ok(Some(self.end_of_input())),
        }
    }

    /// Closes one open block per call, then yields `EOF` for good.
    fn end_of_input(&mut self) -> Token {
        match self.indents.pop() {
            Some(level) => {
                debug!(column = level, "block closed at end of input");
                self.structural(TokenKind::Dedent)
            }
            None => self.structural(TokenKind::EOF),
        }
    }

    fn indentation(&self) -> String {
        INDENTATION
            .find(self.remainder())
            .map(|run| run.as_str().to_owned())
            .unwrap_or_default()
    }
}

/// Runs a whole session, collecting every token up to and including `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
