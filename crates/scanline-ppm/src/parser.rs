use crate::error::ParseError;
use crate::image::PpmImage;
use crate::lexer::{Lexer, Token, TokenWithPos};

/// Magic token of the plain-text RGB format.
pub const MAGIC: &str = "P3";

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Tokens left before `Eof`.
    fn remaining(&self) -> usize {
        self.tokens
            .iter()
            .skip(self.pos)
            .take_while(|t| t.token != Token::Eof)
            .count()
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_number(&mut self, what: &str) -> Result<u32, ParseError> {
        let err = self.err(format!("expected {}", what));
        match self.advance() {
            Token::Number(n) => Ok(n),
            tok => Err(ParseError { message: format!("{}, got {:?}", err.message, tok), ..err }),
        }
    }

    // ── Image ─────────────────────────────────────────────────────────────

    pub fn parse_image(&mut self) -> Result<PpmImage, ParseError> {
        self.parse_magic()?;

        let width = self.parse_dimension("width")?;
        let height = self.parse_dimension("height")?;
        let max_value = self.parse_max_value()?;

        // Header values are untrusted: size nothing from them until the
        // samples that back them are known to be present.
        let count = width
            .checked_mul(height)
            .ok_or_else(|| self.err("image dimensions overflow"))?;
        let remaining = self.remaining();
        if count.checked_mul(3).is_none_or(|needed| needed > remaining) {
            return Err(self.err(format!(
                "header declares {}x{} pixels but only {} samples follow",
                width, height, remaining
            )));
        }
        let mut pixels = Vec::with_capacity(count);
        for _ in 0..count {
            let mut rgb = [0u16; 3];
            for channel in rgb.iter_mut() {
                *channel = self.parse_sample(max_value)?;
            }
            pixels.push(rgb);
        }

        if self.peek() != &Token::Eof {
            return Err(self.err(format!(
                "unexpected {:?} after {} pixels",
                self.peek(),
                count
            )));
        }

        Ok(PpmImage { width, height, max_value, pixels })
    }

    // ── Header ────────────────────────────────────────────────────────────

    fn parse_magic(&mut self) -> Result<(), ParseError> {
        let err = self.err(format!("expected {} magic", MAGIC));
        match self.advance() {
            Token::Word(w) if w == MAGIC => Ok(()),
            tok => Err(ParseError { message: format!("{}, got {:?}", err.message, tok), ..err }),
        }
    }

    fn parse_dimension(&mut self, what: &str) -> Result<usize, ParseError> {
        let err = self.err(format!("{} must be positive", what));
        match self.expect_number(what)? {
            0 => Err(err),
            n => Ok(n as usize),
        }
    }

    fn parse_max_value(&mut self) -> Result<u16, ParseError> {
        let err = self.err("max value must be in 1..=65535");
        match self.expect_number("max value")? {
            n @ 1..=65535 => Ok(n as u16),
            _ => Err(err),
        }
    }

    // ── Sample ────────────────────────────────────────────────────────────

    fn parse_sample(&mut self, max_value: u16) -> Result<u16, ParseError> {
        let err = self.err("sample exceeds max value");
        let n = self.expect_number("sample")?;
        if n > u32::from(max_value) {
            return Err(ParseError {
                message: format!("{} ({} > {})", err.message, n, max_value),
                ..err
            });
        }
        Ok(n as u16)
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse `P3` image text into a [`PpmImage`].
pub fn parse_str(src: &str) -> Result<PpmImage, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_image()
}
