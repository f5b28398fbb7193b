use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Non-numeric word, e.g. the `P3` magic.
    Word(String),
    /// Unsigned decimal field (dimension, max value or sample).
    Number(u32),
    // Sentinel
    Eof,
}

/// A token plus the 1-based position where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let eof = tok.token == Token::Eof;
            tokens.push(tok);
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            // `#` comments run to end of line
            if self.peek() == Some('#') {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<TokenWithPos, ParseError> {
        self.skip_whitespace_and_comments();

        let (line, col) = (self.line, self.col);
        let token = match self.peek() {
            None => Token::Eof,
            Some(c) if c.is_ascii_digit() => self.lex_number()?,
            Some(c) if c.is_ascii_alphanumeric() => self.lex_word(),
            Some(other) => {
                return Err(ParseError::new(
                    format!("unexpected character {:?}", other),
                    line,
                    col,
                ));
            }
        };

        Ok(TokenWithPos { token, line, col })
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let (line, col) = (self.line, self.col);
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        let s = &self.src[start..self.pos];
        s.parse::<u32>()
            .map(Token::Number)
            .map_err(|_| ParseError::new(format!("invalid number {:?}", s), line, col))
    }

    fn lex_word(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric()) {
            self.advance();
        }
        Token::Word(self.src[start..self.pos].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn header_tokens() {
        assert_eq!(
            kinds("P3\n2 2\n255\n"),
            vec![
                Token::Word("P3".into()),
                Token::Number(2),
                Token::Number(2),
                Token::Number(255),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(kinds("# made by hand\n7 # trailing\n"), vec![Token::Number(7), Token::Eof]);
    }

    #[test]
    fn positions_are_one_based() {
        let toks = Lexer::new("P3\n  10").tokenize().unwrap();
        assert_eq!((toks[1].line, toks[1].col), (2, 3));
    }

    #[test]
    fn rejects_punctuation() {
        let err = Lexer::new("P3 -1").tokenize().unwrap_err();
        assert_eq!((err.line, err.col), (1, 4));
    }
}
