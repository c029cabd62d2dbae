use log::{debug, trace};

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Single-pass scanner over a borrowed source string.
///
/// `pos` is the byte under examination (`ch`), `read_pos` the byte after it.
/// Once the end of the input is reached `pos == source.len()`, `ch` is 0 and
/// every further call to `next_token` returns `EOF`.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    read_pos: usize,
    ch: u8,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        let mut lexer = Lexer {
            source,
            pos: 0,
            read_pos: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(start, start));
        }

        let kind = match self.ch {
            b'=' => self.either(b'=', TokenKind::Equals, TokenKind::Assignment),
            b'!' => self.either(b'=', TokenKind::NotEquals, TokenKind::Not),
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'{' => TokenKind::OpenCurly,
            b'}' => TokenKind::CloseCurly,
            b'-' => TokenKind::Dash,
            b'/' => TokenKind::Slash,
            b'*' => TokenKind::Star,
            b'<' => TokenKind::Less,
            b'>' => TokenKind::Greater,
            ch if is_letter(ch) => return self.read_identifier(),
            ch if ch.is_ascii_digit() => return self.read_number(),
            ch if !ch.is_ascii() => return self.read_illegal_char(),
            _ => TokenKind::Illegal,
        };

        self.read_char();

        let token = MK_TOKEN!(kind, self.slice(start, self.pos), MK_SPAN!(start, self.pos));
        if kind == TokenKind::Illegal {
            debug!("illegal character {:?} at byte {}", token.literal, start);
        }
        trace!("lexed {}", token);
        token
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn read_char(&mut self) {
        let bytes = self.source.as_bytes();

        if self.read_pos >= bytes.len() {
            self.ch = 0;
            self.pos = bytes.len();
            self.read_pos = bytes.len() + 1;
        } else {
            self.ch = bytes[self.read_pos];
            self.pos = self.read_pos;
            self.read_pos += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.source.as_bytes().get(self.read_pos).copied().unwrap_or(0)
    }

    /// Consumes `next` as the second character of `double` if it follows,
    /// otherwise leaves the cursor alone and yields `single`.
    fn either(&mut self, next: u8, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek_char() == next {
            self.read_char();
            double
        } else {
            single
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.pos;
        while !self.at_eof() && is_letter(self.ch) {
            self.read_char();
        }

        let word = self.slice(start, self.pos);
        let token = MK_TOKEN!(lookup_identifier(&word), word, MK_SPAN!(start, self.pos));
        trace!("lexed {}", token);
        token
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        while !self.at_eof() && self.ch.is_ascii_digit() {
            self.read_char();
        }

        let token = MK_TOKEN!(TokenKind::Int, self.slice(start, self.pos), MK_SPAN!(start, self.pos));
        trace!("lexed {}", token);
        token
    }

    // Non-ASCII input: take the whole character so the literal stays valid UTF-8.
    fn read_illegal_char(&mut self) -> Token {
        let start = self.pos;
        let width = self
            .source
            .get(start..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);

        for _ in 0..width {
            self.read_char();
        }

        let token = MK_TOKEN!(TokenKind::Illegal, self.slice(start, self.pos), MK_SPAN!(start, self.pos));
        debug!("illegal character {:?} at byte {}", token.literal, start);
        token
    }

    fn slice(&self, start: usize, end: usize) -> String {
        match self.source.get(start..end) {
            Some(text) => text.to_string(),
            None => String::from_utf8_lossy(&self.source.as_bytes()[start..end]).into_owned(),
        }
    }
}

/// Yields every token before `EOF`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans the whole source, returning every token including the final `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
