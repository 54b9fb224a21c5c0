//! Lexer for SQL text.
//!
//! The lexer never fails: unterminated strings and comments run to the end of
//! input, and unknown characters become single-character operators.

use crate::keywords::{COMPOUND, classify};
use crate::token::{Span, Token, TokenKind};

/// Operators longer than one character, longest first.
const MULTI_CHAR_OPERATORS: &[&str] = &["<=>", "<>", "!=", "<=", ">=", "||", "&&", ":=", "<<", ">>"];

/// Lexer for SQL source text.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token, or [`TokenKind::Eof`] at the end of input.
    pub fn next_token(&mut self) -> Token {
        let start = self.position;
        let line = self.line;
        let column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::new(start, start, line, column));
        };

        let kind = match c {
            c if c.is_whitespace() => self.scan_whitespace(),
            '-' if self.peek_char_n(1) == Some('-') => self.scan_line_comment(),
            '#' => self.scan_line_comment(),
            '/' if self.peek_char_n(1) == Some('*') => self.scan_block_comment(),
            '\'' | '"' => self.scan_quoted(c, TokenKind::String),
            '`' => self.scan_quoted('`', TokenKind::QuotedIdent),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            ';' => self.single(TokenKind::Semicolon),
            '?' => self.single(TokenKind::Placeholder),
            ':' if self.peek_char_n(1).is_some_and(is_word_start) => self.scan_variable(),
            '@' => self.scan_variable(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_word_start(c) => self.scan_word(start),
            _ => self.scan_operator(),
        };

        Token::new(kind, Span::new(start, self.position, line, column))
    }

    /// Tokenizes all of `source`, trivia included, without the trailing EOF.
    #[must_use]
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances past `len` bytes.
    fn advance_bytes(&mut self, len: usize) {
        let target = self.position + len;
        while self.position < target && !self.rest.is_empty() {
            self.advance();
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn scan_whitespace(&mut self) -> TokenKind {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
        TokenKind::Whitespace
    }

    fn scan_line_comment(&mut self) -> TokenKind {
        while self.peek_char().is_some_and(|c| c != '\n') {
            self.advance();
        }
        TokenKind::LineComment
    }

    fn scan_block_comment(&mut self) -> TokenKind {
        self.advance_bytes(2);
        while !self.rest.is_empty() {
            if self.rest.starts_with("*/") {
                self.advance_bytes(2);
                break;
            }
            self.advance();
        }
        TokenKind::BlockComment
    }

    /// Scans a quoted string or identifier.
    ///
    /// Backslash escapes the next character and a doubled quote stands for
    /// itself.
    fn scan_quoted(&mut self, quote: char, kind: TokenKind) -> TokenKind {
        self.advance();
        while let Some(c) = self.peek_char() {
            self.advance();
            if c == '\\' && quote != '`' {
                self.advance();
            } else if c == quote {
                if self.peek_char() == Some(quote) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        kind
    }

    fn scan_variable(&mut self) -> TokenKind {
        while matches!(self.peek_char(), Some('@' | ':')) {
            self.advance();
        }
        while self.peek_char().is_some_and(is_word_char) {
            self.advance();
        }
        TokenKind::Placeholder
    }

    fn scan_number(&mut self) -> TokenKind {
        self.skip_digits();
        if self.peek_char() == Some('.') && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            self.skip_digits();
        }
        if matches!(self.peek_char(), Some('e' | 'E')) {
            let exponent_digit = match self.peek_char_n(1) {
                Some('+' | '-') => self.peek_char_n(2),
                other => other,
            };
            if exponent_digit.is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
                if matches!(self.peek_char(), Some('+' | '-')) {
                    self.advance();
                }
                self.skip_digits();
            }
        }
        TokenKind::Number
    }

    fn skip_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scans a word, extending it over the longest multi-word keyword it starts.
    fn scan_word(&mut self, start: usize) -> TokenKind {
        while self.peek_char().is_some_and(is_word_char) {
            self.advance();
        }
        let first = self.source[start..self.position].to_ascii_uppercase();

        let mut best: Option<(usize, crate::token::WordClass)> = None;
        for (words, class) in COMPOUND {
            if words[0] != first {
                continue;
            }
            if let Some(len) = match_following(self.rest, &words[1..]) {
                if best.is_none_or(|(longest, _)| len > longest) {
                    best = Some((len, *class));
                }
            }
        }

        match best {
            Some((len, class)) => {
                self.advance_bytes(len);
                TokenKind::Word(class)
            }
            None => TokenKind::Word(classify(&first)),
        }
    }

    fn scan_operator(&mut self) -> TokenKind {
        match MULTI_CHAR_OPERATORS
            .iter()
            .find(|op| self.rest.starts_with(**op))
        {
            Some(op) => self.advance_bytes(op.len()),
            None => self.advance(),
        }
        TokenKind::Operator
    }
}

/// Matches `words` (each preceded by whitespace) at the start of `rest`.
///
/// Returns the number of bytes the match covers.
fn match_following(rest: &str, words: &[&str]) -> Option<usize> {
    let mut offset = 0;
    for word in words {
        let remaining = &rest[offset..];
        let after_ws = remaining.trim_start_matches(char::is_whitespace);
        let ws_len = remaining.len() - after_ws.len();
        if ws_len == 0 {
            return None;
        }
        let word_len = after_ws
            .find(|c: char| !is_word_char(c))
            .unwrap_or(after_ws.len());
        if !after_ws[..word_len].eq_ignore_ascii_case(word) {
            return None;
        }
        offset += ws_len + word_len;
    }
    Some(offset)
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
