//! SQL pretty-printing.
//!
//! Layout rules:
//! - Top-level keywords (`SELECT`, `FROM`, `ORDER BY`) sit on their own line
//!   and the clause body is indented one level below them.
//! - `AND`, `OR` and joins start a new line inside the clause body.
//! - Commas end the line outside parentheses.
//! - A parenthesized group stays inline when it is short and holds no
//!   top-level keyword; otherwise it opens an indented block.
//! - Statements are separated by a blank line.
//!
//! Formatting never fails. Text the lexer cannot make sense of passes through
//! unchanged.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind, WordClass};

/// Configuration for [`format_with_config`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    /// Text for one level of indentation.
    pub indent: String,
    /// Upper-case keywords and function names.
    pub uppercase_keywords: bool,
    /// Widest parenthesized group, in compressed characters, kept inline.
    pub inline_max_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            uppercase_keywords: true,
            inline_max_width: 50,
        }
    }
}

impl FormatConfig {
    /// Creates a configuration that keeps keyword case and indents by two spaces.
    #[must_use]
    pub fn preserving() -> Self {
        Self {
            indent: "  ".to_string(),
            uppercase_keywords: false,
            ..Self::default()
        }
    }

    /// Builder method to set the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Builder method to set keyword upper-casing.
    #[must_use]
    pub fn with_uppercase_keywords(mut self, uppercase: bool) -> Self {
        self.uppercase_keywords = uppercase;
        self
    }

    /// Builder method to set the inline group width.
    #[must_use]
    pub fn with_inline_max_width(mut self, width: usize) -> Self {
        self.inline_max_width = width;
        self
    }
}

/// Formats `sql` with the default configuration.
///
/// ```
/// let pretty = toolbox_sql::format("select a, b from t where x = 1 and y = 2");
/// assert_eq!(pretty, "SELECT\n    a,\n    b\nFROM\n    t\nWHERE\n    x = 1\n    AND y = 2");
/// ```
#[must_use]
pub fn format(sql: &str) -> String {
    format_with_config(sql, &FormatConfig::default())
}

/// Formats `sql` with the given configuration.
#[must_use]
pub fn format_with_config(sql: &str, config: &FormatConfig) -> String {
    let tokens = Lexer::tokenize(sql);
    let mut printer = Printer::new(sql, config);
    printer.run(&tokens);
    printer.finish()
}

/// Collapses `sql` onto a single line.
///
/// Comments are dropped and each run of whitespace or comments becomes one
/// space. String literals are left untouched.
#[must_use]
pub fn compress(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    for token in Lexer::tokenize(sql) {
        if token.is_trivia() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            out.push_str(token.text(sql));
        }
    }
    out.trim_end().to_string()
}

/// Splits `sql` into statements on `;` outside strings, comments and
/// parentheses.
///
/// Statements are trimmed and the terminating `;` is dropped. Statements that
/// hold nothing but whitespace and comments are skipped.
#[must_use]
pub fn split_statements(sql: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut has_content = false;

    for token in Lexer::tokenize(sql) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            TokenKind::Semicolon if depth == 0 => {
                if has_content {
                    statements.push(sql[start..token.span.start].trim());
                }
                start = token.span.end;
                has_content = false;
                continue;
            }
            _ => {}
        }
        if !token.is_trivia() {
            has_content = true;
        }
    }
    if has_content {
        statements.push(sql[start..].trim());
    }
    statements
}

/// An open parenthesized group.
#[derive(Clone, Copy, Debug)]
enum Group {
    /// Printed on the current line.
    Inline,
    /// Printed as an indented block; holds the layout to restore on close.
    Block {
        level: usize,
        base: usize,
        in_between: bool,
    },
}

struct Printer<'a> {
    source: &'a str,
    config: &'a FormatConfig,
    out: String,
    /// Indentation level for the next line.
    level: usize,
    /// Indentation level of top-level keywords in the current block.
    base: usize,
    at_line_start: bool,
    groups: Vec<Group>,
    inline_depth: usize,
    prev: Option<Token>,
    /// Whitespace separated the previous token from the current one.
    spaced: bool,
    /// The next token attaches to the previous one (unary operators).
    glue_next: bool,
    /// Inside `BETWEEN x AND y`, before the `AND`.
    in_between: bool,
    pending_statement: bool,
}

impl<'a> Printer<'a> {
    fn new(source: &'a str, config: &'a FormatConfig) -> Self {
        Self {
            source,
            config,
            out: String::with_capacity(source.len() * 2),
            level: 0,
            base: 0,
            at_line_start: true,
            groups: Vec::new(),
            inline_depth: 0,
            prev: None,
            spaced: false,
            glue_next: false,
            in_between: false,
            pending_statement: false,
        }
    }

    fn run(&mut self, tokens: &[Token]) {
        for (index, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::Whitespace {
                self.spaced = true;
                continue;
            }
            if self.pending_statement {
                self.pending_statement = false;
                let trimmed = self.out.trim_end().len();
                self.out.truncate(trimmed);
                self.out.push_str("\n\n");
                self.at_line_start = true;
            }
            self.token(tokens, index, *token);
            self.prev = Some(*token);
            self.spaced = false;
        }
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }

    fn inline(&self) -> bool {
        self.inline_depth > 0
    }

    fn token(&mut self, tokens: &[Token], index: usize, token: Token) {
        let text = token.text(self.source);
        match token.kind {
            TokenKind::Word(WordClass::TopLevel) if !self.inline() => {
                self.in_between = false;
                self.level = self.base;
                self.break_line();
                self.write(token, &self.keyword(text));
                self.level = self.base + 1;
                self.break_line();
            }
            TokenKind::Word(WordClass::Newline) if !self.inline() => {
                let word = self.keyword(text);
                if self.in_between && word.eq_ignore_ascii_case("AND") {
                    self.in_between = false;
                } else {
                    self.break_line();
                }
                self.write(token, &word);
            }
            TokenKind::Word(class) => {
                let word = if class.is_keyword() {
                    self.keyword(text)
                } else {
                    text.to_string()
                };
                if word.eq_ignore_ascii_case("BETWEEN") && !self.inline() {
                    self.in_between = true;
                }
                self.write(token, &word);
            }
            TokenKind::Comma => {
                self.write(token, text);
                if !self.inline() {
                    self.break_line();
                }
            }
            TokenKind::LParen => self.open_group(tokens, index, token),
            TokenKind::RParen => self.close_group(token),
            TokenKind::Semicolon => {
                self.write(token, text);
                self.level = 0;
                self.base = 0;
                self.groups.clear();
                self.inline_depth = 0;
                self.in_between = false;
                self.pending_statement = true;
            }
            TokenKind::LineComment => {
                self.write(token, text.trim_end());
                self.break_line();
            }
            TokenKind::Operator => {
                self.write(token, text);
                if matches!(text, "-" | "+" | "~" | "!") && !self.prev_is_operand() {
                    self.glue_next = true;
                }
            }
            _ => self.write(token, text),
        }
    }

    fn open_group(&mut self, tokens: &[Token], index: usize, token: Token) {
        self.write(token, "(");
        if self.inline() || self.fits_inline(tokens, index) {
            self.groups.push(Group::Inline);
            self.inline_depth += 1;
        } else {
            self.groups.push(Group::Block {
                level: self.level,
                base: self.base,
                in_between: self.in_between,
            });
            self.in_between = false;
            self.level += 1;
            self.base = self.level;
            self.break_line();
        }
    }

    fn close_group(&mut self, token: Token) {
        match self.groups.pop() {
            Some(Group::Inline) => {
                self.inline_depth = self.inline_depth.saturating_sub(1);
            }
            Some(Group::Block {
                level,
                base,
                in_between,
            }) => {
                self.level = level;
                self.base = base;
                self.in_between = in_between;
                self.break_line();
            }
            None => {}
        }
        self.write(token, ")");
    }

    /// Returns true when the group opening at `open` can stay on one line.
    fn fits_inline(&self, tokens: &[Token], open: usize) -> bool {
        let mut depth = 0usize;
        for token in &tokens[open..] {
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        let group = &self.source[tokens[open].span.start..token.span.end];
                        return compress(group).len() <= self.config.inline_max_width;
                    }
                }
                TokenKind::Word(WordClass::TopLevel) | TokenKind::LineComment => return false,
                _ => {}
            }
        }
        true
    }

    fn prev_is_operand(&self) -> bool {
        matches!(
            self.prev.map(|t| t.kind),
            Some(
                TokenKind::Word(WordClass::Identifier)
                    | TokenKind::QuotedIdent
                    | TokenKind::String
                    | TokenKind::Number
                    | TokenKind::Placeholder
                    | TokenKind::RParen
            )
        )
    }

    fn keyword(&self, text: &str) -> String {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if self.config.uppercase_keywords {
            normalized.to_ascii_uppercase()
        } else {
            normalized
        }
    }

    fn needs_space(&self, token: Token) -> bool {
        if self.at_line_start || self.out.is_empty() || self.out.ends_with([' ', '\n']) {
            return false;
        }
        if self.glue_next {
            return false;
        }
        let Some(prev) = self.prev else {
            return false;
        };
        if matches!(prev.kind, TokenKind::LParen | TokenKind::Dot) {
            return false;
        }
        match token.kind {
            TokenKind::RParen | TokenKind::Comma | TokenKind::Dot | TokenKind::Semicolon => false,
            TokenKind::LParen => match prev.kind {
                TokenKind::Word(WordClass::Function) => false,
                TokenKind::Word(WordClass::Identifier) | TokenKind::QuotedIdent => self.spaced,
                _ => true,
            },
            _ => true,
        }
    }

    fn write(&mut self, token: Token, text: &str) {
        if self.needs_space(token) {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.at_line_start = false;
        self.glue_next = false;
    }

    /// Starts a new line at the current level.
    ///
    /// Breaking while already at the start of a line re-indents that line
    /// instead of adding another.
    fn break_line(&mut self) {
        if self.at_line_start {
            let line_start = self.out.rfind('\n').map_or(0, |i| i + 1);
            self.out.truncate(line_start);
        } else {
            let trimmed = self.out.trim_end_matches(' ').len();
            self.out.truncate(trimmed);
            self.out.push('\n');
        }
        for _ in 0..self.level {
            self.out.push_str(&self.config.indent);
        }
        self.at_line_start = true;
        self.glue_next = false;
    }
}
