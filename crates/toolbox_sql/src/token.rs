//! Token types for SQL text.

/// Location of a token in the source query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where the token starts.
    pub start: usize,
    /// Byte offset where the token ends (exclusive).
    pub end: usize,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the text this span covers in `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// A token from lexical analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Where it was lexed.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true for whitespace and comments.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

/// How a bare word participates in layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// Starts a clause on its own line (`SELECT`, `ORDER BY`).
    TopLevel,
    /// Starts a new line inside a clause (`AND`, `LEFT JOIN`).
    Newline,
    /// Any other reserved word (`AS`, `IN`, `DESC`).
    Reserved,
    /// Built-in function name; hugs its opening parenthesis.
    Function,
    /// Table, column or alias name.
    Identifier,
}

impl WordClass {
    /// Returns true for every class except identifiers.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        !matches!(self, Self::Identifier)
    }
}

/// Token kinds for SQL text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of whitespace.
    Whitespace,
    /// `-- comment` or `# comment`, up to the end of the line.
    LineComment,
    /// `/* comment */`
    BlockComment,
    /// Bare word, possibly a multi-word keyword such as `GROUP BY`.
    Word(WordClass),
    /// Backtick-quoted identifier.
    QuotedIdent,
    /// Single- or double-quoted string literal.
    String,
    /// Numeric literal.
    Number,
    /// Bind placeholder or variable: `?`, `:name`, `@var`.
    Placeholder,
    /// Operator such as `=`, `<>` or `*`.
    Operator,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// End of input.
    Eof,
}
