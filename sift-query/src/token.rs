/// Classification of a scanned slice of the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    /// `:`
    Delimiter,
    /// Quoted span; the literal keeps its quote characters.
    Field,
    /// Maximal run of word characters.
    Identifier,
    /// Maximal run of spaces and tabs.
    Whitespace,
}

/// A token borrowed from the input it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lit: &'a str,
    /// Byte offset of the first character in the input.
    pub pos: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lit: &'a str, pos: usize) -> Self {
        Self { kind, lit, pos }
    }

    pub fn end_of_input(pos: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            lit: "",
            pos,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Short rendering for log lines: `EOF`, or the quoted literal cut to 10 chars.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EndOfInput {
            return "EOF".to_string();
        }
        if self.lit.chars().count() > 10 {
            let head: String = self.lit.chars().take(10).collect();
            return format!("{head:?}...");
        }
        format!("{:?}", self.lit)
    }
}
