use crate::token::{Token, TokenKind};

/// Pull-based scanner over a query string.
///
/// Tokens are produced one at a time on demand. The sequence always ends with
/// exactly one [`TokenKind::EndOfInput`] token, after which the iterator is
/// exhausted. Scanning never fails: a character outside every class ends the
/// stream early, and an unterminated quote yields whatever was consumed.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,   // cursor
    start: usize, // start of the token being scanned
    width: usize, // width of the last char read, for backup()
    done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Main,
    Whitespace,
    Word,
    Quoted(char),
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            width: 0,
            done: false,
        }
    }

    /// Next token, or `None` once `EndOfInput` has been handed out.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.done {
            return None;
        }
        let mut state = State::Main;
        loop {
            state = match state {
                State::Main => match self.next_char() {
                    None => return Some(self.finish()),
                    Some(c) if is_whitespace(c) => State::Whitespace,
                    Some(':') => return Some(self.emit(TokenKind::Delimiter)),
                    Some(q @ ('"' | '\'')) => State::Quoted(q),
                    Some(c) if is_word(c) => State::Word,
                    Some(c) => {
                        tracing::debug!(
                            target: "sift_query",
                            "scanner stopped at byte {}: unscannable character {:?}",
                            self.start,
                            c
                        );
                        self.backup();
                        return Some(self.finish());
                    }
                },
                State::Whitespace => {
                    self.accept_run(is_whitespace);
                    return Some(self.emit(TokenKind::Whitespace));
                }
                State::Word => {
                    self.accept_run(is_word);
                    return Some(self.emit(TokenKind::Identifier));
                }
                State::Quoted(quote) => {
                    self.scan_quoted(quote);
                    return Some(self.emit(TokenKind::Field));
                }
            };
        }
    }

    /// Consume up to and including the closing `quote`. A backslash makes the
    /// following char inert; no escape substitution happens.
    fn scan_quoted(&mut self, quote: char) {
        while let Some(c) = self.next_char() {
            if c == '\\' {
                if self.next_char().is_none() {
                    break;
                }
                continue;
            }
            if c == quote {
                break;
            }
        }
    }

    fn accept_run(&mut self, class: fn(char) -> bool) {
        while self.peek().is_some_and(class) {
            self.next_char();
        }
    }

    fn emit(&mut self, kind: TokenKind) -> Token<'a> {
        let token = Token::new(kind, &self.input[self.start..self.pos], self.start);
        self.start = self.pos;
        token
    }

    fn finish(&mut self) -> Token<'a> {
        self.done = true;
        Token::end_of_input(self.pos)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next();
        self.width = c.map_or(0, char::len_utf8);
        self.pos += self.width;
        c
    }

    // Only valid once per next_char().
    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    fn peek(&mut self) -> Option<char> {
        let c = self.next_char();
        self.backup();
        c
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Space or tab.
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Printable ASCII except the delimiter.
pub fn is_word(c: char) -> bool {
    ('!'..='~').contains(&c) && c != ':'
}

/// True when `lit` may name a filter: letters, digits, `_` and `-` only.
/// Identifier tokens are ASCII, so the ASCII classes are sufficient.
pub fn is_ident(lit: &str) -> bool {
    lit.chars()
        .all(|c| c == '_' || c == '-' || c.is_ascii_alphanumeric())
}

/// Scan the whole input, including the final `EndOfInput`.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Scanner::new(input).collect()
}
