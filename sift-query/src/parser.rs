use std::collections::VecDeque;

use crate::config::Options;
use crate::cutset;
use crate::query::{Query, QueryBuilder};
use crate::scanner::{self, Scanner};
use crate::token::{Token, TokenKind};

/// Parse `input` with the default cutset and no allow-list.
pub fn parse(input: &str) -> Query {
    Parser::new(input, Options::new()).parse()
}

/// Parse `input` with caller-supplied options.
pub fn parse_with(input: &str, options: &Options) -> Query {
    Parser::new(input, options.clone()).parse()
}

/// Single-pass parser over the scanner's tokens with unbounded pushback.
///
/// Anything that does not form a `name:value` filter ends up in the raw text,
/// so parsing cannot fail.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    options: Options,
    end: usize,
    // Pushed-back tokens, replayed front to back before scanning resumes.
    buf: VecDeque<Token<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: Options) -> Self {
        Self {
            scanner: Scanner::new(input),
            options,
            end: input.len(),
            buf: VecDeque::new(),
        }
    }

    pub fn parse(mut self) -> Query {
        let mut qb = QueryBuilder::new();

        loop {
            let tok = self.scan();
            match tok.kind {
                TokenKind::EndOfInput => return qb.build(self.options.cut()),
                TokenKind::Identifier => self.scan_field(tok, &mut qb),
                _ => {
                    qb.push_raw(tok.lit);
                }
            }
        }
    }

    fn scan(&mut self) -> Token<'a> {
        if let Some(tok) = self.buf.pop_front() {
            return tok;
        }
        self.scanner
            .next_token()
            .unwrap_or_else(|| Token::end_of_input(self.end))
    }

    fn unscan(&mut self, tok: Token<'a>) {
        self.buf.push_back(tok);
    }

    /// Consume the next token if it is of `kind`, otherwise push it back.
    fn accept(&mut self, kind: TokenKind) -> bool {
        let tok = self.scan();
        if tok.is(kind) {
            return true;
        }
        self.unscan(tok);
        false
    }

    fn scan_field(&mut self, name: Token<'a>, qb: &mut QueryBuilder) {
        if !scanner::is_ident(name.lit) {
            qb.push_raw(name.lit);
            return;
        }

        if !self.options.is_allowed(name.lit) {
            tracing::debug!(
                target: "sift_query",
                "filter name {} at byte {} is not allowed",
                name.describe(),
                name.pos
            );
            qb.push_raw(name.lit);
            return;
        }

        let delim = self.scan();
        if !delim.is(TokenKind::Delimiter) {
            qb.push_raw(name.lit);
            self.unscan(delim);
            return;
        }

        let mut parts: Vec<Token<'a>> = Vec::new();
        loop {
            let tok = self.scan();
            if tok.is(TokenKind::Field) || tok.is(TokenKind::Identifier) {
                parts.push(tok);
                continue;
            }
            if parts.is_empty() {
                // `name:` with nothing usable after it is plain text.
                qb.push_raw(name.lit);
                self.unscan(delim);
                self.unscan(tok);
                return;
            }
            self.unscan(tok);
            break;
        }

        self.accept(TokenKind::Whitespace);

        let value: String = parts.iter().map(|t| t.lit).collect();
        let value = match self.options.cut() {
            Some(cut) => cutset::apply(&value, cut),
            None => value,
        };
        tracing::trace!(
            target: "sift_query",
            "filter {}={:?} from {} token(s)",
            name.lit,
            value,
            parts.len()
        );
        qb.add(name.lit, &value);
    }
}
