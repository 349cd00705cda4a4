use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl, StringEnd},
    MK_TOKEN,
};

use super::tokens::{Token, TokenKind, KEYWORDS, SINGLE_SYMBOLS};

/// True for alphabetic characters and `_`, the characters that may start an identifier.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// True for the decimal digits `0`-`9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_word_char(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Start,
    InIdentifier,
    InInteger,
    InFloat,
    InString,
    InAssignOrEq,
    InRelational,
    InComment,
}

/// What the automaton does with the character it was just shown.
#[derive(Debug, PartialEq, Eq)]
enum Transition {
    /// Consume the character and move to the given state.
    Continue(ScanState),
    /// Drop everything scanned so far and start a fresh token.
    Skip { consume: bool },
    /// Consume the character, then emit the token.
    Emit(TokenKind),
    /// Emit the token; the character is left for the next token.
    EmitBefore(TokenKind),
    /// Report a lexical error and drop the token.
    Fail { error: ErrorImpl, consume: bool },
}

/// Hand-written DFA over a borrowed source buffer.
///
/// Tokens are produced lazily through [`Scanner::next_token`] or the
/// `Iterator` impl. Lexical errors never stop the scan, they are collected
/// as diagnostics and can be read back with [`Scanner::diagnostics`].
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    start: usize,
    start_line: usize,
    diagnostics: Vec<Error>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            pos: 0,
            line: 1,
            start: 0,
            start_line: 1,
            diagnostics: vec![],
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn next_token(&mut self) -> Option<Token> {
        while !self.at_eof() {
            self.start = self.pos;
            self.start_line = self.line;
            let mut state = ScanState::Start;

            loop {
                let Some(c) = self.peek() else {
                    return self.finish(state);
                };

                match self.step(state, c) {
                    Transition::Continue(next) => {
                        self.advance(c);
                        state = next;
                    }
                    Transition::Skip { consume } => {
                        if consume {
                            self.advance(c);
                        }
                        break;
                    }
                    Transition::Emit(kind) => {
                        self.advance(c);
                        return Some(self.emit(kind));
                    }
                    Transition::EmitBefore(kind) => return Some(self.emit(kind)),
                    Transition::Fail { error, consume } => {
                        if consume {
                            self.advance(c);
                        }
                        self.report(error);
                        break;
                    }
                }
            }
        }

        None
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self, c: char) {
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.pos]
    }

    fn emit(&self, kind: TokenKind) -> Token {
        let token = MK_TOKEN!(kind, self.lexeme().to_string(), self.start_line);
        trace!(kind = ?token.kind, lexeme = %token.lexeme, line = token.line, "token");
        token
    }

    fn report(&mut self, error: ErrorImpl) {
        let error = Error::new(error, self.start_line);
        debug!(line = error.get_line(), "lexical error: {}", error.get_kind());
        self.diagnostics.push(error);
    }

    fn step(&self, state: ScanState, c: char) -> Transition {
        match state {
            ScanState::Start => self.start_state(c),
            ScanState::InIdentifier => self.identifier(c),
            ScanState::InInteger => integer(c),
            ScanState::InFloat => float(c),
            ScanState::InString => self.string(c),
            ScanState::InAssignOrEq => assign_or_eq(c),
            ScanState::InRelational => self.relational(c),
            ScanState::InComment => comment(c),
        }
    }

    fn start_state(&self, c: char) -> Transition {
        if c.is_whitespace() {
            Transition::Skip { consume: true }
        } else if is_letter(c) {
            Transition::Continue(ScanState::InIdentifier)
        } else if is_digit(c) {
            Transition::Continue(ScanState::InInteger)
        } else if let Some(kind) = SINGLE_SYMBOLS.get(&c) {
            Transition::Emit(*kind)
        } else {
            match c {
                '"' => Transition::Continue(ScanState::InString),
                '=' => Transition::Continue(ScanState::InAssignOrEq),
                '<' | '>' | '!' => Transition::Continue(ScanState::InRelational),
                '#' => Transition::Continue(ScanState::InComment),
                _ => Transition::Fail {
                    error: ErrorImpl::InvalidCharacter { character: c },
                    consume: true,
                },
            }
        }
    }

    fn identifier(&self, c: char) -> Transition {
        if is_word_char(c) || (c == '-' && self.keyword_continues()) {
            Transition::Continue(ScanState::InIdentifier)
        } else {
            Transition::EmitBefore(self.classify_word())
        }
    }

    /// Keywords are spelled with a hyphen (`pg-if`), so a `-` only stays inside
    /// the word when the text from the token start is a whole keyword whose
    /// next character is this `-`. Anything else leaves `-` to become `Minus`.
    fn keyword_continues(&self) -> bool {
        let rest = &self.source[self.start..];
        let scanned = self.pos - self.start;

        KEYWORDS.iter().any(|keyword| {
            keyword.len() > scanned
                && keyword.as_bytes()[scanned] == b'-'
                && rest.starts_with(keyword)
                && !rest[keyword.len()..].chars().next().is_some_and(is_word_char)
        })
    }

    fn classify_word(&self) -> TokenKind {
        if KEYWORDS.contains(self.lexeme()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    fn string(&self, c: char) -> Transition {
        match c {
            '"' => Transition::Emit(TokenKind::String),
            '\n' => Transition::Fail {
                error: ErrorImpl::UnterminatedString {
                    lexeme: self.lexeme().to_string(),
                    reached: StringEnd::Line,
                },
                consume: true,
            },
            _ => Transition::Continue(ScanState::InString),
        }
    }

    fn relational(&self, c: char) -> Transition {
        match (self.lexeme(), c) {
            ("<", '=') => Transition::Emit(TokenKind::Leq),
            (">", '=') => Transition::Emit(TokenKind::Geq),
            (_, '=') => Transition::Emit(TokenKind::Neq),
            ("<", _) => Transition::EmitBefore(TokenKind::Lt),
            (">", _) => Transition::EmitBefore(TokenKind::Gt),
            _ => Transition::Fail {
                error: ErrorImpl::InvalidOperator { operator: '!' },
                consume: false,
            },
        }
    }

    /// Closes whatever state was active when the input ran out.
    fn finish(&mut self, state: ScanState) -> Option<Token> {
        match state {
            ScanState::Start | ScanState::InComment => None,
            ScanState::InIdentifier => Some(self.emit(self.classify_word())),
            ScanState::InInteger => Some(self.emit(TokenKind::Integer)),
            ScanState::InFloat => Some(self.emit(TokenKind::Float)),
            ScanState::InAssignOrEq => Some(self.emit(TokenKind::Assign)),
            ScanState::InRelational => match self.lexeme() {
                "<" => Some(self.emit(TokenKind::Lt)),
                ">" => Some(self.emit(TokenKind::Gt)),
                _ => {
                    self.report(ErrorImpl::InvalidOperator { operator: '!' });
                    None
                }
            },
            ScanState::InString => {
                self.report(ErrorImpl::UnterminatedString {
                    lexeme: self.lexeme().to_string(),
                    reached: StringEnd::Input,
                });
                None
            }
        }
    }
}

fn integer(c: char) -> Transition {
    if is_digit(c) {
        Transition::Continue(ScanState::InInteger)
    } else if c == '.' {
        Transition::Continue(ScanState::InFloat)
    } else {
        Transition::EmitBefore(TokenKind::Integer)
    }
}

// `3.` is accepted: no digit is required after the point.
fn float(c: char) -> Transition {
    if is_digit(c) {
        Transition::Continue(ScanState::InFloat)
    } else {
        Transition::EmitBefore(TokenKind::Float)
    }
}

fn assign_or_eq(c: char) -> Transition {
    if c == '=' {
        Transition::Emit(TokenKind::Eq)
    } else {
        Transition::EmitBefore(TokenKind::Assign)
    }
}

fn comment(c: char) -> Transition {
    if c == '\n' {
        Transition::Skip { consume: false }
    } else {
        Transition::Continue(ScanState::InComment)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans the whole buffer, returning every token along with the lexical
/// errors reported on the way.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.by_ref().collect();

    (tokens, scanner.take_diagnostics())
}
