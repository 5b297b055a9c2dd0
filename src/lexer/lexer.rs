use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    symtab::symtab::SymbolTable,
    Position, Span, MK_TOKEN,
};

use super::tokens::{classify, Token, TokenKind};

/// States of the scanning machine. `Start` is the resting state between
/// tokens; `Word` and `Number` accumulate into the lexeme buffer; `Star`
/// and `Equal` hold a deferred single-vs-double operator decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Word,
    Number,
    Star,
    Equal,
}

/// What a transition asks the driver to emit, if anything. `Word` and
/// `Number` flush the accumulated buffer; `Symbol` is an immediate
/// single-character token; `Fixed` is an operator already decided by
/// lookahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit {
    Word,
    Number,
    Symbol(char),
    Fixed(TokenKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: State,
    pub emit: Option<Emit>,
    pub advance: bool,
}

/// The transition function of the scanner, pure up to the lexeme buffer.
///
/// Takes the current state and the character under the cursor, pushes onto
/// the buffer when accumulating, and reports the next state, at most one
/// emission, and whether the cursor moves. `advance: false` means the
/// driver re-examines the same character from the returned state, which is
/// how terminators are handed back to `Start` without being consumed twice.
pub fn step(state: State, ch: char, buffer: &mut String) -> Step {
    match state {
        State::Start => {
            if ch.is_whitespace() {
                Step {
                    state: State::Start,
                    emit: None,
                    advance: true,
                }
            } else if ch.is_alphabetic() || ch == '_' {
                buffer.push(ch);
                Step {
                    state: State::Word,
                    emit: None,
                    advance: true,
                }
            } else if ch.is_ascii_digit() {
                buffer.push(ch);
                Step {
                    state: State::Number,
                    emit: None,
                    advance: true,
                }
            } else if ch == '*' {
                Step {
                    state: State::Star,
                    emit: None,
                    advance: true,
                }
            } else if ch == '=' {
                Step {
                    state: State::Equal,
                    emit: None,
                    advance: true,
                }
            } else {
                // No illegal-character category: anything else is a
                // single-character symbol token.
                Step {
                    state: State::Start,
                    emit: Some(Emit::Symbol(ch)),
                    advance: true,
                }
            }
        }
        State::Word => {
            if ch.is_alphanumeric() || ch == '_' {
                buffer.push(ch);
                Step {
                    state: State::Word,
                    emit: None,
                    advance: true,
                }
            } else {
                Step {
                    state: State::Start,
                    emit: Some(Emit::Word),
                    advance: false,
                }
            }
        }
        State::Number => {
            if ch.is_ascii_digit() {
                buffer.push(ch);
                Step {
                    state: State::Number,
                    emit: None,
                    advance: true,
                }
            } else {
                Step {
                    state: State::Start,
                    emit: Some(Emit::Number),
                    advance: false,
                }
            }
        }
        State::Star => {
            if ch == '*' {
                Step {
                    state: State::Start,
                    emit: Some(Emit::Fixed(TokenKind::DoubleStar)),
                    advance: true,
                }
            } else {
                Step {
                    state: State::Start,
                    emit: Some(Emit::Fixed(TokenKind::Star)),
                    advance: false,
                }
            }
        }
        State::Equal => {
            if ch == '=' {
                Step {
                    state: State::Start,
                    emit: Some(Emit::Fixed(TokenKind::Equals)),
                    advance: true,
                }
            } else {
                Step {
                    state: State::Start,
                    emit: Some(Emit::Fixed(TokenKind::Assign)),
                    advance: false,
                }
            }
        }
    }
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: Vec<char>,
    state: State,
    buffer: String,
    pos: u32,
    start: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("input"))
        };

        Lexer {
            tokens: vec![],
            source: source.chars().collect(),
            state: State::Start,
            buffer: String::new(),
            pos: 0,
            start: 0,
            file: file_name,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos as usize]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    fn span(&self, start: u32, end: u32) -> Span {
        Span {
            start: Position(start, Rc::clone(&self.file)),
            end: Position(end, Rc::clone(&self.file)),
        }
    }

    fn flush(&mut self, emit: Emit, symbols: &mut SymbolTable) -> Result<(), Error> {
        match emit {
            Emit::Word => {
                let word = std::mem::take(&mut self.buffer);
                let kind = self.classify_here(&word)?;
                let span = self.span(self.start, self.start + word.chars().count() as u32);

                if let TokenKind::Identifier = kind {
                    symbols.add(&word);
                    self.push(MK_TOKEN!(kind, word, span));
                } else {
                    self.push(MK_TOKEN!(kind, span));
                }
            }
            Emit::Number => {
                let number = std::mem::take(&mut self.buffer);
                let span = self.span(self.start, self.start + number.chars().count() as u32);
                self.push(MK_TOKEN!(TokenKind::IntConst, number, span));
            }
            Emit::Symbol(c) => {
                let kind = self.classify_here(&c.to_string())?;
                let span = self.span(self.start, self.start + 1);
                self.push(MK_TOKEN!(kind, span));
            }
            Emit::Fixed(kind) => {
                let width = match kind {
                    TokenKind::DoubleStar | TokenKind::Equals => 2,
                    _ => 1,
                };
                let span = self.span(self.start, self.start + width);
                self.push(MK_TOKEN!(kind, span));
            }
        }

        Ok(())
    }

    // Unreachable for any lexeme the machine actually produces; a failure
    // here is a scanner defect surfaced at the lexeme's position.
    fn classify_here(&self, lexeme: &str) -> Result<TokenKind, Error> {
        classify(lexeme)
            .map_err(|error| Error::new(error, Position(self.start, Rc::clone(&self.file))))
    }
}

/// Runs one complete scan over `source`, registering first-seen identifiers
/// in `symbols` and returning the finished token stream, terminated by
/// exactly one EOF token.
///
/// The only fatal condition is source text ending inside `Star` or `Equal`
/// (a dangling `*` or `=` with no completing partner); everything else,
/// including unrecognized characters, scans cleanly.
pub fn tokenize(
    source: String,
    file: Option<String>,
    symbols: &mut SymbolTable,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let ch = lex.at();

        if let State::Start = lex.state {
            if !ch.is_whitespace() {
                lex.start = lex.pos;
            }
        }

        let step = step(lex.state, ch, &mut lex.buffer);

        lex.state = step.state;
        if step.advance {
            lex.pos += 1;
        }
        if let Some(emit) = step.emit {
            lex.flush(emit, symbols)?;
        }
    }

    // Input exhausted: flush whatever the machine was still holding.
    match lex.state {
        State::Word => lex.flush(Emit::Word, symbols)?,
        State::Number => lex.flush(Emit::Number, symbols)?,
        State::Star | State::Equal => {
            let operator = if let State::Star = lex.state { '*' } else { '=' };
            return Err(Error::new(
                ErrorImpl::DanglingOperator { operator },
                Position(lex.start, Rc::clone(&lex.file)),
            ));
        }
        State::Start => {}
    }

    let end = lex.pos;
    let span = lex.span(end, end);
    lex.push(MK_TOKEN!(TokenKind::EOF, span));

    Ok(lex.tokens)
}

/// Renders a token stream one token per line, in stream order, using each
/// token's display form. Diagnostic output only, not a parseable format.
pub fn dump_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}\n", token))
        .collect::<String>()
}
