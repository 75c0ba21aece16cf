use crate::command::{command_kind, CommandKind};
use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    /// Explicit spacing such as `\,` or `\quad` (the word forms are [`TokenKind::Command`]s).
    #[regex(r"\\[,;:! ]")]
    #[token("\\\\")]
    #[token("~")]
    Spacing,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("_")]
    Subscript,

    #[token("=")]
    Eq,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token("!")]
    Factorial,

    #[regex(r"'+")]
    Prime,

    #[token(",")]
    Comma,

    #[token("|")]
    Pipe,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token("{")]
    #[token("\\{")]
    OpenBrace,

    #[token("}")]
    #[token("\\}")]
    CloseBrace,

    #[regex(r"\\[a-zA-Z]+")]
    Command,

    /// A single letter. `xy` is the product of two symbols in LaTeX, not one name.
    #[regex(r"[a-zA-Z]")]
    Letter,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]*")]
    Float,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Spacing)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token carries no mathematical meaning, either because it is whitespace
    /// or because it is a layout command like `\quad`.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
            || (self.kind == TokenKind::Command
                && command_kind(self.lexeme) == Some(CommandKind::Ignored))
    }

    /// Returns the [`CommandKind`] of this token, if it is a known command.
    pub fn command(&self) -> Option<CommandKind> {
        if self.kind == TokenKind::Command {
            command_kind(self.lexeme)
        } else {
            None
        }
    }
}
