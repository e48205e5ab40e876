//! Logos-based lexer for the dependency notation.
//!
//! Attribute sets are brace-enclosed comma lists, `->` introduces a
//! functional dependency, `->->` a multivalued one, and `heading` opens a
//! schema declaration.
//!
//! # Example input
//!
//! ```text
//! // invoices
//! heading {RFC, Nombre, CP}
//! {RFC} -> {Nombre, CP}
//! ```

use core::ops::Range;

/// All token kinds produced by the notation lexer.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(::logos::Logos, Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A line comment starting with `//` and running to end of line.
    #[regex(r"//[^\n]*", allow_greedy = true)]
    Comment,

    /// Opening brace `{`.
    #[token("{")]
    BraceOpen,

    /// Closing brace `}`.
    #[token("}")]
    BraceClose,

    /// Attribute separator `,`.
    #[token(",")]
    Comma,

    /// Multivalued dependency arrow `->->`.
    #[token("->->")]
    DoubleArrow,

    /// Functional dependency arrow `->`.
    #[token("->")]
    Arrow,

    /// An identifier: starts with a letter or underscore, followed by
    /// letters, digits, or underscores. The keyword `heading` is an
    /// ordinary identifier at this level.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// A newline (`\n` or `\r\n`).
    #[regex(r"\r?\n")]
    Newline,

    /// Spaces or tabs. Emitted so the tokenizer can be used for syntax
    /// highlighting where whitespace positioning matters.
    #[regex(r"[ \t]+")]
    Whitespace,
}

/// A single token with its kind and the byte-offset span in the source.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range `start..end` into the original input string.
    pub span: Range<usize>,
}

impl Token {
    /// Construct a new [`Token`].
    #[must_use]
    pub const fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Return the source text for this token given the original input.
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Tokenize `input` and return all valid tokens.
///
/// Tokens that the lexer cannot recognise are silently skipped.
/// Use [`tokenize_with_text`] if you also need the source slice for each token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|kind| Token { kind, span }))
        .collect()
}

/// Tokenize `input` and return tokens paired with their source text slices.
///
/// Tokens that the lexer cannot recognise are silently skipped.
#[must_use]
pub fn tokenize_with_text(input: &str) -> Vec<(Token, &str)> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| {
            result.ok().map(|kind| {
                let text = &input[span.clone()];
                (Token { kind, span }, text)
            })
        })
        .collect()
}
