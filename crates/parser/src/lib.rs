//! Textual notation for dependencies and schemas.
//!
//! Dependencies are written in the bracketed arrow notation:
//!
//! ```text
//! {A, B} -> {C}      functional dependency
//! {A} ->-> {B}       multivalued dependency
//! ```
//!
//! A schema file declares a heading followed by dependencies:
//!
//! ```text
//! // invoices
//! heading {RFC, Nombre, CP}
//! {RFC} -> {Nombre, CP}
//! ```
//!
//! The parser only ever hands fully validated value objects to
//! `relnorm_core`; malformed text fails with
//! [`ParseError::MalformedDependencyNotation`] before any dependency is
//! constructed.

pub mod lexer;
pub mod parser;

pub use lexer::{tokenize, tokenize_with_text, Token, TokenKind};
pub use parser::{
    parse_dependency, parse_functional_dependency, parse_multivalued_dependency, parse_schema,
    Dependency, ParseError,
};
