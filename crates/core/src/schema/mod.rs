//! The relational data model: attributes, dependencies, and relvars.
//!
//! All types here are immutable value objects with structural equality. The
//! dependency and relvar types are generic over the attribute type `A` so
//! that tests can use `&'static str` attributes directly; the canonical
//! concrete type produced by the parser is [`Attribute`].

pub mod attribute;
pub mod dependency;
pub mod error;
pub mod relvar;

pub use attribute::Attribute;
pub use dependency::{FunctionalDependency, MultivaluedDependency};
pub use error::Error;
pub use relvar::Relvar;
