//! Normal-form verification for relational schemas.
//!
//! `relnorm_core` decides whether a relation schema (a *relvar*) satisfies a
//! normalization level, given its functional dependencies (FDs) and
//! multivalued dependencies (MVDs). It supports two levels:
//!
//! 1. **Boyce-Codd Normal Form (BCNF)** -- every non-trivial FD's determinant
//!    is a superkey of the heading.
//! 2. **Fourth Normal Form (4NF)** -- every non-trivial MVD's determinant is
//!    a superkey of the heading.
//!
//! Both checks are built on the attribute-set closure: the fixpoint of adding
//! every FD's dependant whose determinant is already contained. Closure also
//! backs the superkey and candidate-key decision procedures exposed by
//! [`normal_form::keys`].
//!
//! Everything is a pure function over immutable value objects. There is no
//! engine state, so independent queries against the same [`Relvar`] may run
//! concurrently without synchronization.
//!
//! # Entry point
//!
//! The main entry point is [`check()`], which takes a [`Relvar`] and a
//! [`NormalForm`] level, and returns either `Ok(())` or a
//! [`Violation`](normal_form::Violation) naming an offending dependency.
//! The boolean predicates [`is_relvar_in_bcnf()`] and [`is_relvar_in_4nf()`]
//! are thin wrappers over it.
//!
//! ```rust,ignore
//! use relnorm_core::{check, NormalForm};
//!
//! match check(&relvar, NormalForm::BoyceCodd) {
//!     Ok(()) => println!("in BCNF"),
//!     Err(violation) => println!("violated by {violation:?}"),
//! }
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on core types
//!   (`Attribute`, `FunctionalDependency`, `MultivaluedDependency`, `Relvar`,
//!   `NormalForm`, `Violation`).
//!
//! This crate is `no_std` compatible (requires `alloc`). The textual
//! dependency-notation parser lives in the separate `relnorm_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod normal_form;
pub mod schema;

pub use normal_form::{
    check, closure, is_key, is_relvar_in_4nf, is_relvar_in_bcnf, is_superkey, NormalForm, Violation,
};
pub use schema::{Attribute, FunctionalDependency, MultivaluedDependency, Relvar};
