use core::hash::Hash;

use derive_more::From;

use crate::schema::{FunctionalDependency, MultivaluedDependency};

/// A dependency that violates the checked normal form: it is non-trivial and
/// its determinant is not a superkey of the relvar's heading.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: ::serde::Serialize + Eq + Hash",
        deserialize = "A: ::serde::Deserialize<'de> + Eq + Hash"
    ))
)]
#[derive(Debug, Clone, From)]
pub enum Violation<A> {
    /// A functional dependency violating BCNF.
    FunctionalDependency(FunctionalDependency<A>),
    /// A multivalued dependency violating 4NF.
    MultivaluedDependency(MultivaluedDependency<A>),
}

impl<A: Eq + Hash> PartialEq for Violation<A> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::FunctionalDependency(left), Self::FunctionalDependency(right)) => left == right,
            (Self::MultivaluedDependency(left), Self::MultivaluedDependency(right)) => {
                left == right
            }
            _ => false,
        }
    }
}

impl<A: Eq + Hash> Eq for Violation<A> {}
