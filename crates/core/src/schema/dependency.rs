//! Functional and multivalued dependencies.
//!
//! Both kinds are an ordered pair of attribute sets, `determinant` and
//! `dependant`. They differ only in their triviality predicate: an FD is
//! trivial by itself, while an MVD's triviality is relative to the enclosing
//! relation's heading.

use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result};
use core::hash::Hash;

use hashbrown::HashSet;

/// A functional dependency `X -> Y` between two attribute sets.
///
/// Every tuple agreeing on the `determinant` (X) must agree on the
/// `dependant` (Y).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: ::serde::Serialize + Eq + Hash",
        deserialize = "A: ::serde::Deserialize<'de> + Eq + Hash"
    ))
)]
#[derive(Debug, Clone)]
pub struct FunctionalDependency<A> {
    pub determinant: HashSet<A>,
    pub dependant: HashSet<A>,
}

impl<A: Eq + Hash> PartialEq for FunctionalDependency<A> {
    fn eq(&self, other: &Self) -> bool {
        self.determinant == other.determinant && self.dependant == other.dependant
    }
}

impl<A: Eq + Hash> Eq for FunctionalDependency<A> {}

impl<A> FunctionalDependency<A> {
    #[must_use]
    pub const fn new(determinant: HashSet<A>, dependant: HashSet<A>) -> Self {
        Self {
            determinant,
            dependant,
        }
    }
}

impl<A> FunctionalDependency<A>
where
    A: Eq + Hash,
{
    /// Whether the dependency is trivial: `dependant ⊆ determinant`.
    ///
    /// Trivial dependencies add no information and are ignored by the
    /// normal-form checks.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.dependant.is_subset(&self.determinant)
    }
}

/// A multivalued dependency `X ->-> Y` between two attribute sets.
///
/// Fixing the `determinant` (X), the set of `dependant` (Y) values appearing
/// alongside it is independent of the remaining attributes.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: ::serde::Serialize + Eq + Hash",
        deserialize = "A: ::serde::Deserialize<'de> + Eq + Hash"
    ))
)]
#[derive(Debug, Clone)]
pub struct MultivaluedDependency<A> {
    pub determinant: HashSet<A>,
    pub dependant: HashSet<A>,
}

impl<A: Eq + Hash> PartialEq for MultivaluedDependency<A> {
    fn eq(&self, other: &Self) -> bool {
        self.determinant == other.determinant && self.dependant == other.dependant
    }
}

impl<A: Eq + Hash> Eq for MultivaluedDependency<A> {}

impl<A> MultivaluedDependency<A> {
    #[must_use]
    pub const fn new(determinant: HashSet<A>, dependant: HashSet<A>) -> Self {
        Self {
            determinant,
            dependant,
        }
    }
}

impl<A> MultivaluedDependency<A>
where
    A: Eq + Hash + Clone,
{
    /// Whether the dependency is trivial relative to `heading`:
    /// `dependant ⊆ determinant` or `determinant ∪ dependant == heading`.
    ///
    /// Unlike [`FunctionalDependency::is_trivial`], this needs the full
    /// heading, so the two kinds cannot share a triviality method.
    #[must_use]
    pub fn is_trivial(&self, heading: &HashSet<A>) -> bool {
        if self.dependant.is_subset(&self.determinant) {
            return true;
        }
        let union: HashSet<A> = self.determinant.union(&self.dependant).cloned().collect();
        union == *heading
    }
}

/// Write `{A, B, C}` with the attributes sorted for a stable rendering.
pub(crate) fn write_attribute_set<A>(f: &mut Formatter<'_>, attributes: &HashSet<A>) -> Result
where
    A: Display + Ord,
{
    let mut sorted: Vec<&A> = attributes.iter().collect();
    sorted.sort();
    write!(f, "{{")?;
    for (i, attribute) in sorted.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{attribute}")?;
    }
    write!(f, "}}")
}

impl<A> Display for FunctionalDependency<A>
where
    A: Display + Ord,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_attribute_set(f, &self.determinant)?;
        write!(f, " -> ")?;
        write_attribute_set(f, &self.dependant)
    }
}

impl<A> Display for MultivaluedDependency<A>
where
    A: Display + Ord,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_attribute_set(f, &self.determinant)?;
        write!(f, " ->-> ")?;
        write_attribute_set(f, &self.dependant)
    }
}
