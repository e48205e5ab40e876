//! A relvar aggregates a heading with its declared dependencies.
//!
//! Every attribute appearing in a dependency must be a member of the heading.
//! The adders enforce this, so the normal-form checks can assume a
//! well-formed relvar and stay total.

use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::hash::Hash;

use hashbrown::HashSet;

use super::dependency::{write_attribute_set, FunctionalDependency, MultivaluedDependency};
use super::error::Error;

/// A relation variable: a heading plus its functional and multivalued
/// dependencies. The unit the normal-form checks operate on.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: ::serde::Serialize + Eq + Hash",
        deserialize = "A: ::serde::Deserialize<'de> + Eq + Hash"
    ))
)]
#[derive(Debug, Clone)]
pub struct Relvar<A> {
    /// The full attribute set defining the relation's schema.
    pub heading: HashSet<A>,
    pub functional_dependencies: Vec<FunctionalDependency<A>>,
    pub multivalued_dependencies: Vec<MultivaluedDependency<A>>,
}

impl<A: Eq + Hash> PartialEq for Relvar<A> {
    fn eq(&self, other: &Self) -> bool {
        self.heading == other.heading
            && self.functional_dependencies == other.functional_dependencies
            && self.multivalued_dependencies == other.multivalued_dependencies
    }
}

impl<A: Eq + Hash> Eq for Relvar<A> {}

impl<A> Relvar<A> {
    /// A relvar with the given heading and no dependencies.
    #[must_use]
    pub const fn new(heading: HashSet<A>) -> Self {
        Self {
            heading,
            functional_dependencies: Vec::new(),
            multivalued_dependencies: Vec::new(),
        }
    }
}

impl<A> Relvar<A>
where
    A: Eq + Hash + Clone,
{
    /// Build a relvar from a heading and both dependency sets at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeNotInHeading`] if any dependency references
    /// an attribute outside `heading`.
    pub fn with_dependencies(
        heading: HashSet<A>,
        functional_dependencies: impl IntoIterator<Item = FunctionalDependency<A>>,
        multivalued_dependencies: impl IntoIterator<Item = MultivaluedDependency<A>>,
    ) -> Result<Self, Error<A>> {
        let mut relvar = Self::new(heading);
        for fd in functional_dependencies {
            relvar.add_functional_dependency(fd)?;
        }
        for mvd in multivalued_dependencies {
            relvar.add_multivalued_dependency(mvd)?;
        }
        Ok(relvar)
    }

    /// Add a functional dependency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeNotInHeading`] if the dependency references
    /// an attribute outside the heading.
    pub fn add_functional_dependency(
        &mut self,
        functional_dependency: FunctionalDependency<A>,
    ) -> Result<(), Error<A>> {
        self.validate(
            &functional_dependency.determinant,
            &functional_dependency.dependant,
        )?;
        self.functional_dependencies.push(functional_dependency);
        Ok(())
    }

    /// Add a multivalued dependency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeNotInHeading`] if the dependency references
    /// an attribute outside the heading.
    pub fn add_multivalued_dependency(
        &mut self,
        multivalued_dependency: MultivaluedDependency<A>,
    ) -> Result<(), Error<A>> {
        self.validate(
            &multivalued_dependency.determinant,
            &multivalued_dependency.dependant,
        )?;
        self.multivalued_dependencies.push(multivalued_dependency);
        Ok(())
    }

    fn validate(&self, determinant: &HashSet<A>, dependant: &HashSet<A>) -> Result<(), Error<A>> {
        for attribute in determinant.iter().chain(dependant.iter()) {
            if !self.heading.contains(attribute) {
                return Err(Error::AttributeNotInHeading {
                    attribute: attribute.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<A> Display for Relvar<A>
where
    A: Display + Ord,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_attribute_set(f, &self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(attributes: &[&'static str]) -> HashSet<&'static str> {
        attributes.iter().copied().collect()
    }

    #[test]
    fn test_add_valid_dependency() {
        let mut relvar = Relvar::new(set(&["a", "b"]));
        let result =
            relvar.add_functional_dependency(FunctionalDependency::new(set(&["a"]), set(&["b"])));
        assert!(result.is_ok());
        assert_eq!(relvar.functional_dependencies.len(), 1);
    }

    #[test]
    fn test_reject_dependency_outside_heading() {
        let mut relvar = Relvar::new(set(&["a", "b"]));
        let result =
            relvar.add_functional_dependency(FunctionalDependency::new(set(&["a"]), set(&["z"])));
        assert_eq!(result, Err(Error::AttributeNotInHeading { attribute: "z" }));
        assert!(relvar.functional_dependencies.is_empty());
    }

    #[test]
    fn test_reject_mvd_determinant_outside_heading() {
        let mut relvar = Relvar::new(set(&["a", "b"]));
        let result =
            relvar.add_multivalued_dependency(MultivaluedDependency::new(set(&["z"]), set(&["b"])));
        assert_eq!(result, Err(Error::AttributeNotInHeading { attribute: "z" }));
    }

    #[test]
    fn test_with_dependencies() {
        let relvar = Relvar::with_dependencies(
            set(&["a", "b", "c"]),
            [
                FunctionalDependency::new(set(&["a"]), set(&["b"])),
                FunctionalDependency::new(set(&["b"]), set(&["c"])),
            ],
            [MultivaluedDependency::new(set(&["a"]), set(&["b"]))],
        )
        .expect("all attributes are in the heading");
        assert_eq!(relvar.functional_dependencies.len(), 2);
        assert_eq!(relvar.multivalued_dependencies.len(), 1);
    }

    #[test]
    fn test_display_is_sorted_heading() {
        let relvar = Relvar::new(set(&["b", "a", "c"]));
        assert_eq!(format!("{relvar}"), "{a, b, c}");
    }
}
