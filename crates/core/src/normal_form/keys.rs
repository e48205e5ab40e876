//! Superkey and candidate-key decision procedures.

use core::hash::Hash;

use hashbrown::HashSet;

use super::closure::closure;
use crate::schema::FunctionalDependency;

/// Whether `attributes` is a superkey of `heading`: its closure under
/// `functional_dependencies` equals the full heading.
///
/// The comparison is equality against `heading`, not mere superset of the
/// input, so it captures "determines everything".
#[must_use]
pub fn is_superkey<A>(
    attributes: &HashSet<A>,
    heading: &HashSet<A>,
    functional_dependencies: &[FunctionalDependency<A>],
) -> bool
where
    A: Eq + Hash + Clone,
{
    closure(attributes, functional_dependencies) == *heading
}

/// Whether `attributes` is a candidate key of `heading`: a superkey that is
/// minimal under single-attribute removal.
///
/// Costs `O(|attributes|)` closure computations in the worst case. A
/// singleton set is still probed against the empty set.
#[must_use]
pub fn is_key<A>(
    attributes: &HashSet<A>,
    heading: &HashSet<A>,
    functional_dependencies: &[FunctionalDependency<A>],
) -> bool
where
    A: Eq + Hash + Clone,
{
    if !is_superkey(attributes, heading, functional_dependencies) {
        return false;
    }

    attributes.iter().all(|attribute| {
        let mut reduced = attributes.clone();
        reduced.remove(attribute);
        !is_superkey(&reduced, heading, functional_dependencies)
    })
}
