//! Attribute-set closure under a set of functional dependencies.

use core::hash::Hash;

use hashbrown::HashSet;

use crate::schema::FunctionalDependency;

/// Compute the closure of `attributes` under `functional_dependencies`.
///
/// The closure is the smallest superset of `attributes` closed under every
/// supplied FD: whenever a determinant is contained in the result, so is its
/// dependant.
///
/// Runs fixpoint passes over the FD set until a full pass adds nothing.
/// Termination is guaranteed because the attribute universe is finite and the
/// result only grows; the order in which FDs are applied within a pass does
/// not affect the fixpoint.
#[must_use]
pub fn closure<A>(
    attributes: &HashSet<A>,
    functional_dependencies: &[FunctionalDependency<A>],
) -> HashSet<A>
where
    A: Eq + Hash + Clone,
{
    let mut result = attributes.clone();

    let mut changed = true;
    while changed {
        changed = false;
        for fd in functional_dependencies {
            if fd.determinant.is_subset(&result) && !fd.dependant.is_subset(&result) {
                result.extend(fd.dependant.iter().cloned());
                changed = true;
            }
        }
    }

    result
}
