use core::hash::Hash;

use crate::schema::Relvar;

pub mod closure;
pub mod keys;
pub mod violation;

// Re-export the decision procedures at the module level for convenience.
pub use closure::closure;
pub use keys::{is_key, is_superkey};
pub use violation::Violation;

/// Normal forms supported by relnorm.
///
/// 4NF strictly implies BCNF for relvars whose MVD set embeds the FD set;
/// the two checks here are independent predicates over the relvar's declared
/// dependencies.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NormalForm {
    /// Boyce-Codd Normal Form: every non-trivial FD's determinant is a superkey.
    BoyceCodd,
    /// Fourth Normal Form: every non-trivial MVD's determinant is a superkey.
    Fourth,
}

/// Check whether `relvar` satisfies the given [`NormalForm`].
///
/// Superkey status is always decided via the relvar's full FD set, including
/// when the violating candidate is an MVD: 4NF's determinant-is-superkey test
/// runs on the same FD-closure machinery as BCNF's.
///
/// A relvar with no non-trivial dependency of the checked kind is vacuously
/// in that normal form.
///
/// # Errors
///
/// Returns the first [`Violation`] found: a non-trivial dependency whose
/// determinant is not a superkey of the heading.
pub fn check<A>(relvar: &Relvar<A>, form: NormalForm) -> Result<(), Violation<A>>
where
    A: Eq + Hash + Clone,
{
    tracing::debug!(
        heading = relvar.heading.len(),
        functional_dependencies = relvar.functional_dependencies.len(),
        multivalued_dependencies = relvar.multivalued_dependencies.len(),
        ?form,
        "checking normal form"
    );

    match form {
        NormalForm::BoyceCodd => {
            for fd in &relvar.functional_dependencies {
                if !fd.is_trivial()
                    && !is_superkey(
                        &fd.determinant,
                        &relvar.heading,
                        &relvar.functional_dependencies,
                    )
                {
                    return Err(fd.clone().into());
                }
            }
        }
        NormalForm::Fourth => {
            for mvd in &relvar.multivalued_dependencies {
                if !mvd.is_trivial(&relvar.heading)
                    && !is_superkey(
                        &mvd.determinant,
                        &relvar.heading,
                        &relvar.functional_dependencies,
                    )
                {
                    return Err(mvd.clone().into());
                }
            }
        }
    }

    Ok(())
}

/// Whether `relvar` is in Boyce-Codd Normal Form.
#[must_use]
pub fn is_relvar_in_bcnf<A>(relvar: &Relvar<A>) -> bool
where
    A: Eq + Hash + Clone,
{
    check(relvar, NormalForm::BoyceCodd).is_ok()
}

/// Whether `relvar` is in Fourth Normal Form.
#[must_use]
pub fn is_relvar_in_4nf<A>(relvar: &Relvar<A>) -> bool
where
    A: Eq + Hash + Clone,
{
    check(relvar, NormalForm::Fourth).is_ok()
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;
    use crate::schema::{FunctionalDependency, MultivaluedDependency};

    fn set(attributes: &[&'static str]) -> HashSet<&'static str> {
        attributes.iter().copied().collect()
    }

    fn chain_relvar() -> Relvar<&'static str> {
        // heading {a, b, c}, FDs a -> b, b -> c, MVD a ->-> b
        Relvar::with_dependencies(
            set(&["a", "b", "c"]),
            [
                FunctionalDependency::new(set(&["a"]), set(&["b"])),
                FunctionalDependency::new(set(&["b"]), set(&["c"])),
            ],
            [MultivaluedDependency::new(set(&["a"]), set(&["b"]))],
        )
        .expect("well-formed relvar")
    }

    #[test]
    fn test_bcnf_violation_names_dependency() {
        // b -> c is non-trivial and b is not a superkey.
        let result = check(&chain_relvar(), NormalForm::BoyceCodd);
        assert_eq!(
            result,
            Err(Violation::FunctionalDependency(FunctionalDependency::new(
                set(&["b"]),
                set(&["c"]),
            ))),
        );
        assert!(!is_relvar_in_bcnf(&chain_relvar()));
    }

    #[test]
    fn test_4nf_holds_when_mvd_determinant_is_superkey() {
        // a ->-> b is non-trivial, but a's closure is the whole heading.
        let relvar = chain_relvar();
        assert!(is_relvar_in_4nf(&relvar));
        assert!(check(&relvar, NormalForm::Fourth).is_ok());
    }

    #[test]
    fn test_4nf_violation_without_supporting_fds() {
        let relvar = Relvar::with_dependencies(
            set(&["a", "b", "c"]),
            [],
            [MultivaluedDependency::new(set(&["a"]), set(&["b"]))],
        )
        .expect("well-formed relvar");
        assert_eq!(
            check(&relvar, NormalForm::Fourth),
            Err(Violation::MultivaluedDependency(
                MultivaluedDependency::new(set(&["a"]), set(&["b"])),
            )),
        );
        assert!(!is_relvar_in_4nf(&relvar));
    }

    #[test]
    fn test_no_dependencies_is_vacuously_normal() {
        let relvar: Relvar<&'static str> = Relvar::new(set(&["a", "b"]));
        assert!(is_relvar_in_bcnf(&relvar));
        assert!(is_relvar_in_4nf(&relvar));
    }

    #[test]
    fn test_trivial_dependencies_are_ignored() {
        let relvar = Relvar::with_dependencies(
            set(&["a", "b", "c"]),
            [FunctionalDependency::new(set(&["a", "b"]), set(&["a"]))],
            [MultivaluedDependency::new(set(&["a"]), set(&["b", "c"]))],
        )
        .expect("well-formed relvar");
        assert!(is_relvar_in_bcnf(&relvar));
        assert!(is_relvar_in_4nf(&relvar));
    }

    #[test]
    fn test_key_determinants_keep_bcnf() {
        let relvar = Relvar::with_dependencies(
            set(&["a", "b", "c"]),
            [FunctionalDependency::new(set(&["a"]), set(&["b", "c"]))],
            [],
        )
        .expect("well-formed relvar");
        assert!(is_relvar_in_bcnf(&relvar));
    }
}
