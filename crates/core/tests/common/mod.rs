/// DSL macros for building test schemas over `&'static str` attributes.
///
/// # Syntax
///
/// ```ignore
/// let heading = attrs! { a, b, c };
/// let fd = fd!({ a, b } => { c });
/// let mvd = mvd!({ a } =>> { b });
/// let relvar = relvar! {
///     heading: { a, b, c },
///     fds: [ { a } => { b }, { b } => { c } ],
///     mvds: [ { a } =>> { b } ],
/// };
/// ```
///
/// Build an attribute set.
#[macro_export]
macro_rules! attrs {
    { $($a:ident),* $(,)? } => {
        [$(stringify!($a)),*]
            .into_iter()
            .collect::<hashbrown::HashSet<&'static str>>()
    };
}

/// Build a functional dependency.
#[macro_export]
macro_rules! fd {
    ({ $($x:ident),* $(,)? } => { $($y:ident),* $(,)? }) => {
        relnorm_core::schema::FunctionalDependency::<&'static str>::new(
            $crate::attrs! { $($x),* },
            $crate::attrs! { $($y),* },
        )
    };
}

/// Build a multivalued dependency.
#[macro_export]
macro_rules! mvd {
    ({ $($x:ident),* $(,)? } =>> { $($y:ident),* $(,)? }) => {
        relnorm_core::schema::MultivaluedDependency::<&'static str>::new(
            $crate::attrs! { $($x),* },
            $crate::attrs! { $($y),* },
        )
    };
}

/// Build a full relvar. The `fds` and `mvds` blocks are optional but must
/// appear in that order. Panics on a dependency outside the heading, which
/// in tests means the fixture itself is wrong.
#[macro_export]
macro_rules! relvar {
    { heading: { $($h:ident),* $(,)? } $(,)? } => {
        $crate::relvar!(@build { $($h),* }, [], [])
    };
    { heading: { $($h:ident),* $(,)? }, fds: [ $($fds:tt)* ] $(,)? } => {
        $crate::relvar!(@build { $($h),* }, [ $($fds)* ], [])
    };
    { heading: { $($h:ident),* $(,)? }, mvds: [ $($mvds:tt)* ] $(,)? } => {
        $crate::relvar!(@build { $($h),* }, [], [ $($mvds)* ])
    };
    { heading: { $($h:ident),* $(,)? }, fds: [ $($fds:tt)* ], mvds: [ $($mvds:tt)* ] $(,)? } => {
        $crate::relvar!(@build { $($h),* }, [ $($fds)* ], [ $($mvds)* ])
    };
    (
        @build { $($h:ident),* },
        [ $($fdet:tt => $fdep:tt),* $(,)? ],
        [ $($mdet:tt =>> $mdep:tt),* $(,)? ]
    ) => {
        relnorm_core::schema::Relvar::with_dependencies(
            $crate::attrs! { $($h),* },
            [ $($crate::fd!($fdet => $fdep)),* ],
            [ $($crate::mvd!($mdet =>> $mdep)),* ],
        )
        .expect("test fixture dependencies must stay within the heading")
    };
}
