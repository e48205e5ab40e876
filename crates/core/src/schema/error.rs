/// Error attaching a dependency to a relvar.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<A> {
    /// The dependency references an attribute absent from the relvar's heading.
    AttributeNotInHeading { attribute: A },
}
