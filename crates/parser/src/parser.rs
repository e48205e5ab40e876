//! Winnow-based parser for the dependency notation.
//!
//! Grammar:
//! ```text
//! schema       = line*
//! line         = comment | heading_decl | dependency
//! comment      = "//" REST_OF_LINE
//! heading_decl = "heading" attr_set
//! dependency   = attr_set ("->->" | "->") attr_set
//! attr_set     = "{" ident (COMMA ident)* "}"
//! ident        = [A-Za-z_][A-Za-z0-9_]*
//! ```

use hashbrown::HashSet;
use relnorm_core::schema::error::Error as SchemaError;
use relnorm_core::schema::{Attribute, FunctionalDependency, MultivaluedDependency, Relvar};
use winnow::combinator::{alt, separated};
use winnow::prelude::*;
use winnow::token::{literal, take_while};
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Failure to turn notation text into validated dependency objects.
///
/// The core engine is never handed partially-parsed input: every failure
/// surfaces here, before any dependency is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text cannot be decomposed into two attribute groups.
    MalformedDependencyNotation {
        message: String,
        /// 1-based line of the offending text.
        line: usize,
        /// 1-based column of the offending text.
        column: usize,
    },
    /// A schema file declares a dependency before (or without) a `heading`.
    MissingHeading,
    /// A dependency references an attribute outside the declared heading.
    Schema(SchemaError<Attribute>),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedDependencyNotation {
                message,
                line,
                column,
            } => write!(
                f,
                "malformed dependency notation at line {line}, column {column}: {message}"
            ),
            Self::MissingHeading => {
                write!(f, "schema declares a dependency before any heading")
            }
            Self::Schema(SchemaError::AttributeNotInHeading { attribute }) => {
                write!(f, "{attribute} is not contained in the relvar's heading")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<SchemaError<Attribute>> for ParseError {
    fn from(error: SchemaError<Attribute>) -> Self {
        Self::Schema(error)
    }
}

/// A parsed dependency of either kind.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    Functional(FunctionalDependency<Attribute>),
    Multivalued(MultivaluedDependency<Attribute>),
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse a single dependency of either kind, e.g. `{A, B} -> {C}` or
/// `{A} ->-> {B}`.
///
/// # Errors
///
/// Returns [`ParseError::MalformedDependencyNotation`] with line/column
/// information when the input does not conform to the grammar.
pub fn parse_dependency(input: &str) -> Result<Dependency, ParseError> {
    run_to_end(input, dependency)
}

/// Parse a functional dependency, e.g. `{A, B} -> {C}`.
///
/// # Errors
///
/// Returns [`ParseError::MalformedDependencyNotation`] when the input is not
/// a functional dependency; a multivalued arrow is rejected.
pub fn parse_functional_dependency(
    input: &str,
) -> Result<FunctionalDependency<Attribute>, ParseError> {
    match run_to_end(input, dependency)? {
        Dependency::Functional(fd) => Ok(fd),
        Dependency::Multivalued(_) => Err(ParseError::MalformedDependencyNotation {
            message: String::from("expected a functional dependency, found `->->`"),
            line: 1,
            column: 1,
        }),
    }
}

/// Parse a multivalued dependency, e.g. `{A} ->-> {B}`.
///
/// # Errors
///
/// Returns [`ParseError::MalformedDependencyNotation`] when the input is not
/// a multivalued dependency; a functional arrow is rejected.
pub fn parse_multivalued_dependency(
    input: &str,
) -> Result<MultivaluedDependency<Attribute>, ParseError> {
    match run_to_end(input, dependency)? {
        Dependency::Multivalued(mvd) => Ok(mvd),
        Dependency::Functional(_) => Err(ParseError::MalformedDependencyNotation {
            message: String::from("expected a multivalued dependency, found `->`"),
            line: 1,
            column: 1,
        }),
    }
}

/// Parse a whole schema file into a validated [`Relvar`].
///
/// The file must declare exactly one `heading {...}` before any dependency.
/// Comment lines (`// ...`) and blank lines are skipped.
///
/// # Errors
///
/// Returns [`ParseError::MissingHeading`] if a dependency precedes the
/// heading, [`ParseError::MalformedDependencyNotation`] on a grammar error,
/// and [`ParseError::Schema`] if a dependency references an attribute outside
/// the heading.
pub fn parse_schema(input: &str) -> Result<Relvar<Attribute>, ParseError> {
    let mut relvar: Option<Relvar<Attribute>> = None;

    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if let Some(rest) = line.strip_prefix("heading") {
            if relvar.is_some() {
                return Err(ParseError::MalformedDependencyNotation {
                    message: String::from("duplicate heading declaration"),
                    line: line_number,
                    column: 1,
                });
            }
            let heading = run_line(rest, attr_set, line_number)?;
            relvar = Some(Relvar::new(heading));
            continue;
        }

        let Some(target) = relvar.as_mut() else {
            return Err(ParseError::MissingHeading);
        };
        match run_line(line, dependency, line_number)? {
            Dependency::Functional(fd) => target.add_functional_dependency(fd)?,
            Dependency::Multivalued(mvd) => target.add_multivalued_dependency(mvd)?,
        }
    }

    relvar.ok_or(ParseError::MissingHeading)
}

// ---------------------------------------------------------------------------
// Driver helpers
// ---------------------------------------------------------------------------

/// Run `parser` over all of `input`, reporting leftovers as errors.
fn run_to_end<T>(input: &str, parser: fn(&mut &str) -> ModalResult<T>) -> Result<T, ParseError> {
    run_at(input, parser, 1)
}

/// Run `parser` over one schema line, attributing errors to `line_number`.
fn run_line<T>(
    input: &str,
    parser: fn(&mut &str) -> ModalResult<T>,
    line_number: usize,
) -> Result<T, ParseError> {
    run_at(input, parser, line_number)
}

fn run_at<T>(
    input: &str,
    parser: fn(&mut &str) -> ModalResult<T>,
    first_line: usize,
) -> Result<T, ParseError> {
    let original = input;
    let mut stream: &str = input;

    let malformed = |stream: &str, message: String| {
        // Compute how many bytes were consumed before the error.
        let consumed = original.len().saturating_sub(stream.len());
        let (line, column) = offset_to_line_col(original, consumed);
        ParseError::MalformedDependencyNotation {
            message,
            line: first_line + line - 1,
            column,
        }
    };

    let value = match (opt_ws, parser, opt_ws).parse_next(&mut stream) {
        Ok(((), value, ())) => value,
        Err(e) => return Err(malformed(stream, e.to_string())),
    };

    if stream.is_empty() {
        Ok(value)
    } else {
        Err(malformed(stream, String::from("unexpected trailing input")))
    }
}

/// Convert a byte offset into the original input to 1-based (line, column).
fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let safe_offset = offset.min(input.len());
    let prefix = &input[..safe_offset];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or_else(|| prefix.len() + 1, |pos| prefix.len() - pos);
    (line, column)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// Optional inline whitespace (spaces and tabs).
fn opt_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// Parse an attribute name: letters, digits, or `_`.
fn attribute(input: &mut &str) -> ModalResult<Attribute> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_')
        .map(Attribute::from)
        .parse_next(input)
}

/// `"," ` with optional surrounding whitespace.
fn list_separator(input: &mut &str) -> ModalResult<()> {
    (opt_ws, literal(","), opt_ws).void().parse_next(input)
}

/// `"{" ident ("," ident)* "}"` -- a non-empty attribute set.
fn attr_set(input: &mut &str) -> ModalResult<HashSet<Attribute>> {
    literal("{").parse_next(input)?;
    opt_ws.parse_next(input)?;
    let attributes: Vec<Attribute> = separated(1.., attribute, list_separator).parse_next(input)?;
    opt_ws.parse_next(input)?;
    literal("}").parse_next(input)?;
    Ok(attributes.into_iter().collect())
}

/// `attr_set ("->->" | "->") attr_set`.
///
/// `->->` must be attempted first because it starts with `->`.
fn dependency(input: &mut &str) -> ModalResult<Dependency> {
    let determinant = attr_set.parse_next(input)?;
    opt_ws.parse_next(input)?;
    let arrow = alt((literal("->->"), literal("->"))).parse_next(input)?;
    opt_ws.parse_next(input)?;
    let dependant = attr_set.parse_next(input)?;

    Ok(if arrow == "->->" {
        Dependency::Multivalued(MultivaluedDependency::new(determinant, dependant))
    } else {
        Dependency::Functional(FunctionalDependency::new(determinant, dependant))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
