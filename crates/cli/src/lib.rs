//! relnorm CLI -- check relational schemas against normal forms.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "relnorm",
    about = "Normal-form verification for relational schemas"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check schema files against a normal form
    Check(CheckArgs),
    /// Compute the closure of an attribute set under a schema's FDs
    Closure(ClosureArgs),
    /// Test whether an attribute set is a superkey and a candidate key
    Key(KeyArgs),
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Schema files to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Normal form to check
    #[arg(long)]
    pub form: NormalFormLevel,
    /// Print the violating dependency on FAIL
    #[arg(long)]
    pub verbose: bool,
    /// Output results as JSON (one object per file)
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum NormalFormLevel {
    /// Boyce-Codd Normal Form
    Bcnf,
    /// Fourth Normal Form
    #[value(name = "4nf")]
    FourNf,
}

#[derive(Debug, Parser)]
pub struct ClosureArgs {
    /// Schema file providing the functional dependencies
    pub schema: PathBuf,
    /// Comma-separated attribute names to start from
    #[arg(long)]
    pub attrs: String,
}

#[derive(Debug, Parser)]
pub struct KeyArgs {
    /// Schema file providing the heading and functional dependencies
    pub schema: PathBuf,
    /// Comma-separated attribute names to test
    #[arg(long)]
    pub attrs: String,
}

impl From<NormalFormLevel> for relnorm_core::NormalForm {
    fn from(level: NormalFormLevel) -> Self {
        match level {
            NormalFormLevel::Bcnf => Self::BoyceCodd,
            NormalFormLevel::FourNf => Self::Fourth,
        }
    }
}
