use std::path::Path;
use std::{fs, process};

use clap::Parser;
use hashbrown::HashSet;
use relnorm_cli::{App, Command};
use relnorm_core::schema::{Attribute, Relvar};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Check(args) => check(args),
        Command::Closure(args) => closure(args),
        Command::Key(args) => key(args),
    }
}

fn load_schema(path: &Path) -> Relvar<Attribute> {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        process::exit(1);
    });

    relnorm_parser::parse_schema(&text).unwrap_or_else(|e| {
        eprintln!("{}: {e}", path.display());
        process::exit(1);
    })
}

/// Split a comma-separated attribute list, requiring every name to be a
/// member of the schema's heading.
fn parse_attrs(raw: &str, relvar: &Relvar<Attribute>) -> HashSet<Attribute> {
    let attributes: HashSet<Attribute> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Attribute::from)
        .collect();

    for attribute in &attributes {
        if !relvar.heading.contains(attribute) {
            eprintln!("{attribute} is not contained in the schema's heading");
            process::exit(1);
        }
    }

    attributes
}

fn format_attribute_set(attributes: &HashSet<Attribute>) -> String {
    let mut sorted: Vec<&Attribute> = attributes.iter().collect();
    sorted.sort();
    let names: Vec<&str> = sorted.iter().map(|a| a.name()).collect();
    format!("{{{}}}", names.join(", "))
}

fn check(args: &relnorm_cli::CheckArgs) {
    let form = relnorm_core::NormalForm::from(args.form.clone());
    let mut any_failed = false;

    for path in &args.paths {
        let filename = path.file_name().unwrap_or_default().to_string_lossy();
        let relvar = load_schema(path);

        match relnorm_core::check(&relvar, form) {
            Ok(()) => {
                if args.json {
                    let result = serde_json::json!({
                        "file": filename,
                        "ok": true,
                    });
                    println!("{}", serde_json::to_string(&result).unwrap());
                } else {
                    println!("{filename}: PASS");
                }
            }
            Err(violation) => {
                any_failed = true;
                if args.json {
                    let result = serde_json::json!({
                        "file": filename,
                        "ok": false,
                        "violation": violation,
                    });
                    println!("{}", serde_json::to_string(&result).unwrap());
                } else if args.verbose {
                    println!("{filename}: FAIL");
                    match &violation {
                        relnorm_core::Violation::FunctionalDependency(fd) => {
                            println!("  violated by {fd}");
                        }
                        relnorm_core::Violation::MultivaluedDependency(mvd) => {
                            println!("  violated by {mvd}");
                        }
                    }
                } else {
                    println!("{filename}: FAIL");
                }
            }
        }
    }

    if any_failed {
        process::exit(1);
    }
}

fn closure(args: &relnorm_cli::ClosureArgs) {
    let relvar = load_schema(&args.schema);
    let attributes = parse_attrs(&args.attrs, &relvar);

    let result = relnorm_core::closure(&attributes, &relvar.functional_dependencies);
    println!("{}", format_attribute_set(&result));
}

fn key(args: &relnorm_cli::KeyArgs) {
    let relvar = load_schema(&args.schema);
    let attributes = parse_attrs(&args.attrs, &relvar);

    let superkey = relnorm_core::is_superkey(
        &attributes,
        &relvar.heading,
        &relvar.functional_dependencies,
    );
    let candidate_key =
        relnorm_core::is_key(&attributes, &relvar.heading, &relvar.functional_dependencies);

    println!(
        "{}: superkey: {}, candidate key: {}",
        format_attribute_set(&attributes),
        if superkey { "yes" } else { "no" },
        if candidate_key { "yes" } else { "no" },
    );
}
