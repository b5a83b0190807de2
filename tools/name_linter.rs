/// Name Linter: validates word lists for duplicates and stray whitespace.
///
/// Usage: name_linter <name_lists_dir> [--manifest <file.ron>]

use std::process;
use tribal_names::core::engine::{NameEngine, NameManifest};
use tribal_names::schema::category::NameCategory;
use tribal_names::schema::slot::{Gender, NameSlot};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tribal_names=warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: name_linter <name_lists_dir> [--manifest <file.ron>]");
        process::exit(0);
    }

    let lists_dir = &args[1];
    let mut manifest_path = None;

    let mut i = 2;
    while i < args.len() {
        if args[i] == "--manifest" && i + 1 < args.len() {
            i += 1;
            manifest_path = Some(args[i].clone());
        }
        i += 1;
    }

    let mut builder = NameEngine::builder().name_lists_dir(lists_dir);
    if let Some(ref path) = manifest_path {
        builder = builder.manifest(path);
    }

    let engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: Failed to load word lists: {}", e);
            process::exit(1);
        }
    };

    let mut warnings = Vec::new();
    if let Some(bank) = engine.bank_of(NameCategory::HumanStandard) {
        println!("Loaded {} words", bank.words().len());
        warnings = coverage_warnings(&engine);
    } else {
        warnings.push("No HumanStandard bank was loaded".to_string());
    }

    let errors: Vec<String> = engine
        .validation_issues()
        .iter()
        .map(|issue| issue.to_string())
        .collect();

    println!("\n=== Word List Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

/// Warn about cells the composers draw from that are empty or too small to
/// avoid repeats.
fn coverage_warnings(engine: &NameEngine) -> Vec<String> {
    let mut warnings = Vec::new();
    let Some(bank) = engine.bank_of(NameCategory::HumanStandard) else {
        return warnings;
    };

    for entry in NameManifest::tribal().entries {
        let count = bank.names_for(entry.slot, entry.gender).len();
        if count == 0 {
            warnings.push(format!(
                "List for gender={} slot={} is empty; names will contain placeholders",
                entry.gender, entry.slot
            ));
        } else if count < 10 {
            warnings.push(format!(
                "List for gender={} slot={} has only {} words (10 or more recommended)",
                entry.gender, entry.slot, count
            ));
        }
    }

    let stray = bank.names_for(NameSlot::Tribal, Gender::None).len();
    if stray > 0 {
        warnings.push(format!(
            "{} words in the gender=None slot=Tribal list are never drawn",
            stray
        ));
    }

    warnings
}
