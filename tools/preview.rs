/// Preview: interactive generation shell for trying out word lists.
///
/// Usage: preview --lists <dir> [--manifest <file.ron>] [--seed <n>]
///
/// Commands:
///   faction                  generate a faction name
///   settlement               generate a settlement name
///   person <gender>          generate a person's full name
///   animal <gender>          generate a tribal animal name
///   bulk <kind> <n>          generate n names with repetition stats
///   seed <n>                 set RNG seed
///   forget                   clear the issued-name record
///   help                     list commands
///   quit                     exit

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io::{self, BufRead, Write};
use tribal_names::core::engine::{FactionInfo, NameEngine, NameSubject};
use tribal_names::core::oracle::IssuedNames;
use tribal_names::schema::category::NameStyle;
use tribal_names::schema::name::GeneratedName;
use tribal_names::schema::slot::Gender;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tribal_names=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut lists_dir = None;
    let mut manifest_path = None;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lists" if i + 1 < args.len() => {
                i += 1;
                lists_dir = Some(args[i].clone());
            }
            "--manifest" if i + 1 < args.len() => {
                i += 1;
                manifest_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(lists_dir) = lists_dir else {
        eprintln!("Error: --lists is required");
        print_usage();
        std::process::exit(1);
    };

    let mut builder = NameEngine::builder().name_lists_dir(&lists_dir);
    if let Some(ref path) = manifest_path {
        builder = builder.manifest(path);
    }
    let engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR loading word lists: {}", e);
            std::process::exit(1);
        }
    };

    if !engine.validation_issues().is_empty() {
        println!(
            "{} word list issues found (run name_linter for details)",
            engine.validation_issues().len()
        );
    }
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut issued = IssuedNames::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "faction" | "settlement" | "person" | "animal" => {
                let gender = match parse_gender_arg(&cmd, parts.get(1).copied()) {
                    Some(g) => g,
                    None => continue,
                };
                match generate(&engine, &cmd, gender, &mut rng, &issued) {
                    Some(name) => {
                        println!("{}", name);
                        issued.record(&name);
                    }
                    None => println!("(declined: host would use its own namer)"),
                }
            }
            "seed" => {
                if parts.len() < 2 {
                    println!("Usage: seed <n>");
                    continue;
                }
                match parts[1].parse::<u64>() {
                    Ok(s) => {
                        rng = StdRng::seed_from_u64(s);
                        println!("Seed set to {}", s);
                    }
                    Err(_) => {
                        println!("Invalid seed: {}", parts[1]);
                    }
                }
            }
            "forget" => {
                println!("Forgot {} issued names.", issued.len());
                issued.clear();
            }
            "bulk" => {
                if parts.len() < 3 {
                    println!("Usage: bulk <faction|settlement|person|animal> <n> [gender]");
                    continue;
                }
                let kind = parts[1].to_lowercase();
                if !["faction", "settlement", "person", "animal"].contains(&kind.as_str()) {
                    println!("Unknown kind: {}", parts[1]);
                    continue;
                }
                let count: usize = match parts[2].parse() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        println!("Invalid count: {}", parts[2]);
                        continue;
                    }
                };
                let gender = match parse_gender_arg(&kind, parts.get(3).copied()) {
                    Some(g) => g,
                    None => continue,
                };

                // Fresh record so earlier names don't skew the stats
                let mut bulk_issued = IssuedNames::new();
                let mut names = Vec::with_capacity(count);
                for _ in 0..count {
                    if let Some(name) = generate(&engine, &kind, gender, &mut rng, &bulk_issued) {
                        bulk_issued.record(&name);
                        names.push(name.to_string());
                    }
                }
                print_bulk_stats(&names);
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
            }
        }
    }
}

/// Gender for commands that need one; factions and settlements ignore it.
fn parse_gender_arg(kind: &str, arg: Option<&str>) -> Option<Gender> {
    if kind == "faction" || kind == "settlement" {
        return Some(Gender::None);
    }
    match arg.map(Gender::parse) {
        Some(Some(g)) => Some(g),
        Some(None) => {
            println!("Unknown gender: {} (male, female, none)", arg.unwrap_or_default());
            None
        }
        None => Some(Gender::Male),
    }
}

fn generate(
    engine: &NameEngine,
    kind: &str,
    gender: Gender,
    rng: &mut StdRng,
    issued: &IssuedNames,
) -> Option<GeneratedName> {
    match kind {
        "faction" => engine
            .generate_text_name("NamerFactionTribal", rng, issued, None)
            .map(GeneratedName::Single),
        "settlement" => {
            let mut accept = |candidate: &str| !issued.contains(candidate);
            engine
                .generate_text_name("NamerSettlementTribal", rng, issued, Some(&mut accept))
                .map(GeneratedName::Single)
        }
        "person" => {
            let subject = NameSubject {
                gender,
                race_namer: None,
                faction: Some(tribe()),
            };
            engine.generate_subject_name(&subject, NameStyle::Full, rng, issued)
        }
        "animal" => {
            let subject = NameSubject {
                gender,
                race_namer: Some("NamerAnimalGeneric".to_string()),
                faction: Some(tribe()),
            };
            engine.generate_subject_name(&subject, NameStyle::Full, rng, issued)
        }
        _ => None,
    }
}

fn tribe() -> FactionInfo {
    FactionInfo {
        def_name: "TribeCivil".to_string(),
        person_namer: Some("NamerPersonTribal".to_string()),
    }
}

fn print_bulk_stats(names: &[String]) {
    println!("\n=== Bulk Generation: {} names ===\n", names.len());

    let unique: FxHashSet<&String> = names.iter().collect();
    println!("Unique names: {} / {}", unique.len(), names.len());

    let avg_len: f64 = if names.is_empty() {
        0.0
    } else {
        names.iter().map(|n| n.len() as f64).sum::<f64>() / names.len() as f64
    };
    println!("Average length: {:.1} chars", avg_len);

    let mut word_counts: FxHashMap<String, u32> = FxHashMap::default();
    for name in names {
        for word in name.split_whitespace() {
            let clean = word.trim_matches(|c: char| !c.is_alphanumeric());
            if !clean.is_empty() && clean != "The" && clean != "of" && clean != "the" {
                *word_counts.entry(clean.to_string()).or_insert(0) += 1;
            }
        }
    }
    let mut word_freq: Vec<(String, u32)> = word_counts.into_iter().collect();
    word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    println!("\nTop 10 words:");
    for (word, count) in word_freq.iter().take(10) {
        println!("  {}: {}", word, count);
    }

    println!("\nSample:");
    for name in names.iter().take(5) {
        println!("  {}", name);
    }
    println!();
}

fn print_usage() {
    println!("Preview: interactive generation shell for trying out word lists.");
    println!();
    println!("Usage: preview --lists <dir> [--manifest <file.ron>] [--seed <n>]");
    println!();
    println!("  --lists <dir>         Directory holding the word list files");
    println!("  --manifest <file>     RON manifest of lists to load (optional)");
    println!("  --seed <n>            Initial RNG seed (default: 42)");
}

fn print_help() {
    println!("Commands:");
    println!("  faction                  Generate a faction name");
    println!("  settlement               Generate a settlement name");
    println!("  person <gender>          Generate a person's full name");
    println!("  animal <gender>          Generate a tribal animal name");
    println!("  bulk <kind> <n> [gender] Generate n names with repetition statistics");
    println!("  seed <n>                 Set RNG seed");
    println!("  forget                   Clear the record of issued names");
    println!("  help                     Show this help");
    println!("  quit                     Exit");
    println!();
    println!("Genders: male, female, none");
}
