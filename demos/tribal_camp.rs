/// Tribal Camp example: names everything in a freshly founded tribe.
///
/// A faction, its home settlement and a few outposts, the founding members,
/// and their animals. Every issued name is recorded so nicknames and
/// settlement names stay unique.
///
/// Run with: cargo run --example tribal_camp

use rand::rngs::StdRng;
use rand::SeedableRng;
use tribal_names::core::engine::{FactionInfo, NameEngine, NameSubject};
use tribal_names::core::oracle::IssuedNames;
use tribal_names::schema::category::NameStyle;
use tribal_names::schema::name::GeneratedName;
use tribal_names::schema::slot::Gender;

fn main() {
    let engine = NameEngine::builder()
        .name_lists_dir("name_lists")
        .build()
        .expect("Failed to load word lists");

    let mut rng = StdRng::seed_from_u64(2026);
    let mut issued = IssuedNames::new();

    let tribe = FactionInfo {
        def_name: "TribeCivil".to_string(),
        person_namer: Some("NamerPersonTribal".to_string()),
    };

    // --- The faction ---
    let faction_name = engine
        .generate_text_name("NamerFactionTribal", &mut rng, &issued, None)
        .expect("Tribal faction namer declined");
    issued.record_text(&faction_name);
    println!("=== {} ===\n", faction_name);

    // --- Settlements ---
    println!("Settlements:");
    let mut settlements: Vec<String> = Vec::new();
    for _ in 0..4 {
        let mut accept = |candidate: &str| !settlements.iter().any(|s| s == candidate);
        let name = engine
            .generate_text_name("NamerSettlementTribal", &mut rng, &issued, Some(&mut accept))
            .expect("Tribal settlement namer declined");
        println!("  {}", name);
        issued.record_text(&name);
        settlements.push(name);
    }

    // --- Founding members ---
    println!("\nFounders:");
    let genders = [Gender::Female, Gender::Male, Gender::Female, Gender::Male, Gender::Female];
    for gender in genders {
        let subject = NameSubject {
            gender,
            race_namer: None,
            faction: Some(tribe.clone()),
        };
        let name = engine
            .generate_subject_name(&subject, NameStyle::Full, &mut rng, &issued)
            .expect("Tribal person namer declined");
        if let GeneratedName::Triple(ref triple) = name {
            println!("  {:<32} ({}, called {})", triple.to_string(), gender, triple.nick);
        }
        issued.record(&name);
    }

    // --- Animals ---
    println!("\nAnimals:");
    for (race_namer, gender) in [
        ("NamerAnimalGenericMale", Gender::Male),
        ("NamerAnimalGenericFemale", Gender::Female),
        ("NamerAnimalGenericFemale", Gender::Female),
    ] {
        let animal = NameSubject {
            gender,
            race_namer: Some(race_namer.to_string()),
            faction: Some(tribe.clone()),
        };
        let name = engine
            .generate_subject_name(&animal, NameStyle::Full, &mut rng, &issued)
            .expect("Tribal animal namer declined");
        println!("  {} ({})", name, gender);
        issued.record(&name);
    }

    // --- An outsider's pet gets no tribal name ---
    let stray = NameSubject {
        gender: Gender::Male,
        race_namer: Some("NamerAnimalGenericMale".to_string()),
        faction: Some(FactionInfo {
            def_name: "OutlanderCivil".to_string(),
            person_namer: Some("NamerPersonOutlander".to_string()),
        }),
    };
    let outsider = engine.generate_subject_name(&stray, NameStyle::Full, &mut rng, &issued);
    println!(
        "\nOutlander dog: {}",
        outsider.map_or("(left to the host namer)".to_string(), |n| n.to_string())
    );

    println!("\n{} names issued.", issued.len());
}
