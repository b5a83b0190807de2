/// The name engine: category registry, start-up loading, and dispatch from
/// a host namer identifier to the matching composer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::bank::{BankError, NameBank, ValidationIssue};
use crate::core::composer;
use crate::core::dice::Dice;
use crate::core::oracle::UniquenessOracle;
use crate::core::source::{DirSource, LineSource};
use crate::schema::category::{NameCategory, NameStyle};
use crate::schema::name::GeneratedName;
use crate::schema::slot::{Gender, NameSlot};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("bank error: {0}")]
    Bank(#[from] BankError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// One word list to load: which cell it fills and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub category: NameCategory,
    pub slot: NameSlot,
    pub gender: Gender,
    pub file: String,
}

impl ManifestEntry {
    pub fn new(slot: NameSlot, gender: Gender, file: &str) -> Self {
        Self {
            category: NameCategory::HumanStandard,
            slot,
            gender,
            file: file.to_string(),
        }
    }
}

/// The set of word lists loaded at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameManifest {
    pub entries: Vec<ManifestEntry>,
}

impl NameManifest {
    /// The stock tribal word lists.
    pub fn tribal() -> Self {
        Self {
            entries: vec![
                ManifestEntry::new(NameSlot::Tribal, Gender::Female, "Tribal_Name_Female.txt"),
                ManifestEntry::new(NameSlot::Tribal, Gender::Male, "Tribal_Name_Male.txt"),
                ManifestEntry::new(NameSlot::Desc, Gender::Male, "Tribal_Adjectives.txt"),
                ManifestEntry::new(NameSlot::Desc, Gender::Female, "Tribal_Colors.txt"),
                ManifestEntry::new(NameSlot::Desc, Gender::None, "Tribal_FactionUnits.txt"),
                ManifestEntry::new(NameSlot::Object, Gender::Female, "Tribal_Animals.txt"),
                ManifestEntry::new(NameSlot::Object, Gender::None, "Tribal_Terrains.txt"),
                ManifestEntry::new(NameSlot::Object, Gender::Male, "Tribal_Weapons.txt"),
            ],
        }
    }

    /// Load a manifest from a RON list of entries.
    pub fn load_from_ron(path: &Path) -> Result<NameManifest, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a manifest from a RON string.
    pub fn parse_ron(input: &str) -> Result<NameManifest, EngineError> {
        let entries: Vec<ManifestEntry> = ron::from_str(input)?;
        Ok(NameManifest { entries })
    }
}

/// Host naming templates this engine composes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamerKind {
    FactionTribal,
    SettlementTribal,
    PersonTribal,
    AnimalGeneric,
}

impl NamerKind {
    /// Match a host namer identifier, e.g. `"NamerPersonTribal"` or a
    /// modded variant containing it.
    pub fn from_namer(namer: &str) -> Option<NamerKind> {
        if namer.contains("NamerFactionTribal") {
            Some(Self::FactionTribal)
        } else if namer.contains("NamerSettlementTribal") {
            Some(Self::SettlementTribal)
        } else if namer.contains("NamerPersonTribal") {
            Some(Self::PersonTribal)
        } else if namer.contains("NamerAnimalGeneric") {
            Some(Self::AnimalGeneric)
        } else {
            None
        }
    }
}

/// The faction a subject belongs to, as far as naming cares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionInfo {
    pub def_name: String,
    /// Namer the faction uses for its people, if any.
    pub person_namer: Option<String>,
}

impl FactionInfo {
    pub fn is_tribal(&self) -> bool {
        self.def_name.contains("Tribe") || self.def_name == "TribalRaiders"
    }
}

/// Someone (or something) about to be named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSubject {
    pub gender: Gender,
    /// Namer tied to the subject's race; animals have one, people do not.
    pub race_namer: Option<String>,
    pub faction: Option<FactionInfo>,
}

/// Word banks for every category, built once and read-only afterwards.
pub struct NameEngine {
    banks: FxHashMap<NameCategory, NameBank>,
    issues: Vec<ValidationIssue>,
}

/// Builder for constructing a `NameEngine`.
pub struct NameEngineBuilder {
    name_lists_dir: Option<String>,
    manifest_path: Option<String>,
    /// Directly provided manifest (for embedding or tests).
    manifest: Option<NameManifest>,
    /// Directly provided line source (for embedding or tests).
    source: Option<Box<dyn LineSource>>,
    /// Directly provided banks (for testing without files).
    banks: Vec<NameBank>,
}

impl NameEngine {
    pub fn builder() -> NameEngineBuilder {
        NameEngineBuilder {
            name_lists_dir: None,
            manifest_path: None,
            manifest: None,
            source: None,
            banks: Vec::new(),
        }
    }

    pub fn bank_of(&self, category: NameCategory) -> Option<&NameBank> {
        self.banks.get(&category)
    }

    /// Findings from the validation pass run during `build()`.
    pub fn validation_issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    fn tribal_bank(&self) -> Option<&NameBank> {
        let bank = self.bank_of(NameCategory::HumanStandard);
        if bank.is_none() {
            warn!("no HumanStandard name bank loaded; deferring to host namer");
        }
        bank
    }

    /// Name a faction or settlement for a host namer.
    ///
    /// Returns `None` when the namer is not a tribal faction or settlement
    /// template, meaning the host should use its own generator. `accept` is
    /// only consulted for settlements.
    pub fn generate_text_name<D, O>(
        &self,
        namer: &str,
        dice: &mut D,
        oracle: &O,
        accept: Option<&mut dyn FnMut(&str) -> bool>,
    ) -> Option<String>
    where
        D: Dice + ?Sized,
        O: UniquenessOracle + ?Sized,
    {
        let name = match NamerKind::from_namer(namer) {
            Some(NamerKind::FactionTribal) => composer::group_name(self.tribal_bank()?, dice, oracle),
            Some(NamerKind::SettlementTribal) => {
                composer::place_name(self.tribal_bank()?, dice, oracle, accept)
            }
            _ => {
                debug!(namer, "declining text name");
                return None;
            }
        };
        Some(name)
    }

    /// Name a person or animal.
    ///
    /// Returns `None` for anything but full-style names, for animals outside
    /// tribal factions, and for people whose faction does not use the tribal
    /// person namer.
    pub fn generate_subject_name<D, O>(
        &self,
        subject: &NameSubject,
        style: NameStyle,
        dice: &mut D,
        oracle: &O,
    ) -> Option<GeneratedName>
    where
        D: Dice + ?Sized,
        O: UniquenessOracle + ?Sized,
    {
        if style != NameStyle::Full {
            return None;
        }

        if let Some(ref race_namer) = subject.race_namer {
            let tribal_faction = subject.faction.as_ref().is_some_and(FactionInfo::is_tribal);
            if NamerKind::from_namer(race_namer) == Some(NamerKind::AnimalGeneric) && tribal_faction {
                return self.compose(NamerKind::AnimalGeneric, subject.gender, dice, oracle);
            }
            return None;
        }

        let person_namer = subject.faction.as_ref()?.person_namer.as_deref()?;
        if NamerKind::from_namer(person_namer) == Some(NamerKind::PersonTribal) {
            return self.compose(NamerKind::PersonTribal, subject.gender, dice, oracle);
        }
        None
    }

    /// Run the composer for `kind` directly. Faction and settlement names
    /// come back as `GeneratedName::Single`.
    pub fn compose<D, O>(
        &self,
        kind: NamerKind,
        gender: Gender,
        dice: &mut D,
        oracle: &O,
    ) -> Option<GeneratedName>
    where
        D: Dice + ?Sized,
        O: UniquenessOracle + ?Sized,
    {
        let bank = self.tribal_bank()?;
        let name = match kind {
            NamerKind::FactionTribal => GeneratedName::Single(composer::group_name(bank, dice, oracle)),
            NamerKind::SettlementTribal => {
                GeneratedName::Single(composer::place_name(bank, dice, oracle, None))
            }
            NamerKind::PersonTribal => {
                GeneratedName::Triple(composer::person_name(bank, gender, dice, oracle))
            }
            NamerKind::AnimalGeneric => composer::animal_name(bank, gender, dice, oracle),
        };
        Some(name)
    }
}

impl NameEngineBuilder {
    /// Directory holding the word list files named by the manifest.
    pub fn name_lists_dir(mut self, path: &str) -> Self {
        self.name_lists_dir = Some(path.to_string());
        self
    }

    /// RON manifest file; defaults to the stock tribal lists. Without a
    /// list directory or source, list files are read from the manifest's
    /// own directory.
    pub fn manifest(mut self, path: &str) -> Self {
        self.manifest_path = Some(path.to_string());
        self
    }

    /// Provide a manifest directly.
    pub fn with_manifest(mut self, manifest: NameManifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Provide the line source directly, instead of a directory.
    pub fn with_source(mut self, source: impl LineSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Provide a ready bank directly (for testing without files).
    pub fn with_bank(mut self, bank: NameBank) -> Self {
        self.banks.push(bank);
        self
    }

    /// Load every manifest entry, then validate every bank once.
    pub fn build(self) -> Result<NameEngine, EngineError> {
        let mut banks: FxHashMap<NameCategory, NameBank> = FxHashMap::default();
        for bank in self.banks {
            banks.insert(bank.category(), bank);
        }

        // A bare manifest path reads its lists from the manifest's directory
        let manifest_dir = self
            .manifest_path
            .as_deref()
            .and_then(|path| Path::new(path).parent())
            .map(Path::to_path_buf);
        let source: Option<Box<dyn LineSource>> =
            match (self.source, self.name_lists_dir, manifest_dir) {
                (Some(source), _, _) => Some(source),
                (None, Some(dir), _) => Some(Box::new(DirSource::new(dir))),
                (None, None, Some(dir)) => {
                    debug!(dir = %dir.display(), "reading word lists beside the manifest");
                    Some(Box::new(DirSource::new(dir)))
                }
                (None, None, None) => None,
            };

        if let Some(source) = source {
            let manifest = match (self.manifest, self.manifest_path) {
                (Some(manifest), _) => manifest,
                (None, Some(path)) => NameManifest::load_from_ron(Path::new(&path))?,
                (None, None) => NameManifest::tribal(),
            };

            for entry in &manifest.entries {
                banks
                    .entry(entry.category)
                    .or_insert_with(|| NameBank::new(entry.category))
                    .load_file(entry.slot, entry.gender, source.as_ref(), &entry.file)?;
            }
        }

        let mut issues = Vec::new();
        for bank in banks.values() {
            issues.extend(bank.validate());
        }

        let words: usize = banks.values().map(|bank| bank.words().len()).sum();
        info!(
            banks = banks.len(),
            words,
            issues = issues.len(),
            "name engine ready"
        );

        Ok(NameEngine { banks, issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bank::ERROR_NAME;
    use crate::core::oracle::NoOracle;
    use crate::core::source::MemorySource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn memory_lists() -> MemorySource {
        MemorySource::new()
            .with_file("Tribal_Name_Female.txt", "Kaya\nAiyana\nNita\n")
            .with_file("Tribal_Name_Male.txt", "Tahu\nKoa\nAhote\n")
            .with_file("Tribal_Adjectives.txt", "Swift\nQuiet\nBold\n")
            .with_file("Tribal_Colors.txt", "Red\nOchre\n")
            .with_file("Tribal_FactionUnits.txt", "Clan\nTribe\n")
            .with_file("Tribal_Animals.txt", "Wolf\nHeron\n")
            .with_file("Tribal_Terrains.txt", "Hills\nRiver\n")
            .with_file("Tribal_Weapons.txt", "Spear\nClub\n")
    }

    fn build_test_engine() -> NameEngine {
        NameEngine::builder()
            .with_source(memory_lists())
            .build()
            .unwrap()
    }

    fn tribal_faction() -> FactionInfo {
        FactionInfo {
            def_name: "TribeCivil".to_string(),
            person_namer: Some("NamerPersonTribal".to_string()),
        }
    }

    #[test]
    fn namer_kind_matching() {
        assert_eq!(NamerKind::from_namer("NamerFactionTribal"), Some(NamerKind::FactionTribal));
        assert_eq!(
            NamerKind::from_namer("NamerSettlementTribalSavage"),
            Some(NamerKind::SettlementTribal)
        );
        assert_eq!(NamerKind::from_namer("NamerPersonTribal"), Some(NamerKind::PersonTribal));
        assert_eq!(NamerKind::from_namer("NamerAnimalGenericFemale"), Some(NamerKind::AnimalGeneric));
        assert_eq!(NamerKind::from_namer("NamerFactionOutlander"), None);
    }

    #[test]
    fn build_loads_stock_manifest() {
        let engine = build_test_engine();
        let bank = engine.bank_of(NameCategory::HumanStandard).unwrap();
        assert_eq!(bank.names_for(NameSlot::Tribal, Gender::Female), &["Kaya", "Aiyana", "Nita"]);
        assert_eq!(bank.names_for(NameSlot::Desc, Gender::None), &["Clan", "Tribe"]);
        assert_eq!(bank.names_for(NameSlot::Object, Gender::Male), &["Spear", "Club"]);
        assert!(bank.names_for(NameSlot::Tribal, Gender::None).is_empty());
        assert!(engine.validation_issues().is_empty());
        assert!(engine.bank_of(NameCategory::NoName).is_none());
    }

    #[test]
    fn build_collects_validation_issues() {
        let source = memory_lists().with_file("Tribal_Colors.txt", "Red\nRed\nOchre \n");
        let engine = NameEngine::builder().with_source(source).build().unwrap();
        assert_eq!(engine.validation_issues().len(), 2);
        let bank = engine.bank_of(NameCategory::HumanStandard).unwrap();
        assert_eq!(bank.names_for(NameSlot::Desc, Gender::Female), &["Red", "Red", "Ochre "]);
    }

    #[test]
    fn build_fails_on_missing_list() {
        let source = MemorySource::new().with_file("Tribal_Name_Female.txt", "Kaya\n");
        let result = NameEngine::builder().with_source(source).build();
        assert!(matches!(
            result,
            Err(EngineError::Bank(BankError::MissingResource(_)))
        ));
    }

    #[test]
    fn manifest_from_ron() {
        let manifest = NameManifest::parse_ron(
            r#"[
                (slot: Tribal, gender: Female, file: "women.txt"),
                (category: HumanStandard, slot: Object, gender: Male, file: "land.txt"),
            ]"#,
        )
        .unwrap();
        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(manifest.entries[0], ManifestEntry::new(NameSlot::Tribal, Gender::Female, "women.txt"));
        assert_eq!(manifest.entries[1].category, NameCategory::HumanStandard);

        let source = MemorySource::new()
            .with_file("women.txt", "Kaya\n")
            .with_file("land.txt", "Hills\n");
        let engine = NameEngine::builder()
            .with_source(source)
            .with_manifest(manifest)
            .build()
            .unwrap();
        let bank = engine.bank_of(NameCategory::HumanStandard).unwrap();
        assert_eq!(bank.words().len(), 2);
    }

    #[test]
    fn manifest_ron_rejects_garbage() {
        assert!(matches!(
            NameManifest::parse_ron("[(slot: Nope)]"),
            Err(EngineError::Ron(_))
        ));
    }

    #[test]
    fn stock_manifest_covers_eight_lists() {
        let manifest = NameManifest::tribal();
        assert_eq!(manifest.entries.len(), 8);
        assert!(manifest
            .entries
            .iter()
            .all(|e| e.category == NameCategory::HumanStandard));
        // Neither Tribal/None list nor duplicate cells
        let mut cells: Vec<(NameSlot, Gender)> =
            manifest.entries.iter().map(|e| (e.slot, e.gender)).collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 8);
    }

    #[test]
    fn text_names_for_tribal_namers_only() {
        let engine = build_test_engine();
        let mut rng = StdRng::seed_from_u64(5);

        let faction = engine.generate_text_name("NamerFactionTribal", &mut rng, &NoOracle, None);
        assert!(faction.is_some_and(|name| name.contains("Clan") || name.contains("Tribe")));

        let settlement = engine.generate_text_name("NamerSettlementTribal", &mut rng, &NoOracle, None);
        assert!(settlement.is_some());

        let other = engine.generate_text_name("NamerFactionPirate", &mut rng, &NoOracle, None);
        assert_eq!(other, None);
    }

    #[test]
    fn settlement_uses_predicate() {
        let engine = build_test_engine();
        let mut rng = StdRng::seed_from_u64(8);
        let mut accept = |candidate: &str| candidate.ends_with(" 2");
        let name = engine
            .generate_text_name("NamerSettlementTribal", &mut rng, &NoOracle, Some(&mut accept))
            .unwrap();
        assert!(name.ends_with(" 2"), "got {}", name);
    }

    #[test]
    fn person_names_for_tribal_people() {
        let engine = build_test_engine();
        let mut rng = StdRng::seed_from_u64(13);
        let subject = NameSubject {
            gender: Gender::Female,
            race_namer: None,
            faction: Some(tribal_faction()),
        };
        let name = engine
            .generate_subject_name(&subject, NameStyle::Full, &mut rng, &NoOracle)
            .unwrap();
        let GeneratedName::Triple(triple) = name else {
            panic!("expected a structured name");
        };
        let women = ["Kaya", "Aiyana", "Nita"];
        assert!(women.contains(&triple.first.as_str()));
        assert!(women.contains(&triple.last.as_str()));
        assert!(!triple.nick.is_empty());
    }

    #[test]
    fn non_full_style_declines() {
        let engine = build_test_engine();
        let mut rng = StdRng::seed_from_u64(13);
        let subject = NameSubject {
            gender: Gender::Male,
            race_namer: None,
            faction: Some(tribal_faction()),
        };
        assert!(engine
            .generate_subject_name(&subject, NameStyle::Numeric, &mut rng, &NoOracle)
            .is_none());
    }

    #[test]
    fn non_tribal_people_decline() {
        let engine = build_test_engine();
        let mut rng = StdRng::seed_from_u64(13);
        let outlander = NameSubject {
            gender: Gender::Male,
            race_namer: None,
            faction: Some(FactionInfo {
                def_name: "OutlanderCivil".to_string(),
                person_namer: Some("NamerPersonOutlander".to_string()),
            }),
        };
        assert!(engine
            .generate_subject_name(&outlander, NameStyle::Full, &mut rng, &NoOracle)
            .is_none());

        let factionless = NameSubject::default();
        assert!(engine
            .generate_subject_name(&factionless, NameStyle::Full, &mut rng, &NoOracle)
            .is_none());
    }

    #[test]
    fn animals_named_only_in_tribal_factions() {
        let engine = build_test_engine();
        let mut rng = StdRng::seed_from_u64(21);
        let mut animal = NameSubject {
            gender: Gender::Male,
            race_namer: Some("NamerAnimalGenericMale".to_string()),
            faction: Some(FactionInfo {
                def_name: "TribalRaiders".to_string(),
                person_namer: None,
            }),
        };
        let name = engine.generate_subject_name(&animal, NameStyle::Full, &mut rng, &NoOracle);
        assert!(matches!(name, Some(GeneratedName::Single(_))));

        animal.faction = Some(FactionInfo {
            def_name: "PlayerColony".to_string(),
            person_namer: None,
        });
        assert!(engine
            .generate_subject_name(&animal, NameStyle::Full, &mut rng, &NoOracle)
            .is_none());

        animal.faction = None;
        assert!(engine
            .generate_subject_name(&animal, NameStyle::Full, &mut rng, &NoOracle)
            .is_none());
    }

    #[test]
    fn other_race_namers_decline() {
        let engine = build_test_engine();
        let mut rng = StdRng::seed_from_u64(21);
        let mech = NameSubject {
            gender: Gender::None,
            race_namer: Some("NamerMech".to_string()),
            faction: Some(tribal_faction()),
        };
        assert!(engine
            .generate_subject_name(&mech, NameStyle::Full, &mut rng, &NoOracle)
            .is_none());
    }

    #[test]
    fn missing_bank_declines() {
        let engine = NameEngine::builder().build().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(engine
            .generate_text_name("NamerFactionTribal", &mut rng, &NoOracle, None)
            .is_none());
        assert!(engine
            .compose(NamerKind::PersonTribal, Gender::Male, &mut rng, &NoOracle)
            .is_none());
    }

    #[test]
    fn empty_cells_yield_sentinel() {
        let engine = NameEngine::builder()
            .with_bank(NameBank::new(NameCategory::HumanStandard))
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let name = engine
            .compose(NamerKind::AnimalGeneric, Gender::Female, &mut rng, &NoOracle)
            .unwrap();
        assert!(name.to_string().contains(ERROR_NAME));
    }
}
