//! WASM bindings for tribal-names: powers the in-browser name generator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use tribal_names::core::engine::{FactionInfo, NameEngine, NameSubject};
use tribal_names::core::oracle::IssuedNames;
use tribal_names::core::source::MemorySource;
use tribal_names::schema::category::NameStyle;
use tribal_names::schema::name::GeneratedName;
use tribal_names::schema::slot::Gender;

// ---------------------------------------------------------------------------
// Embedded word lists: compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const LISTS: &[(&str, &str)] = &[
        ("Tribal_Name_Female.txt", include_str!("../../name_lists/Tribal_Name_Female.txt")),
        ("Tribal_Name_Male.txt", include_str!("../../name_lists/Tribal_Name_Male.txt")),
        ("Tribal_Adjectives.txt", include_str!("../../name_lists/Tribal_Adjectives.txt")),
        ("Tribal_Colors.txt", include_str!("../../name_lists/Tribal_Colors.txt")),
        ("Tribal_FactionUnits.txt", include_str!("../../name_lists/Tribal_FactionUnits.txt")),
        ("Tribal_Animals.txt", include_str!("../../name_lists/Tribal_Animals.txt")),
        ("Tribal_Terrains.txt", include_str!("../../name_lists/Tribal_Terrains.txt")),
        ("Tribal_Weapons.txt", include_str!("../../name_lists/Tribal_Weapons.txt")),
    ];
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct NameInfo {
    text: String,
    first: Option<String>,
    nick: Option<String>,
    last: Option<String>,
}

impl From<&GeneratedName> for NameInfo {
    fn from(name: &GeneratedName) -> Self {
        match name {
            GeneratedName::Single(text) => NameInfo {
                text: text.clone(),
                first: None,
                nick: None,
                last: None,
            },
            GeneratedName::Triple(triple) => NameInfo {
                text: triple.to_string(),
                first: Some(triple.first.clone()),
                nick: Some(triple.nick.clone()),
                last: Some(triple.last.clone()),
            },
        }
    }
}

#[derive(serde::Serialize)]
struct IssueInfo {
    message: String,
    word: String,
}

fn parse_gender(s: &str) -> Result<Gender, JsError> {
    Gender::parse(s).ok_or_else(|| JsError::new(&format!("Unknown gender: {s}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

fn tribe() -> FactionInfo {
    FactionInfo {
        def_name: "TribeCivil".to_string(),
        person_namer: Some("NamerPersonTribal".to_string()),
    }
}

// ---------------------------------------------------------------------------
// TribalNamer: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct TribalNamer {
    engine: NameEngine,
    rng: StdRng,
    issued: IssuedNames,
}

#[wasm_bindgen]
impl TribalNamer {
    /// Create a generator over the embedded word lists.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<TribalNamer, JsError> {
        let mut source = MemorySource::new();
        for (resource, text) in data::LISTS {
            source.insert(resource, text);
        }

        let engine = NameEngine::builder()
            .with_source(source)
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;

        Ok(TribalNamer {
            engine,
            rng: StdRng::seed_from_u64(seed),
            issued: IssuedNames::new(),
        })
    }

    /// Generate a faction name. Returns a JSON name object.
    pub fn faction_name(&mut self) -> Result<String, JsError> {
        let name = self
            .engine
            .generate_text_name("NamerFactionTribal", &mut self.rng, &self.issued, None)
            .ok_or_else(|| JsError::new("No tribal word bank loaded"))?;
        self.issue(GeneratedName::Single(name))
    }

    /// Generate a settlement name not yet issued by this generator.
    pub fn settlement_name(&mut self) -> Result<String, JsError> {
        let issued = &self.issued;
        let mut accept = |candidate: &str| !issued.contains(candidate);
        let name = self
            .engine
            .generate_text_name("NamerSettlementTribal", &mut self.rng, issued, Some(&mut accept))
            .ok_or_else(|| JsError::new("No tribal word bank loaded"))?;
        self.issue(GeneratedName::Single(name))
    }

    /// Generate a tribal person's name for `"male"`, `"female"` or `"none"`.
    pub fn person_name(&mut self, gender: &str) -> Result<String, JsError> {
        let subject = NameSubject {
            gender: parse_gender(gender)?,
            race_namer: None,
            faction: Some(tribe()),
        };
        self.subject_name(&subject)
    }

    /// Generate a name for an animal kept by a tribe.
    pub fn animal_name(&mut self, gender: &str) -> Result<String, JsError> {
        let subject = NameSubject {
            gender: parse_gender(gender)?,
            race_namer: Some("NamerAnimalGeneric".to_string()),
            faction: Some(tribe()),
        };
        self.subject_name(&subject)
    }

    /// Number of names issued so far.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Forget every issued name, allowing repeats again.
    pub fn forget(&mut self) {
        self.issued.clear();
    }

    /// Return a JSON array of word list issues found at load time.
    pub fn validation_issues(&self) -> Result<String, JsError> {
        let issues: Vec<IssueInfo> = self
            .engine
            .validation_issues()
            .iter()
            .map(|issue| IssueInfo {
                message: issue.to_string(),
                word: issue.word().to_string(),
            })
            .collect();
        to_json(&issues)
    }

    /// Return JSON array of accepted gender names.
    pub fn genders() -> String {
        serde_json::to_string(&["male", "female", "none"]).unwrap_or_else(|_| "[]".to_string())
    }
}

impl TribalNamer {
    fn subject_name(&mut self, subject: &NameSubject) -> Result<String, JsError> {
        let name = self
            .engine
            .generate_subject_name(subject, NameStyle::Full, &mut self.rng, &self.issued)
            .ok_or_else(|| JsError::new("No tribal word bank loaded"))?;
        self.issue(name)
    }

    fn issue(&mut self, name: GeneratedName) -> Result<String, JsError> {
        let json = to_json(&NameInfo::from(&name))?;
        self.issued.record(&name);
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // JsError only works on wasm targets, so native tests stay on the
    // success paths.

    #[test]
    fn embedded_lists_are_clean() {
        let namer = TribalNamer::new(1).unwrap();
        assert!(namer.engine.validation_issues().is_empty());
    }

    #[test]
    fn person_json_has_parts() {
        let mut namer = TribalNamer::new(42).unwrap();
        let json = namer.person_name("female").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["first"].is_string());
        assert!(value["nick"].is_string());
        assert!(value["text"].as_str().unwrap().contains('\''));
        assert_eq!(namer.issued_count(), 1);
    }

    #[test]
    fn same_seed_same_names() {
        let mut a = TribalNamer::new(9).unwrap();
        let mut b = TribalNamer::new(9).unwrap();
        for _ in 0..5 {
            assert_eq!(a.settlement_name().unwrap(), b.settlement_name().unwrap());
            assert_eq!(a.animal_name("male").unwrap(), b.animal_name("male").unwrap());
        }
    }
}
