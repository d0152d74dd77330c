// src/modules/skills/application/domain/category.rs
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechnicalSkillCategory {
    Language,
    Framework,
    DevOps,
    CiCd,
    Api,
    Vcs,
    Methodology,
    Database,
    Testing,
    CodeQuality,
    Architecture,
    Development,
    Streaming,
    Automation,
    Platform,
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown technical skill category: '{0}'")]
pub struct UnknownCategory(pub String);

use TechnicalSkillCategory as C;

// (category, id, internal name, display label)
static TABLE: [(C, u8, &str, &str); 16] = [
    (C::Language, 1, "LANGUAGE", "Language"),
    (C::Framework, 2, "FRAMEWORK", "Framework"),
    (C::DevOps, 3, "DEVOPS", "DevOps"),
    (C::CiCd, 4, "CICD", "CI/CD"),
    (C::Api, 5, "API", "API"),
    (C::Vcs, 6, "VCS", "VCS"),
    (C::Methodology, 7, "METHODOLOGY", "Methodology"),
    (C::Database, 8, "DATABASE", "Database"),
    (C::Testing, 9, "TESTING", "Testing"),
    (C::CodeQuality, 10, "CODE_QUALITY", "Code Quality"),
    (C::Architecture, 11, "ARCHITECTURE", "Architecture"),
    (C::Development, 12, "DEVELOPMENT", "Development"),
    (C::Streaming, 13, "STREAMING", "Streaming"),
    (C::Automation, 14, "AUTOMATION", "Automation"),
    (C::Platform, 15, "PLATFORM", "Platform"),
    (C::Data, 16, "DATA", "Data"),
];

static BY_ID: Lazy<HashMap<u8, C>> =
    Lazy::new(|| TABLE.iter().map(|(c, id, _, _)| (*id, *c)).collect());

// lowercased names and labels
static BY_TEXT: Lazy<HashMap<String, C>> = Lazy::new(|| {
    TABLE
        .iter()
        .flat_map(|(c, _, name, label)| [(name.to_lowercase(), *c), (label.to_lowercase(), *c)])
        .collect()
});

impl TechnicalSkillCategory {
    pub fn all() -> impl Iterator<Item = TechnicalSkillCategory> {
        TABLE.iter().map(|(c, _, _, _)| *c)
    }

    fn row(&self) -> &'static (C, u8, &'static str, &'static str) {
        // variants are declared in table order
        &TABLE[*self as usize]
    }

    pub fn id(&self) -> u8 {
        self.row().1
    }

    pub fn name(&self) -> &'static str {
        self.row().2
    }

    pub fn label(&self) -> &'static str {
        self.row().3
    }

    pub fn from_id(id: u8) -> Result<Self, UnknownCategory> {
        BY_ID
            .get(&id)
            .copied()
            .ok_or_else(|| UnknownCategory(id.to_string()))
    }

    /// Accepts the display label or the internal name, ignoring case.
    pub fn parse(value: &str) -> Result<Self, UnknownCategory> {
        BY_TEXT
            .get(&value.trim().to_lowercase())
            .copied()
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }

    pub fn matches(&self, value: &str) -> bool {
        self.label().eq_ignore_ascii_case(value) || self.name().eq_ignore_ascii_case(value)
    }
}

impl fmt::Display for TechnicalSkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TechnicalSkillCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TechnicalSkillCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TechnicalSkillCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(u8),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Id(id) => Self::from_id(id),
            Raw::Text(text) => Self::parse(&text),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
