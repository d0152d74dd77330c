use serde::Deserialize;

use super::TechnicalSkill;

/// Filters for technical-skill search. `name` wins over `category`; with
/// neither, every skill matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct TechnicalSkillSearchCriteria {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl TechnicalSkillSearchCriteria {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            category: None,
        }
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            name: None,
            category: Some(category.into()),
        }
    }

    pub fn apply(&self, skills: Vec<TechnicalSkill>) -> Vec<TechnicalSkill> {
        match (&self.name, &self.category) {
            (Some(name), _) => {
                let needle = name.to_lowercase();
                skills
                    .into_iter()
                    .filter(|skill| skill.name.to_lowercase().contains(&needle))
                    .collect()
            }
            (None, Some(category)) => skills
                .into_iter()
                .filter(|skill| skill.category.matches(category))
                .collect(),
            (None, None) => skills,
        }
    }
}
