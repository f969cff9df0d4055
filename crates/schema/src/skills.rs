//! Skills listed on a member's profile.

use crate::capabilities::{NameType, Proficiency, Years};
use linkedin_xml::schema_entity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How well a member knows a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    /// The code used on the wire.
    pub fn code(self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
            ProficiencyLevel::Expert => "expert",
        }
    }
}

/// A proficiency code the API is not known to send.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown proficiency level {0:?}")]
pub struct UnknownProficiencyLevel(pub String);

impl FromStr for ProficiencyLevel {
    type Err = UnknownProficiencyLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(ProficiencyLevel::Beginner),
            "intermediate" => Ok(ProficiencyLevel::Intermediate),
            "advanced" => Ok(ProficiencyLevel::Advanced),
            "expert" => Ok(ProficiencyLevel::Expert),
            other => Err(UnknownProficiencyLevel(other.to_string())),
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

schema_entity! {
    /// A member's proficiency in a skill, as a level code and display name.
    pub struct SkillProficiency("proficiency") {
        level: text(ProficiencyLevel, "level") required,
        name: text(String, "name") optional,
    }
}

schema_entity! {
    /// How long a member has practised a skill.
    pub struct SkillYears("years") {
        id: normalized("id") required,
        name: text(String, "name") optional,
    }
}

schema_entity! {
    /// The name of a skill.
    pub struct SkillName("skill") {
        name: text(String, "name") required,
    }
}

schema_entity! {
    pub struct Skill("skill") {
        proficiency: capability(Proficiency) required,
        years: capability(Years) required,
        id: normalized("id") required,
        skill: capability(NameType) required,
    }
}

schema_entity! {
    pub struct Skills("skills") {
        total: attribute(u64, "total") optional,
        skills: list(Skill) optional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkedin_xml::{MappingError, from_xml_str};

    #[test]
    fn proficiency_level_codes() {
        for level in [
            ProficiencyLevel::Beginner,
            ProficiencyLevel::Intermediate,
            ProficiencyLevel::Advanced,
            ProficiencyLevel::Expert,
        ] {
            assert_eq!(level.code().parse::<ProficiencyLevel>(), Ok(level));
        }
        assert!("guru".parse::<ProficiencyLevel>().is_err());
    }

    #[test]
    fn unknown_level_is_an_invalid_value() {
        let err = from_xml_str::<SkillProficiency>(
            "<proficiency><level>guru</level></proficiency>",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MappingError::InvalidValue {
                entity: "proficiency",
                field: "level",
                ..
            }
        ));
    }

    #[test]
    fn skill_name_nests_inside_skill() {
        let xml = "<skill><id>  42 </id><skill><name>Rust</name></skill></skill>";
        let skill: Skill = from_xml_str(xml).unwrap();
        assert_eq!(skill.id.as_deref(), Some("42"));
        assert_eq!(
            skill.skill.and_then(|name| name.name).as_deref(),
            Some("Rust")
        );
    }
}
