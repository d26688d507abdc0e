use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::DomainError;

/// Entity ids are random UUIDs; `KIND` names the entity in parse errors.
macro_rules! define_id_type {
    ($name:ident, $kind:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            pub const KIND: &'static str = $kind;

            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self).map_err(|_| DomainError::InvalidId {
                    kind: Self::KIND,
                    value: s.to_string(),
                })
            }
        }
    };
}

define_id_type!(PositionId, "position");
define_id_type!(SkillId, "skill");
define_id_type!(QuestionId, "question");
define_id_type!(SkillRequirementId, "skill requirement");
