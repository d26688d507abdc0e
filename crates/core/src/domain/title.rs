use std::fmt;

use super::DomainError;

macro_rules! define_title_type {
    ($name:ident, $max_len:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LEN: usize = $max_len;

            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();

                if trimmed.is_empty() {
                    return Err(DomainError::EmptyTitle);
                }

                let len = trimmed.chars().count();
                if len > Self::MAX_LEN {
                    return Err(DomainError::TitleTooLong {
                        len,
                        max: Self::MAX_LEN,
                    });
                }

                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }

            /// Unicode lowercase form used for case-insensitive matching.
            pub fn folded(&self) -> String {
                self.0.to_lowercase()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_title_type!(PositionTitle, 100);
define_title_type!(SkillTitle, 255);
define_title_type!(QuestionTitle, 1000);
