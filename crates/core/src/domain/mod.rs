mod difficulty;
mod error;
mod ids;
mod page;
mod position;
mod question;
mod search;
mod skill;
mod skill_requirement;
mod split;
mod title;

pub use difficulty::Difficulty;
pub use error::DomainError;
pub use ids::{PositionId, QuestionId, SkillId, SkillRequirementId};
pub use page::PageRequest;
pub use position::Position;
pub use question::{Question, QuestionDraft};
pub use search::{QuestionFilter, QuestionPredicate, QuestionSearchCriteria};
pub use skill::Skill;
pub use skill_requirement::SkillRequirement;
pub use split::{DifficultySplit, PERCENT_MAX, PERCENT_MIN, PERCENT_TOTAL, Tier, validate_split};
pub use title::{PositionTitle, QuestionTitle, SkillTitle};
