mod error;
mod position;
mod question;
mod skill;
mod skill_requirement;

pub(crate) use error::conflict_on_unique;
pub use error::{ServiceError, ServiceResult};
pub use position::PositionService;
pub use question::QuestionService;
pub use skill::{SkillDeleteOutcome, SkillService};
pub use skill_requirement::{SkillRequirementInput, SkillRequirementService};
