pub mod position;
pub mod question;
pub mod skill;
pub mod skill_requirement;
