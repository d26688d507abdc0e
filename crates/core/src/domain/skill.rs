use super::{SkillId, SkillTitle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: SkillId,
    pub title: SkillTitle,
}

impl Skill {
    pub fn new(title: SkillTitle) -> Self {
        Self {
            id: SkillId::new(),
            title,
        }
    }

    pub fn with_title(self, title: SkillTitle) -> Self {
        Self { title, ..self }
    }
}
