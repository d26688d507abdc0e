use super::{DifficultySplit, PositionId, SkillId, SkillRequirementId};

/// Desired distribution of question difficulty for one position/skill pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRequirement {
    pub id: SkillRequirementId,
    pub position_id: PositionId,
    pub skill_id: SkillId,
    pub split: DifficultySplit,
}

impl SkillRequirement {
    pub fn new(position_id: PositionId, skill_id: SkillId, split: DifficultySplit) -> Self {
        Self {
            id: SkillRequirementId::new(),
            position_id,
            skill_id,
            split,
        }
    }

    /// Full replacement of every field except the identity.
    pub fn replaced_by(self, position_id: PositionId, skill_id: SkillId, split: DifficultySplit) -> Self {
        Self {
            id: self.id,
            position_id,
            skill_id,
            split,
        }
    }

    pub fn pair(&self) -> (PositionId, SkillId) {
        (self.position_id, self.skill_id)
    }
}
