use super::{Difficulty, QuestionId, QuestionTitle, SkillId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub skill_id: SkillId,
    pub title: QuestionTitle,
    pub right_answer: Option<String>,
    pub difficulty: Difficulty,
}

/// Field values for creating a question or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub skill_id: SkillId,
    pub title: QuestionTitle,
    pub right_answer: Option<String>,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(draft: QuestionDraft) -> Self {
        Self::from_draft(QuestionId::new(), draft)
    }

    pub fn replaced_by(self, draft: QuestionDraft) -> Self {
        Self::from_draft(self.id, draft)
    }

    fn from_draft(id: QuestionId, draft: QuestionDraft) -> Self {
        Self {
            id,
            skill_id: draft.skill_id,
            title: draft.title,
            right_answer: draft.right_answer,
            difficulty: draft.difficulty,
        }
    }
}
