//! Question search: sparse criteria folded into one conjunctive filter.
//!
//! The filter is data, not a closure. Storage adapters translate each
//! [`QuestionPredicate`] into their own query language, and
//! [`QuestionFilter::matches`] gives the reference in-memory semantics.

use super::{Difficulty, Question, SkillId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSearchCriteria {
    pub skill_id: Option<SkillId>,
    pub title: Option<String>,
    pub right_answer: Option<String>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionPredicate {
    Skill(SkillId),
    /// Case-insensitive substring; the needle is stored lowercased.
    TitleContains(String),
    RightAnswerEquals(String),
    Difficulty(Difficulty),
}

impl QuestionPredicate {
    pub fn skill(skill_id: Option<SkillId>) -> Option<Self> {
        skill_id.map(Self::Skill)
    }

    pub fn title_contains(title: Option<&str>) -> Option<Self> {
        title
            .filter(|title| !title.trim().is_empty())
            .map(|title| Self::TitleContains(title.to_lowercase()))
    }

    pub fn right_answer_equals(right_answer: Option<&str>) -> Option<Self> {
        right_answer
            .filter(|answer| !answer.trim().is_empty())
            .map(|answer| Self::RightAnswerEquals(answer.to_string()))
    }

    pub fn difficulty(difficulty: Option<Difficulty>) -> Option<Self> {
        difficulty.map(Self::Difficulty)
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::Skill(skill_id) => question.skill_id == *skill_id,
            Self::TitleContains(needle) => question.title.folded().contains(needle.as_str()),
            Self::RightAnswerEquals(answer) => question.right_answer.as_deref() == Some(answer),
            Self::Difficulty(difficulty) => question.difficulty == *difficulty,
        }
    }
}

/// AND of predicates. The empty filter matches every question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    predicates: Vec<QuestionPredicate>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_criteria(criteria: &QuestionSearchCriteria) -> Self {
        [
            QuestionPredicate::skill(criteria.skill_id),
            QuestionPredicate::title_contains(criteria.title.as_deref()),
            QuestionPredicate::right_answer_equals(criteria.right_answer.as_deref()),
            QuestionPredicate::difficulty(criteria.difficulty),
        ]
        .into_iter()
        .flatten()
        .fold(Self::all(), Self::with)
    }

    pub fn with(mut self, predicate: QuestionPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[QuestionPredicate] {
        &self.predicates
    }

    pub fn is_unconstrained(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, question: &Question) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(question))
    }
}

impl From<&QuestionSearchCriteria> for QuestionFilter {
    fn from(criteria: &QuestionSearchCriteria) -> Self {
        Self::from_criteria(criteria)
    }
}
