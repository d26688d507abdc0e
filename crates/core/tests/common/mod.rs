#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use question_service_core::domain::{
    Difficulty, PageRequest, Position, PositionId, PositionTitle, Question, QuestionDraft,
    QuestionFilter, QuestionId, QuestionTitle, Skill, SkillId, SkillRequirement,
    SkillRequirementId, SkillTitle,
};
use question_service_core::repository::{
    PositionRepository, QuestionRepository, RepositoryError, RepositoryResult, SkillRepository,
    SkillRequirementRepository,
};

#[derive(Default)]
struct State {
    positions: Vec<Position>,
    skills: Vec<Skill>,
    questions: Vec<Question>,
    requirements: Vec<SkillRequirement>,
    hide_taken_pairs: bool,
}

/// Vec-backed store that keeps insertion order and enforces the same
/// uniqueness and cascade rules as the relational schema.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store lock poisoned")
    }

    /// Makes the pair pre-check report "free" so only the storage
    /// constraint can catch a duplicate, as in a concurrent insert.
    pub fn hide_taken_pairs(&self) {
        self.state().hide_taken_pairs = true;
    }

    pub fn seed_position(&self, title: &str) -> Position {
        let position = Position::new(PositionTitle::new(title).expect("valid title"));
        self.state().positions.push(position.clone());
        position
    }

    pub fn seed_skill(&self, title: &str) -> Skill {
        let skill = Skill::new(SkillTitle::new(title).expect("valid title"));
        self.state().skills.push(skill.clone());
        skill
    }

    pub fn seed_question(
        &self,
        skill_id: SkillId,
        title: &str,
        right_answer: Option<&str>,
        difficulty: Difficulty,
    ) -> Question {
        let question = Question::new(QuestionDraft {
            skill_id,
            title: QuestionTitle::new(title).expect("valid title"),
            right_answer: right_answer.map(str::to_string),
            difficulty,
        });
        self.state().questions.push(question.clone());
        question
    }

    pub fn requirement_count(&self) -> usize {
        self.state().requirements.len()
    }

    pub fn has_skill(&self, id: SkillId) -> bool {
        self.state().skills.iter().any(|skill| skill.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.state().questions.len()
    }
}

fn page_of<T: Clone>(items: &[T], page: PageRequest) -> Vec<T> {
    page.slice(items.iter().cloned())
}

fn replace<T>(items: &mut [T], item: T, same: impl Fn(&T) -> bool) -> RepositoryResult<()> {
    let slot = items
        .iter_mut()
        .find(|existing| same(existing))
        .ok_or_else(|| RepositoryError::Storage(anyhow::anyhow!("row to update is missing")))?;
    *slot = item;
    Ok(())
}

#[async_trait]
impl PositionRepository for InMemoryStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Position>> {
        Ok(self.state().positions.clone())
    }

    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Position>> {
        Ok(page_of(&self.state().positions, page))
    }

    async fn find_by_id(&self, id: PositionId) -> RepositoryResult<Option<Position>> {
        Ok(self.state().positions.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> RepositoryResult<Option<Position>> {
        Ok(self
            .state()
            .positions
            .iter()
            .find(|p| p.title.as_str() == title)
            .cloned())
    }

    async fn exists_by_id(&self, id: PositionId) -> RepositoryResult<bool> {
        Ok(self.state().positions.iter().any(|p| p.id == id))
    }

    async fn exists_by_title(&self, title: &str) -> RepositoryResult<bool> {
        Ok(self.state().positions.iter().any(|p| p.title.as_str() == title))
    }

    async fn insert(&self, position: Position) -> RepositoryResult<Position> {
        let mut state = self.state();
        if state.positions.iter().any(|p| p.title == position.title) {
            return Err(RepositoryError::UniqueViolation("position.title".into()));
        }
        state.positions.push(position.clone());
        Ok(position)
    }

    async fn update(&self, position: Position) -> RepositoryResult<Position> {
        let mut state = self.state();
        if state
            .positions
            .iter()
            .any(|p| p.title == position.title && p.id != position.id)
        {
            return Err(RepositoryError::UniqueViolation("position.title".into()));
        }
        let id = position.id;
        replace(&mut state.positions, position.clone(), |p| p.id == id)?;
        Ok(position)
    }

    async fn delete_by_id(&self, id: PositionId) -> RepositoryResult<()> {
        let mut state = self.state();
        state.positions.retain(|p| p.id != id);
        state.requirements.retain(|r| r.position_id != id);
        Ok(())
    }
}

#[async_trait]
impl SkillRepository for InMemoryStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Skill>> {
        Ok(self.state().skills.clone())
    }

    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Skill>> {
        Ok(page_of(&self.state().skills, page))
    }

    async fn find_by_id(&self, id: SkillId) -> RepositoryResult<Option<Skill>> {
        Ok(self.state().skills.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> RepositoryResult<Option<Skill>> {
        Ok(self
            .state()
            .skills
            .iter()
            .find(|s| s.title.as_str() == title)
            .cloned())
    }

    async fn exists_by_id(&self, id: SkillId) -> RepositoryResult<bool> {
        Ok(self.state().skills.iter().any(|s| s.id == id))
    }

    async fn insert(&self, skill: Skill) -> RepositoryResult<Skill> {
        self.state().skills.push(skill.clone());
        Ok(skill)
    }

    async fn update(&self, skill: Skill) -> RepositoryResult<Skill> {
        let id = skill.id;
        replace(&mut self.state().skills, skill.clone(), |s| s.id == id)?;
        Ok(skill)
    }

    async fn delete_by_id(&self, id: SkillId) -> RepositoryResult<()> {
        let mut state = self.state();
        if state.questions.iter().any(|q| q.skill_id == id) {
            return Err(RepositoryError::Storage(anyhow::anyhow!(
                "foreign key violation: question.skill_id"
            )));
        }
        if state.requirements.iter().any(|r| r.skill_id == id) {
            return Err(RepositoryError::Storage(anyhow::anyhow!(
                "foreign key violation: skill_requirement.skill_id"
            )));
        }
        state.skills.retain(|s| s.id != id);
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        Ok(self.state().questions.clone())
    }

    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Question>> {
        Ok(page_of(&self.state().questions, page))
    }

    async fn find_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>> {
        Ok(self.state().questions.iter().find(|q| q.id == id).cloned())
    }

    async fn exists_by_id(&self, id: QuestionId) -> RepositoryResult<bool> {
        Ok(self.state().questions.iter().any(|q| q.id == id))
    }

    async fn find_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<Vec<Question>> {
        Ok(self
            .state()
            .questions
            .iter()
            .filter(|q| q.skill_id == skill_id)
            .cloned()
            .collect())
    }

    async fn count_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<u64> {
        Ok(self
            .state()
            .questions
            .iter()
            .filter(|q| q.skill_id == skill_id)
            .count() as u64)
    }

    async fn search(
        &self,
        filter: &QuestionFilter,
        page: Option<PageRequest>,
    ) -> RepositoryResult<Vec<Question>> {
        let matching = self
            .state()
            .questions
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect::<Vec<_>>();

        Ok(match page {
            Some(page) => page.slice(matching),
            None => matching,
        })
    }

    async fn insert(&self, question: Question) -> RepositoryResult<Question> {
        self.state().questions.push(question.clone());
        Ok(question)
    }

    async fn update(&self, question: Question) -> RepositoryResult<Question> {
        let id = question.id;
        replace(&mut self.state().questions, question.clone(), |q| q.id == id)?;
        Ok(question)
    }

    async fn delete_by_id(&self, id: QuestionId) -> RepositoryResult<()> {
        self.state().questions.retain(|q| q.id != id);
        Ok(())
    }
}

#[async_trait]
impl SkillRequirementRepository for InMemoryStore {
    async fn find_all(&self) -> RepositoryResult<Vec<SkillRequirement>> {
        Ok(self.state().requirements.clone())
    }

    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<SkillRequirement>> {
        Ok(page_of(&self.state().requirements, page))
    }

    async fn find_by_id(
        &self,
        id: SkillRequirementId,
    ) -> RepositoryResult<Option<SkillRequirement>> {
        Ok(self.state().requirements.iter().find(|r| r.id == id).copied())
    }

    async fn exists_by_id(&self, id: SkillRequirementId) -> RepositoryResult<bool> {
        Ok(self.state().requirements.iter().any(|r| r.id == id))
    }

    async fn find_by_position_id(
        &self,
        position_id: PositionId,
    ) -> RepositoryResult<Vec<SkillRequirement>> {
        Ok(self
            .state()
            .requirements
            .iter()
            .filter(|r| r.position_id == position_id)
            .copied()
            .collect())
    }

    async fn count_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<u64> {
        Ok(self
            .state()
            .requirements
            .iter()
            .filter(|r| r.skill_id == skill_id)
            .count() as u64)
    }

    async fn find_by_position_and_skill(
        &self,
        position_id: PositionId,
        skill_id: SkillId,
    ) -> RepositoryResult<Option<SkillRequirement>> {
        Ok(self
            .state()
            .requirements
            .iter()
            .find(|r| r.pair() == (position_id, skill_id))
            .copied())
    }

    async fn exists_by_position_and_skill(
        &self,
        position_id: PositionId,
        skill_id: SkillId,
    ) -> RepositoryResult<bool> {
        let state = self.state();
        if state.hide_taken_pairs {
            return Ok(false);
        }
        Ok(state
            .requirements
            .iter()
            .any(|r| r.pair() == (position_id, skill_id)))
    }

    async fn insert(&self, requirement: SkillRequirement) -> RepositoryResult<SkillRequirement> {
        let mut state = self.state();
        if state.requirements.iter().any(|r| r.pair() == requirement.pair()) {
            return Err(RepositoryError::UniqueViolation(
                "skill_requirement(position_id, skill_id)".into(),
            ));
        }
        state.requirements.push(requirement);
        Ok(requirement)
    }

    async fn update(&self, requirement: SkillRequirement) -> RepositoryResult<SkillRequirement> {
        let mut state = self.state();
        if state
            .requirements
            .iter()
            .any(|r| r.pair() == requirement.pair() && r.id != requirement.id)
        {
            return Err(RepositoryError::UniqueViolation(
                "skill_requirement(position_id, skill_id)".into(),
            ));
        }
        let id = requirement.id;
        replace(&mut state.requirements, requirement, |r| r.id == id)?;
        Ok(requirement)
    }

    async fn delete_by_id(&self, id: SkillRequirementId) -> RepositoryResult<()> {
        self.state().requirements.retain(|r| r.id != id);
        Ok(())
    }
}
