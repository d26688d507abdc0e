use tracing::{debug, info};

use super::{ServiceError, ServiceResult};
use crate::domain::{
    PageRequest, Question, QuestionDraft, QuestionFilter, QuestionId, QuestionSearchCriteria,
    SkillId,
};
use crate::repository::{QuestionRepository, SkillRepository};

pub struct QuestionService<S, Q> {
    skills: S,
    questions: Q,
}

impl<S, Q> QuestionService<S, Q>
where
    S: SkillRepository,
    Q: QuestionRepository,
{
    pub fn new(skills: S, questions: Q) -> Self {
        Self { skills, questions }
    }

    pub async fn list(&self, page: Option<PageRequest>) -> ServiceResult<Vec<Question>> {
        let questions = match page {
            Some(page) => self.questions.find_page(page).await?,
            None => self.questions.find_all().await?,
        };
        Ok(questions)
    }

    pub async fn get(&self, id: QuestionId) -> ServiceResult<Option<Question>> {
        Ok(self.questions.find_by_id(id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, draft: QuestionDraft) -> ServiceResult<Question> {
        self.require_skill(draft.skill_id).await?;

        let question = self.questions.insert(Question::new(draft)).await?;
        info!(id = %question.id, skill_id = %question.skill_id, "question created");
        Ok(question)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: QuestionId, draft: QuestionDraft) -> ServiceResult<Question> {
        let existing = self
            .questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Question", id))?;
        self.require_skill(draft.skill_id).await?;

        let question = self.questions.update(existing.replaced_by(draft)).await?;
        info!(%id, "question updated");
        Ok(question)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: QuestionId) -> ServiceResult<bool> {
        if !self.questions.exists_by_id(id).await? {
            return Ok(false);
        }

        self.questions.delete_by_id(id).await?;
        info!(%id, "question deleted");
        Ok(true)
    }

    pub async fn search(
        &self,
        criteria: &QuestionSearchCriteria,
        page: Option<PageRequest>,
    ) -> ServiceResult<Vec<Question>> {
        let filter = QuestionFilter::from_criteria(criteria);
        debug!(predicates = filter.predicates().len(), paged = page.is_some(), "searching questions");

        Ok(self.questions.search(&filter, page).await?)
    }

    async fn require_skill(&self, id: SkillId) -> ServiceResult<()> {
        if self.skills.exists_by_id(id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Skill", id))
        }
    }
}
