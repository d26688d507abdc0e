use tracing::info;

use super::{ServiceError, ServiceResult};
use crate::domain::{PageRequest, Question, Skill, SkillId, SkillTitle};
use crate::repository::{QuestionRepository, SkillRepository, SkillRequirementRepository};

/// Result of a skill deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillDeleteOutcome {
    Deleted,
    NotFound,
    /// At least one question still references the skill; nothing was removed.
    HasQuestions,
    /// Positions still require the skill; nothing was removed.
    HasRequirements,
}

pub struct SkillService<S, Q, R> {
    skills: S,
    questions: Q,
    requirements: R,
}

impl<S, Q, R> SkillService<S, Q, R>
where
    S: SkillRepository,
    Q: QuestionRepository,
    R: SkillRequirementRepository,
{
    pub fn new(skills: S, questions: Q, requirements: R) -> Self {
        Self {
            skills,
            questions,
            requirements,
        }
    }

    pub async fn list(&self, page: Option<PageRequest>) -> ServiceResult<Vec<Skill>> {
        let skills = match page {
            Some(page) => self.skills.find_page(page).await?,
            None => self.skills.find_all().await?,
        };
        Ok(skills)
    }

    pub async fn get(&self, id: SkillId) -> ServiceResult<Option<Skill>> {
        Ok(self.skills.find_by_id(id).await?)
    }

    pub async fn get_by_title(&self, title: &str) -> ServiceResult<Option<Skill>> {
        Ok(self.skills.find_by_title(title).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, title: SkillTitle) -> ServiceResult<Skill> {
        let skill = self.skills.insert(Skill::new(title)).await?;
        info!(id = %skill.id, "skill created");
        Ok(skill)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: SkillId, title: SkillTitle) -> ServiceResult<Skill> {
        let existing = self
            .skills
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Skill", id))?;

        let skill = self.skills.update(existing.with_title(title)).await?;
        info!(%id, "skill updated");
        Ok(skill)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: SkillId) -> ServiceResult<SkillDeleteOutcome> {
        if !self.skills.exists_by_id(id).await? {
            return Ok(SkillDeleteOutcome::NotFound);
        }

        let question_count = self.questions.count_by_skill_id(id).await?;
        if question_count > 0 {
            info!(%id, question_count, "skill deletion blocked by questions");
            return Ok(SkillDeleteOutcome::HasQuestions);
        }

        let requirement_count = self.requirements.count_by_skill_id(id).await?;
        if requirement_count > 0 {
            info!(%id, requirement_count, "skill deletion blocked by skill requirements");
            return Ok(SkillDeleteOutcome::HasRequirements);
        }

        self.skills.delete_by_id(id).await?;
        info!(%id, "skill deleted");
        Ok(SkillDeleteOutcome::Deleted)
    }

    /// `None` when the skill itself does not exist.
    pub async fn questions_of_skill(&self, id: SkillId) -> ServiceResult<Option<Vec<Question>>> {
        if !self.skills.exists_by_id(id).await? {
            return Ok(None);
        }

        Ok(Some(self.questions.find_by_skill_id(id).await?))
    }
}
