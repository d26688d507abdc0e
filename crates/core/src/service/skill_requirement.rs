use tracing::{info, warn};

use super::{ServiceError, ServiceResult, conflict_on_unique};
use crate::domain::{
    DifficultySplit, PageRequest, PositionId, SkillId, SkillRequirement, SkillRequirementId,
};
use crate::repository::{PositionRepository, SkillRepository, SkillRequirementRepository};

const DUPLICATE_PAIR: &str = "skill requirement for this position and skill already exists";

/// Raw request values. Percentages stay as received so the service can
/// order its checks: references, then uniqueness, then arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRequirementInput {
    pub position_id: PositionId,
    pub skill_id: SkillId,
    pub easy: i32,
    pub medium: i32,
    pub hard: i32,
}

impl SkillRequirementInput {
    fn split(&self) -> ServiceResult<DifficultySplit> {
        Ok(DifficultySplit::new(self.easy, self.medium, self.hard)?)
    }
}

pub struct SkillRequirementService<P, S, R> {
    positions: P,
    skills: S,
    requirements: R,
}

impl<P, S, R> SkillRequirementService<P, S, R>
where
    P: PositionRepository,
    S: SkillRepository,
    R: SkillRequirementRepository,
{
    pub fn new(positions: P, skills: S, requirements: R) -> Self {
        Self {
            positions,
            skills,
            requirements,
        }
    }

    pub async fn list(&self, page: Option<PageRequest>) -> ServiceResult<Vec<SkillRequirement>> {
        let requirements = match page {
            Some(page) => self.requirements.find_page(page).await?,
            None => self.requirements.find_all().await?,
        };
        Ok(requirements)
    }

    pub async fn get(&self, id: SkillRequirementId) -> ServiceResult<Option<SkillRequirement>> {
        Ok(self.requirements.find_by_id(id).await?)
    }

    /// No existence check on the position: an unknown id yields an empty list.
    pub async fn list_by_position(
        &self,
        position_id: PositionId,
    ) -> ServiceResult<Vec<SkillRequirement>> {
        Ok(self.requirements.find_by_position_id(position_id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, input: SkillRequirementInput) -> ServiceResult<SkillRequirement> {
        self.require_position(input.position_id).await?;
        self.require_skill(input.skill_id).await?;

        if self
            .requirements
            .exists_by_position_and_skill(input.position_id, input.skill_id)
            .await?
        {
            warn!(
                position_id = %input.position_id,
                skill_id = %input.skill_id,
                "skill requirement pair already taken"
            );
            return Err(ServiceError::Conflict(DUPLICATE_PAIR.to_string()));
        }

        let requirement = SkillRequirement::new(input.position_id, input.skill_id, input.split()?);
        let saved = self
            .requirements
            .insert(requirement)
            .await
            .map_err(conflict_on_unique(DUPLICATE_PAIR))?;

        info!(id = %saved.id, "skill requirement created");
        Ok(saved)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(
        &self,
        id: SkillRequirementId,
        input: SkillRequirementInput,
    ) -> ServiceResult<SkillRequirement> {
        let existing = self
            .requirements
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("SkillRequirement", id))?;

        self.require_position(input.position_id).await?;
        self.require_skill(input.skill_id).await?;

        let pair_changed = existing.pair() != (input.position_id, input.skill_id);
        if pair_changed
            && self
                .requirements
                .exists_by_position_and_skill(input.position_id, input.skill_id)
                .await?
        {
            warn!(
                %id,
                position_id = %input.position_id,
                skill_id = %input.skill_id,
                "skill requirement pair already taken"
            );
            return Err(ServiceError::Conflict(DUPLICATE_PAIR.to_string()));
        }

        let updated = existing.replaced_by(input.position_id, input.skill_id, input.split()?);
        let saved = self
            .requirements
            .update(updated)
            .await
            .map_err(conflict_on_unique(DUPLICATE_PAIR))?;

        info!(%id, pair_changed, "skill requirement updated");
        Ok(saved)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: SkillRequirementId) -> ServiceResult<bool> {
        if !self.requirements.exists_by_id(id).await? {
            return Ok(false);
        }

        self.requirements.delete_by_id(id).await?;
        info!(%id, "skill requirement deleted");
        Ok(true)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_by_position_and_skill(
        &self,
        position_id: PositionId,
        skill_id: SkillId,
    ) -> ServiceResult<bool> {
        let Some(requirement) = self
            .requirements
            .find_by_position_and_skill(position_id, skill_id)
            .await?
        else {
            return Ok(false);
        };

        self.requirements.delete_by_id(requirement.id).await?;
        info!(id = %requirement.id, "skill requirement deleted");
        Ok(true)
    }

    async fn require_position(&self, id: PositionId) -> ServiceResult<()> {
        self.positions
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Position", id))
    }

    async fn require_skill(&self, id: SkillId) -> ServiceResult<()> {
        self.skills
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Skill", id))
    }
}
