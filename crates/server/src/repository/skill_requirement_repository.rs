use async_trait::async_trait;
use question_service_core::domain::{
    DifficultySplit, PageRequest, PositionId, SkillId, SkillRequirement, SkillRequirementId,
};
use question_service_core::repository::{RepositoryResult, SkillRequirementRepository};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::{db_err, invalid_row, now, parse_id};
use crate::entity::skill_requirement;

pub struct SeaOrmSkillRequirementRepository<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> SeaOrmSkillRequirementRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    fn ordered() -> Select<skill_requirement::Entity> {
        skill_requirement::Entity::find()
            .order_by_asc(skill_requirement::Column::CreatedAt)
            .order_by_asc(skill_requirement::Column::Id)
    }

    fn by_pair(position_id: PositionId, skill_id: SkillId) -> Select<skill_requirement::Entity> {
        skill_requirement::Entity::find()
            .filter(skill_requirement::Column::PositionId.eq(position_id.to_string()))
            .filter(skill_requirement::Column::SkillId.eq(skill_id.to_string()))
    }

    // Rows are re-validated on the way out; a bad split is never handed to callers.
    fn map_model(model: skill_requirement::Model) -> RepositoryResult<SkillRequirement> {
        let split = DifficultySplit::new(
            i32::from(model.easy),
            i32::from(model.medium),
            i32::from(model.hard),
        )
        .map_err(|e| invalid_row("skill_requirement split", e))?;

        Ok(SkillRequirement {
            id: parse_id("skill_requirement.id", &model.id)?,
            position_id: parse_id("skill_requirement.position_id", &model.position_id)?,
            skill_id: parse_id("skill_requirement.skill_id", &model.skill_id)?,
            split,
        })
    }

    fn map_models(models: Vec<skill_requirement::Model>) -> RepositoryResult<Vec<SkillRequirement>> {
        models.into_iter().map(Self::map_model).collect()
    }

    fn active_model(requirement: SkillRequirement) -> skill_requirement::ActiveModel {
        skill_requirement::ActiveModel {
            id: Set(requirement.id.to_string()),
            position_id: Set(requirement.position_id.to_string()),
            skill_id: Set(requirement.skill_id.to_string()),
            easy: Set(i16::from(requirement.split.easy())),
            medium: Set(i16::from(requirement.split.medium())),
            hard: Set(i16::from(requirement.split.hard())),
            ..Default::default()
        }
    }
}

#[async_trait]
impl<'c, C> SkillRequirementRepository for SeaOrmSkillRequirementRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> RepositoryResult<Vec<SkillRequirement>> {
        let models = Self::ordered().all(self.db).await.map_err(db_err)?;
        Self::map_models(models)
    }

    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<SkillRequirement>> {
        let models = Self::ordered()
            .offset(page.offset())
            .limit(page.page_size())
            .all(self.db)
            .await
            .map_err(db_err)?;
        Self::map_models(models)
    }

    async fn find_by_id(
        &self,
        id: SkillRequirementId,
    ) -> RepositoryResult<Option<SkillRequirement>> {
        let model = skill_requirement::Entity::find_by_id(id.to_string())
            .one(self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::map_model).transpose()
    }

    async fn exists_by_id(&self, id: SkillRequirementId) -> RepositoryResult<bool> {
        let count = skill_requirement::Entity::find_by_id(id.to_string())
            .count(self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn find_by_position_id(
        &self,
        position_id: PositionId,
    ) -> RepositoryResult<Vec<SkillRequirement>> {
        let models = Self::ordered()
            .filter(skill_requirement::Column::PositionId.eq(position_id.to_string()))
            .all(self.db)
            .await
            .map_err(db_err)?;
        Self::map_models(models)
    }

    async fn count_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<u64> {
        skill_requirement::Entity::find()
            .filter(skill_requirement::Column::SkillId.eq(skill_id.to_string()))
            .count(self.db)
            .await
            .map_err(db_err)
    }

    async fn find_by_position_and_skill(
        &self,
        position_id: PositionId,
        skill_id: SkillId,
    ) -> RepositoryResult<Option<SkillRequirement>> {
        let model = Self::by_pair(position_id, skill_id)
            .one(self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::map_model).transpose()
    }

    async fn exists_by_position_and_skill(
        &self,
        position_id: PositionId,
        skill_id: SkillId,
    ) -> RepositoryResult<bool> {
        let count = Self::by_pair(position_id, skill_id)
            .count(self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert(&self, requirement: SkillRequirement) -> RepositoryResult<SkillRequirement> {
        let created_at = now();
        let mut active_model = Self::active_model(requirement);
        active_model.created_at = Set(created_at);
        active_model.updated_at = Set(created_at);

        let model = active_model.insert(self.db).await.map_err(db_err)?;
        Self::map_model(model)
    }

    async fn update(&self, requirement: SkillRequirement) -> RepositoryResult<SkillRequirement> {
        let mut active_model = Self::active_model(requirement);
        active_model.updated_at = Set(now());

        let model = active_model.update(self.db).await.map_err(db_err)?;
        Self::map_model(model)
    }

    async fn delete_by_id(&self, id: SkillRequirementId) -> RepositoryResult<()> {
        skill_requirement::Entity::delete_by_id(id.to_string())
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
