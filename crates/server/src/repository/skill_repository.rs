use async_trait::async_trait;
use question_service_core::domain::{PageRequest, Skill, SkillId, SkillTitle};
use question_service_core::repository::{RepositoryResult, SkillRepository};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::{db_err, invalid_row, now, parse_id};
use crate::entity::skill;

pub struct SeaOrmSkillRepository<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> SeaOrmSkillRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    fn ordered() -> Select<skill::Entity> {
        skill::Entity::find()
            .order_by_asc(skill::Column::CreatedAt)
            .order_by_asc(skill::Column::Id)
    }

    fn map_model(model: skill::Model) -> RepositoryResult<Skill> {
        Ok(Skill {
            id: parse_id("skill.id", &model.id)?,
            title: SkillTitle::new(model.title).map_err(|e| invalid_row("skill.title", e))?,
        })
    }

    fn map_models(models: Vec<skill::Model>) -> RepositoryResult<Vec<Skill>> {
        models.into_iter().map(Self::map_model).collect()
    }
}

#[async_trait]
impl<'c, C> SkillRepository for SeaOrmSkillRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> RepositoryResult<Vec<Skill>> {
        let models = Self::ordered().all(self.db).await.map_err(db_err)?;
        Self::map_models(models)
    }

    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Skill>> {
        let models = Self::ordered()
            .offset(page.offset())
            .limit(page.page_size())
            .all(self.db)
            .await
            .map_err(db_err)?;
        Self::map_models(models)
    }

    async fn find_by_id(&self, id: SkillId) -> RepositoryResult<Option<Skill>> {
        let model = skill::Entity::find_by_id(id.to_string())
            .one(self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::map_model).transpose()
    }

    async fn find_by_title(&self, title: &str) -> RepositoryResult<Option<Skill>> {
        let model = Self::ordered()
            .filter(skill::Column::Title.eq(title))
            .one(self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::map_model).transpose()
    }

    async fn exists_by_id(&self, id: SkillId) -> RepositoryResult<bool> {
        let count = skill::Entity::find_by_id(id.to_string())
            .count(self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert(&self, skill: Skill) -> RepositoryResult<Skill> {
        let created_at = now();
        let active_model = skill::ActiveModel {
            id: Set(skill.id.to_string()),
            title: Set(skill.title.into_inner()),
            created_at: Set(created_at),
            updated_at: Set(created_at),
        };

        let model = active_model.insert(self.db).await.map_err(db_err)?;
        Self::map_model(model)
    }

    async fn update(&self, skill: Skill) -> RepositoryResult<Skill> {
        let active_model = skill::ActiveModel {
            id: Set(skill.id.to_string()),
            title: Set(skill.title.into_inner()),
            updated_at: Set(now()),
            ..Default::default()
        };

        let model = active_model.update(self.db).await.map_err(db_err)?;
        Self::map_model(model)
    }

    async fn delete_by_id(&self, id: SkillId) -> RepositoryResult<()> {
        skill::Entity::delete_by_id(id.to_string())
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
