use async_trait::async_trait;
use question_service_core::domain::{PageRequest, Position, PositionId, PositionTitle};
use question_service_core::repository::{PositionRepository, RepositoryResult};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::{db_err, invalid_row, now, parse_id};
use crate::entity::position;

pub struct SeaOrmPositionRepository<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> SeaOrmPositionRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    fn ordered() -> Select<position::Entity> {
        position::Entity::find()
            .order_by_asc(position::Column::CreatedAt)
            .order_by_asc(position::Column::Id)
    }

    fn map_model(model: position::Model) -> RepositoryResult<Position> {
        Ok(Position {
            id: parse_id("position.id", &model.id)?,
            title: PositionTitle::new(model.title)
                .map_err(|e| invalid_row("position.title", e))?,
        })
    }

    fn map_models(models: Vec<position::Model>) -> RepositoryResult<Vec<Position>> {
        models.into_iter().map(Self::map_model).collect()
    }
}

#[async_trait]
impl<'c, C> PositionRepository for SeaOrmPositionRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> RepositoryResult<Vec<Position>> {
        let models = Self::ordered().all(self.db).await.map_err(db_err)?;
        Self::map_models(models)
    }

    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Position>> {
        let models = Self::ordered()
            .offset(page.offset())
            .limit(page.page_size())
            .all(self.db)
            .await
            .map_err(db_err)?;
        Self::map_models(models)
    }

    async fn find_by_id(&self, id: PositionId) -> RepositoryResult<Option<Position>> {
        let model = position::Entity::find_by_id(id.to_string())
            .one(self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::map_model).transpose()
    }

    async fn find_by_title(&self, title: &str) -> RepositoryResult<Option<Position>> {
        let model = position::Entity::find()
            .filter(position::Column::Title.eq(title))
            .one(self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::map_model).transpose()
    }

    async fn exists_by_id(&self, id: PositionId) -> RepositoryResult<bool> {
        let count = position::Entity::find_by_id(id.to_string())
            .count(self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn exists_by_title(&self, title: &str) -> RepositoryResult<bool> {
        let count = position::Entity::find()
            .filter(position::Column::Title.eq(title))
            .count(self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert(&self, position: Position) -> RepositoryResult<Position> {
        let created_at = now();
        let active_model = position::ActiveModel {
            id: Set(position.id.to_string()),
            title: Set(position.title.into_inner()),
            created_at: Set(created_at),
            updated_at: Set(created_at),
        };

        let model = active_model.insert(self.db).await.map_err(db_err)?;
        Self::map_model(model)
    }

    async fn update(&self, position: Position) -> RepositoryResult<Position> {
        let active_model = position::ActiveModel {
            id: Set(position.id.to_string()),
            title: Set(position.title.into_inner()),
            updated_at: Set(now()),
            ..Default::default()
        };

        let model = active_model.update(self.db).await.map_err(db_err)?;
        Self::map_model(model)
    }

    async fn delete_by_id(&self, id: PositionId) -> RepositoryResult<()> {
        position::Entity::delete_by_id(id.to_string())
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
