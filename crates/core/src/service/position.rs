use tracing::{info, warn};

use super::{ServiceError, ServiceResult, conflict_on_unique};
use crate::domain::{PageRequest, Position, PositionId, PositionTitle};
use crate::repository::PositionRepository;

const DUPLICATE_TITLE: &str = "position with this title already exists";

pub struct PositionService<P> {
    positions: P,
}

impl<P: PositionRepository> PositionService<P> {
    pub fn new(positions: P) -> Self {
        Self { positions }
    }

    pub async fn list(&self, page: Option<PageRequest>) -> ServiceResult<Vec<Position>> {
        let positions = match page {
            Some(page) => self.positions.find_page(page).await?,
            None => self.positions.find_all().await?,
        };
        Ok(positions)
    }

    pub async fn get(&self, id: PositionId) -> ServiceResult<Option<Position>> {
        Ok(self.positions.find_by_id(id).await?)
    }

    pub async fn exists_by_title(&self, title: &str) -> ServiceResult<bool> {
        Ok(self.positions.exists_by_title(title).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, title: PositionTitle) -> ServiceResult<Position> {
        if self.positions.exists_by_title(title.as_str()).await? {
            warn!(title = %title, "position title already taken");
            return Err(ServiceError::Conflict(DUPLICATE_TITLE.to_string()));
        }

        let position = self
            .positions
            .insert(Position::new(title))
            .await
            .map_err(conflict_on_unique(DUPLICATE_TITLE))?;
        info!(id = %position.id, "position created");
        Ok(position)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: PositionId, title: PositionTitle) -> ServiceResult<Position> {
        let existing = self
            .positions
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Position", id))?;

        let taken_by_other = self
            .positions
            .find_by_title(title.as_str())
            .await?
            .is_some_and(|holder| holder.id != id);
        if taken_by_other {
            warn!(%id, title = %title, "position title already taken");
            return Err(ServiceError::Conflict(DUPLICATE_TITLE.to_string()));
        }

        let position = self
            .positions
            .update(existing.with_title(title))
            .await
            .map_err(conflict_on_unique(DUPLICATE_TITLE))?;
        info!(%id, "position updated");
        Ok(position)
    }

    /// Skill requirements of the position are removed with it.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: PositionId) -> ServiceResult<bool> {
        if !self.positions.exists_by_id(id).await? {
            return Ok(false);
        }

        self.positions.delete_by_id(id).await?;
        info!(%id, "position deleted");
        Ok(true)
    }
}
