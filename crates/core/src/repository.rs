//! Persistence ports. Storage adapters implement these; services consume them.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    PageRequest, Position, PositionId, Question, QuestionFilter, QuestionId, Skill, SkillId,
    SkillRequirement, SkillRequirementId,
};

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A storage-level uniqueness constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait PositionRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Position>>;
    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Position>>;
    async fn find_by_id(&self, id: PositionId) -> RepositoryResult<Option<Position>>;
    async fn find_by_title(&self, title: &str) -> RepositoryResult<Option<Position>>;
    async fn exists_by_id(&self, id: PositionId) -> RepositoryResult<bool>;
    async fn exists_by_title(&self, title: &str) -> RepositoryResult<bool>;
    async fn insert(&self, position: Position) -> RepositoryResult<Position>;
    async fn update(&self, position: Position) -> RepositoryResult<Position>;
    /// Removes the position and, through the schema, its skill requirements.
    async fn delete_by_id(&self, id: PositionId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Skill>>;
    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Skill>>;
    async fn find_by_id(&self, id: SkillId) -> RepositoryResult<Option<Skill>>;
    /// First skill carrying exactly this title.
    async fn find_by_title(&self, title: &str) -> RepositoryResult<Option<Skill>>;
    async fn exists_by_id(&self, id: SkillId) -> RepositoryResult<bool>;
    async fn insert(&self, skill: Skill) -> RepositoryResult<Skill>;
    async fn update(&self, skill: Skill) -> RepositoryResult<Skill>;
    async fn delete_by_id(&self, id: SkillId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>>;
    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Question>>;
    async fn find_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>>;
    async fn exists_by_id(&self, id: QuestionId) -> RepositoryResult<bool>;
    async fn find_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<Vec<Question>>;
    async fn count_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<u64>;
    /// Applies the filter first, then the page when one is given.
    async fn search(
        &self,
        filter: &QuestionFilter,
        page: Option<PageRequest>,
    ) -> RepositoryResult<Vec<Question>>;
    async fn insert(&self, question: Question) -> RepositoryResult<Question>;
    async fn update(&self, question: Question) -> RepositoryResult<Question>;
    async fn delete_by_id(&self, id: QuestionId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait SkillRequirementRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<SkillRequirement>>;
    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<SkillRequirement>>;
    async fn find_by_id(&self, id: SkillRequirementId)
    -> RepositoryResult<Option<SkillRequirement>>;
    async fn exists_by_id(&self, id: SkillRequirementId) -> RepositoryResult<bool>;
    async fn find_by_position_id(
        &self,
        position_id: PositionId,
    ) -> RepositoryResult<Vec<SkillRequirement>>;
    async fn count_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<u64>;
    async fn find_by_position_and_skill(
        &self,
        position_id: PositionId,
        skill_id: SkillId,
    ) -> RepositoryResult<Option<SkillRequirement>>;
    async fn exists_by_position_and_skill(
        &self,
        position_id: PositionId,
        skill_id: SkillId,
    ) -> RepositoryResult<bool>;
    /// Fails with [`RepositoryError::UniqueViolation`] when the pair is taken.
    async fn insert(&self, requirement: SkillRequirement) -> RepositoryResult<SkillRequirement>;
    async fn update(&self, requirement: SkillRequirement) -> RepositoryResult<SkillRequirement>;
    async fn delete_by_id(&self, id: SkillRequirementId) -> RepositoryResult<()>;
}
