//! Wires the core services onto sea-orm adapters for one connection.
//!
//! Pass the pool for reads and a `DatabaseTransaction` for writes.

use question_service_core::service::{
    PositionService, QuestionService, SkillRequirementService, SkillService,
};
use sea_orm::ConnectionTrait;

use crate::repository::{
    SeaOrmPositionRepository, SeaOrmQuestionRepository, SeaOrmSkillRepository,
    SeaOrmSkillRequirementRepository,
};

pub type Positions<'c, C> = PositionService<SeaOrmPositionRepository<'c, C>>;
pub type Skills<'c, C> = SkillService<
    SeaOrmSkillRepository<'c, C>,
    SeaOrmQuestionRepository<'c, C>,
    SeaOrmSkillRequirementRepository<'c, C>,
>;
pub type Questions<'c, C> =
    QuestionService<SeaOrmSkillRepository<'c, C>, SeaOrmQuestionRepository<'c, C>>;
pub type SkillRequirements<'c, C> = SkillRequirementService<
    SeaOrmPositionRepository<'c, C>,
    SeaOrmSkillRepository<'c, C>,
    SeaOrmSkillRequirementRepository<'c, C>,
>;

pub fn positions<C>(db: &C) -> Positions<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    PositionService::new(SeaOrmPositionRepository::new(db))
}

pub fn skills<C>(db: &C) -> Skills<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    SkillService::new(
        SeaOrmSkillRepository::new(db),
        SeaOrmQuestionRepository::new(db),
        SeaOrmSkillRequirementRepository::new(db),
    )
}

pub fn questions<C>(db: &C) -> Questions<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    QuestionService::new(SeaOrmSkillRepository::new(db), SeaOrmQuestionRepository::new(db))
}

pub fn skill_requirements<C>(db: &C) -> SkillRequirements<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    SkillRequirementService::new(
        SeaOrmPositionRepository::new(db),
        SeaOrmSkillRepository::new(db),
        SeaOrmSkillRequirementRepository::new(db),
    )
}
