use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Position::Table)
                    .if_not_exists()
                    .col(string_len(Position::Id, 36).primary_key())
                    .col(string_len(Position::Title, 100).unique_key())
                    .col(timestamp(Position::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Position::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Skill::Table)
                    .if_not_exists()
                    .col(string_len(Skill::Id, 36).primary_key())
                    .col(string_len(Skill::Title, 255))
                    .col(timestamp(Skill::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Skill::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(string_len(Question::Id, 36).primary_key())
                    .col(string_len(Question::SkillId, 36))
                    .col(text(Question::Title))
                    .col(text(Question::TitleSearch))
                    .col(text_null(Question::RightAnswer))
                    // 0=easy, 1=medium, 2=hard
                    .col(
                        small_integer(Question::Difficulty)
                            .check(Expr::col(Question::Difficulty).between(0, 2)),
                    )
                    .col(timestamp(Question::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Question::UpdatedAt).default(Expr::current_timestamp()))
                    // Skills with questions are never removed.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-questions-skill_id")
                            .from(Question::Table, Question::SkillId)
                            .to(Skill::Table, Skill::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SkillRequirement::Table)
                    .if_not_exists()
                    .col(string_len(SkillRequirement::Id, 36).primary_key())
                    .col(string_len(SkillRequirement::PositionId, 36))
                    .col(string_len(SkillRequirement::SkillId, 36))
                    .col(
                        small_integer(SkillRequirement::Easy)
                            .check(Expr::col(SkillRequirement::Easy).between(0, 100)),
                    )
                    .col(
                        small_integer(SkillRequirement::Medium)
                            .check(Expr::col(SkillRequirement::Medium).between(0, 100)),
                    )
                    .col(
                        small_integer(SkillRequirement::Hard)
                            .check(Expr::col(SkillRequirement::Hard).between(0, 100)),
                    )
                    .check(
                        Expr::expr(
                            Expr::col(SkillRequirement::Easy)
                                .add(Expr::col(SkillRequirement::Medium))
                                .add(Expr::col(SkillRequirement::Hard)),
                        )
                        .eq(100),
                    )
                    .col(timestamp(SkillRequirement::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(SkillRequirement::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-skill_requirements-position_id")
                            .from(SkillRequirement::Table, SkillRequirement::PositionId)
                            .to(Position::Table, Position::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-skill_requirements-skill_id")
                            .from(SkillRequirement::Table, SkillRequirement::SkillId)
                            .to(Skill::Table, Skill::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_questions_skill_id")
                    .table(Question::Table)
                    .col(Question::SkillId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_questions_difficulty")
                    .table(Question::Table)
                    .col(Question::Difficulty)
                    .to_owned(),
            )
            .await?;

        // Backstop for the service-level pair check under concurrent inserts.
        manager
            .create_index(
                Index::create()
                    .name("uq_skill_requirements_position_id_skill_id")
                    .table(SkillRequirement::Table)
                    .col(SkillRequirement::PositionId)
                    .col(SkillRequirement::SkillId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SkillRequirement::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Skill::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Position::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Position {
    Table,
    Id,
    Title,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Skill {
    Table,
    Id,
    Title,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Question {
    Table,
    Id,
    SkillId,
    Title,
    TitleSearch,
    RightAnswer,
    Difficulty,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SkillRequirement {
    Table,
    Id,
    PositionId,
    SkillId,
    Easy,
    Medium,
    Hard,
    CreatedAt,
    UpdatedAt,
}
