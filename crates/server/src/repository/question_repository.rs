use async_trait::async_trait;
use question_service_core::domain::{
    Difficulty, PageRequest, Question, QuestionFilter, QuestionId, QuestionPredicate,
    QuestionTitle, SkillId,
};
use question_service_core::repository::{QuestionRepository, RepositoryResult};
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::{db_err, invalid_row, now, parse_id};
use crate::entity::question;

/// Translates a question filter into one SQL condition. The empty filter
/// becomes an empty `Condition::all()`, which matches every row. Title
/// needles are compared against the pre-folded `title_search` column so
/// case folding does not depend on the backend's `LOWER`.
pub fn question_condition(filter: &QuestionFilter) -> Condition {
    filter
        .predicates()
        .iter()
        .fold(Condition::all(), |condition, predicate| {
            condition.add(predicate_expr(predicate))
        })
}

fn predicate_expr(predicate: &QuestionPredicate) -> SimpleExpr {
    match predicate {
        QuestionPredicate::Skill(skill_id) => question::Column::SkillId.eq(skill_id.to_string()),
        QuestionPredicate::TitleContains(needle) => {
            Expr::col((question::Entity, question::Column::TitleSearch)).like(
                LikeExpr::new(format!("%{}%", escape_like(needle))).escape(LIKE_ESCAPE),
            )
        }
        QuestionPredicate::RightAnswerEquals(answer) => {
            question::Column::RightAnswer.eq(answer.as_str())
        }
        QuestionPredicate::Difficulty(difficulty) => {
            question::Column::Difficulty.eq(map_difficulty_code(*difficulty))
        }
    }
}

const LIKE_ESCAPE: char = '\\';

/// Makes `%`, `_` and the escape character match themselves.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn map_difficulty(code: i16) -> RepositoryResult<Difficulty> {
    match code {
        0 => Ok(Difficulty::Easy),
        1 => Ok(Difficulty::Medium),
        2 => Ok(Difficulty::Hard),
        _ => Err(invalid_row("question.difficulty", format!("unknown code {code}"))),
    }
}

fn map_difficulty_code(difficulty: Difficulty) -> i16 {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}

pub struct SeaOrmQuestionRepository<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> SeaOrmQuestionRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    fn ordered() -> Select<question::Entity> {
        question::Entity::find()
            .order_by_asc(question::Column::CreatedAt)
            .order_by_asc(question::Column::Id)
    }

    fn map_model(model: question::Model) -> RepositoryResult<Question> {
        Ok(Question {
            id: parse_id("question.id", &model.id)?,
            skill_id: parse_id("question.skill_id", &model.skill_id)?,
            title: QuestionTitle::new(model.title)
                .map_err(|e| invalid_row("question.title", e))?,
            right_answer: model.right_answer,
            difficulty: map_difficulty(model.difficulty)?,
        })
    }

    fn map_models(models: Vec<question::Model>) -> RepositoryResult<Vec<Question>> {
        models.into_iter().map(Self::map_model).collect()
    }

    fn active_model(question: Question) -> question::ActiveModel {
        question::ActiveModel {
            id: Set(question.id.to_string()),
            skill_id: Set(question.skill_id.to_string()),
            title_search: Set(question.title.folded()),
            title: Set(question.title.into_inner()),
            right_answer: Set(question.right_answer),
            difficulty: Set(map_difficulty_code(question.difficulty)),
            ..Default::default()
        }
    }
}

#[async_trait]
impl<'c, C> QuestionRepository for SeaOrmQuestionRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        let models = Self::ordered().all(self.db).await.map_err(db_err)?;
        Self::map_models(models)
    }

    async fn find_page(&self, page: PageRequest) -> RepositoryResult<Vec<Question>> {
        let models = Self::ordered()
            .offset(page.offset())
            .limit(page.page_size())
            .all(self.db)
            .await
            .map_err(db_err)?;
        Self::map_models(models)
    }

    async fn find_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>> {
        let model = question::Entity::find_by_id(id.to_string())
            .one(self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::map_model).transpose()
    }

    async fn exists_by_id(&self, id: QuestionId) -> RepositoryResult<bool> {
        let count = question::Entity::find_by_id(id.to_string())
            .count(self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn find_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<Vec<Question>> {
        let models = Self::ordered()
            .filter(question::Column::SkillId.eq(skill_id.to_string()))
            .all(self.db)
            .await
            .map_err(db_err)?;
        Self::map_models(models)
    }

    async fn count_by_skill_id(&self, skill_id: SkillId) -> RepositoryResult<u64> {
        question::Entity::find()
            .filter(question::Column::SkillId.eq(skill_id.to_string()))
            .count(self.db)
            .await
            .map_err(db_err)
    }

    async fn search(
        &self,
        filter: &QuestionFilter,
        page: Option<PageRequest>,
    ) -> RepositoryResult<Vec<Question>> {
        let mut query = Self::ordered().filter(question_condition(filter));
        if let Some(page) = page {
            query = query.offset(page.offset()).limit(page.page_size());
        }

        let models = query.all(self.db).await.map_err(db_err)?;
        Self::map_models(models)
    }

    async fn insert(&self, question: Question) -> RepositoryResult<Question> {
        let created_at = now();
        let mut active_model = Self::active_model(question);
        active_model.created_at = Set(created_at);
        active_model.updated_at = Set(created_at);

        let model = active_model.insert(self.db).await.map_err(db_err)?;
        Self::map_model(model)
    }

    async fn update(&self, question: Question) -> RepositoryResult<Question> {
        let mut active_model = Self::active_model(question);
        active_model.updated_at = Set(now());

        let model = active_model.update(self.db).await.map_err(db_err)?;
        Self::map_model(model)
    }

    async fn delete_by_id(&self, id: QuestionId) -> RepositoryResult<()> {
        question::Entity::delete_by_id(id.to_string())
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
