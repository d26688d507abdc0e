use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "position")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub title: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::skill_requirement::Entity")]
    SkillRequirement,
}

impl Related<super::skill_requirement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillRequirement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
