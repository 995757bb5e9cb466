use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, Set};

/// A lecturer, linked one-to-one to an authentication principal managed by
/// the external auth service.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "lecturers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub staff_id: String,
    /// Authentication principal id (JWT `sub`).
    pub user_id: i64,
    pub full_name: String,
    pub department: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        staff_id: &str,
        user_id: i64,
        full_name: &str,
        department: &str,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            id: NotSet,
            staff_id: Set(staff_id.to_owned()),
            user_id: Set(user_id),
            full_name: Set(full_name.to_owned()),
            department: Set(department.to_owned()),
        }
        .insert(db)
        .await
    }

    pub async fn get_by_staff_id(
        db: &DatabaseConnection,
        staff_id: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::StaffId.eq(staff_id))
            .one(db)
            .await
    }
}
