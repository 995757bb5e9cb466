use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, QueryOrder, Set};

/// A course for which attendance is taken. The lecturer reference is
/// optional; deleting a lecturer clears it rather than cascading.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_code: String,
    pub course_title: String,
    pub lecturer_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecturer::Entity",
        from = "Column::LecturerId",
        to = "super::lecturer::Column::Id"
    )]
    Lecturer,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::lecturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        course_code: &str,
        course_title: &str,
        lecturer_id: Option<i64>,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            course_code: Set(course_code.to_owned()),
            course_title: Set(course_title.to_owned()),
            lecturer_id: Set(lecturer_id),
        }
        .insert(db)
        .await
    }

    pub async fn get_by_code(
        db: &DatabaseConnection,
        course_code: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(course_code).one(db).await
    }

    /// All courses with their lecturer (if any), ordered by course code.
    pub async fn all_with_lecturer(
        db: &DatabaseConnection,
    ) -> Result<Vec<(Self, Option<super::lecturer::Model>)>, DbErr> {
        Entity::find()
            .find_also_related(super::lecturer::Entity)
            .order_by_asc(Column::CourseCode)
            .all(db)
            .await
    }
}
