use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel, QueryOrder, Set};

/// A student known to the institution. Provisioned administratively (single
/// entry or batch import) and immutable afterwards except for corrections.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Matric number, the stable institutional identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub matric_no: String,
    pub full_name: String,
    pub gender: String,
    pub department: String,
    /// Where the rendered QR image for this student lives. Populated by the
    /// post-creation step; rendering itself happens in a separate workflow.
    pub qr_code_path: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a student and runs the explicit post-creation QR step.
    pub async fn create(
        db: &DatabaseConnection,
        matric_no: &str,
        full_name: &str,
        gender: &str,
        department: &str,
    ) -> Result<Self, DbErr> {
        let row = ActiveModel {
            matric_no: Set(matric_no.to_owned()),
            full_name: Set(full_name.to_owned()),
            gender: Set(gender.to_owned()),
            department: Set(department.to_owned()),
            qr_code_path: Set(None),
        }
        .insert(db)
        .await?;

        row.attach_qr_code(db).await
    }

    /// Post-creation step: records the target path for this student's QR
    /// image. Invoked synchronously by the creation workflow rather than
    /// through a save hook, so the core stays testable without the renderer.
    pub async fn attach_qr_code(self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        let path = format!("qr_codes/qr_code-{}.png", self.matric_no);
        let mut active = self.into_active_model();
        active.qr_code_path = Set(Some(path));
        active.update(db).await
    }

    /// Create-or-update keyed by matric number. This is the batch-import
    /// semantics: repeated imports correct names and departments without
    /// duplicating students or touching their attendance history.
    pub async fn upsert(
        db: &DatabaseConnection,
        matric_no: &str,
        full_name: &str,
        gender: &str,
        department: &str,
    ) -> Result<Self, DbErr> {
        match Entity::find_by_id(matric_no).one(db).await? {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.full_name = Set(full_name.to_owned());
                active.gender = Set(gender.to_owned());
                active.department = Set(department.to_owned());
                active.update(db).await
            }
            None => Self::create(db, matric_no, full_name, gender, department).await,
        }
    }

    pub async fn get_by_matric_no(
        db: &DatabaseConnection,
        matric_no: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(matric_no).one(db).await
    }

    /// Full roster, ordered by display name. Reports iterate this.
    pub async fn all_by_name(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::FullName).all(db).await
    }

    /// The text encoded into this student's QR code.
    pub fn qr_payload(&self) -> String {
        util::qr::student_payload(&self.matric_no, &self.full_name, &self.gender)
    }
}
