use sea_orm::entity::prelude::*;

/// Review state of a submission. Only `Pending` may be reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SubmissionStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Approved")]
    Approved,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "artwork_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub submission_id: i32,
    pub artist_name: String,
    pub title: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub year_created: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: SubmissionStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_notes: Option<String>,
    pub submitted_date: DateTimeWithTimeZone,
    pub review_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
