use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordSaleRequest {
    pub artwork_id: i32,
    pub customer_id: i32,
    /// Defaults to today.
    pub sale_date: Option<NaiveDate>,
    pub sale_amount: f64,
}
