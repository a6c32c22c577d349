//! Serializable rows returned by the API.
//!
//! Field names are snake_case to match the Postgres columns; the JSON keys keep
//! the `Title_Case` spelling the gallery front-end reads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Artist {
    #[serde(rename = "Artist_ID")]
    pub artist_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Biography")]
    pub biography: Option<String>,
    #[serde(rename = "Birth_Year")]
    pub birth_year: Option<i32>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
}

/// Artwork row joined with its artist's name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Artwork {
    #[serde(rename = "Artwork_ID")]
    pub artwork_id: i32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Artist_ID")]
    pub artist_id: Option<i32>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Price")]
    pub price: Option<f64>,
    #[serde(rename = "Year_Created")]
    pub year_created: Option<i32>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Image_URL")]
    pub image_url: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Artist_Name")]
    pub artist_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    #[serde(rename = "Customer_ID")]
    pub customer_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sale {
    #[serde(rename = "Sale_ID")]
    pub sale_id: i32,
    #[serde(rename = "Artwork_ID")]
    pub artwork_id: i32,
    #[serde(rename = "Customer_ID")]
    pub customer_id: i32,
    #[serde(rename = "Sale_Date")]
    pub sale_date: NaiveDate,
    #[serde(rename = "Sale_Amount")]
    pub sale_amount: f64,
    #[serde(rename = "Artwork_Title")]
    pub artwork_title: Option<String>,
    #[serde(rename = "Customer_Name")]
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exhibition {
    #[serde(rename = "Exhibition_ID")]
    pub exhibition_id: i32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Start_Date")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "End_Date")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    #[serde(rename = "Event_ID")]
    pub event_id: i32,
    #[serde(rename = "Event_Name")]
    pub event_name: String,
    #[serde(rename = "Event_Date")]
    pub event_date: Option<NaiveDate>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// A paid bill as shown in the billing list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Bill {
    #[serde(rename = "Bill_ID")]
    pub bill_id: i32,
    #[serde(rename = "Sale_ID")]
    pub sale_id: i32,
    #[serde(rename = "Customer_ID")]
    pub customer_id: i32,
    #[serde(rename = "Bill_Date")]
    pub bill_date: NaiveDate,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Customer_Name")]
    pub customer_name: String,
    #[serde(rename = "Customer_Email")]
    pub customer_email: Option<String>,
    #[serde(rename = "Artwork_Title")]
    pub artwork_title: String,
    #[serde(rename = "Status")]
    pub status: String,
}

/// Everything printed on a single invoice.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BillDetail {
    #[serde(rename = "Bill_ID")]
    pub bill_id: i32,
    #[serde(rename = "Sale_ID")]
    pub sale_id: i32,
    #[serde(rename = "Customer_ID")]
    pub customer_id: i32,
    #[serde(rename = "Bill_Date")]
    pub bill_date: NaiveDate,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Customer_Name")]
    pub customer_name: Option<String>,
    #[serde(rename = "Customer_Email")]
    pub customer_email: Option<String>,
    #[serde(rename = "Customer_Phone")]
    pub customer_phone: Option<String>,
    #[serde(rename = "Customer_Address")]
    pub customer_address: Option<String>,
    #[serde(rename = "Artwork_Title")]
    pub artwork_title: Option<String>,
    #[serde(rename = "Artwork_Price")]
    pub artwork_price: Option<f64>,
    #[serde(rename = "Artist_Name")]
    pub artist_name: Option<String>,
    #[serde(rename = "Sale_Date")]
    pub sale_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Submission {
    #[serde(rename = "Submission_ID")]
    pub submission_id: i32,
    #[serde(rename = "Artist_Name")]
    pub artist_name: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Price")]
    pub price: Option<f64>,
    #[serde(rename = "Year_Created")]
    pub year_created: Option<i32>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Image_URL")]
    pub image_url: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Review_Notes")]
    pub review_notes: Option<String>,
    #[serde(rename = "Submitted_Date")]
    pub submitted_date: DateTime<Utc>,
    #[serde(rename = "Review_Date")]
    pub review_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryStats {
    pub total_artists: i64,
    pub total_artworks: i64,
    pub total_sales: i64,
    pub total_revenue: f64,
    pub available_artworks: i64,
}
