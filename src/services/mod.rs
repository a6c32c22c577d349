pub mod artist_service;
pub mod auth_service;
pub mod catalog_service;
pub mod customer_service;
pub mod sales_service;
pub mod submission_service;
