pub mod artists;
pub mod auth;
pub mod customers;
pub mod sales;
pub mod submissions;
