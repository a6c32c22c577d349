pub mod artists;
pub mod artwork_submissions;
pub mod artworks;
pub mod customers;
pub mod users;

pub use artists::Entity as Artists;
pub use artwork_submissions::Entity as ArtworkSubmissions;
pub use artworks::Entity as Artworks;
pub use customers::Entity as Customers;
pub use users::Entity as Users;
