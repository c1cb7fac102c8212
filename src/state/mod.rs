pub mod auth;
pub mod cities;

pub use auth::{use_auth, AuthProvider};
pub use cities::{use_cities, CitiesProvider};
