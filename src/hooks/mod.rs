pub mod use_geolocation;
pub mod use_url_position;

pub use use_geolocation::use_geolocation;
pub use use_url_position::{use_url_position, UrlPosition};
