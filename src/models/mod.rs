pub mod city;
pub mod geocode;
pub mod user;

pub use city::{City, NewCity, Position};
pub use geocode::{GeocodedPlace, ReverseGeocodeResponse};
