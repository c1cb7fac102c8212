pub mod city_api;
pub mod geocode;

pub use city_api::CityApi;
pub use geocode::reverse_geocode;
