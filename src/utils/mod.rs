pub mod format;

pub use format::{format_date, format_date_short};
