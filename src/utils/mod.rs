pub mod colors;
pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod time;

pub use formatting::format_hours;
