pub mod error;
pub mod logger_name;
pub mod severity;
