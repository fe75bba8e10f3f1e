pub mod applied;
pub mod logging_settings;
pub mod output_target;
