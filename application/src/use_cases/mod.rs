//! Use cases (application services)

pub mod bootstrap;
