//! Application service layer - config and estimation use case

pub mod app;
pub mod config;
