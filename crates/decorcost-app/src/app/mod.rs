//! Application use cases

pub mod estimation_service;

pub use estimation_service::{
    catalog_repository, estimate_from_response, estimate_from_vision_file, EstimationOptions,
    EstimationOutcome,
};
