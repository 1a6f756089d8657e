// Domain layer: pure business types and classification logic
pub mod models;
pub mod services;
