// Domain layer - Dashboard data and view models
pub mod document;
pub mod simulation;
pub mod summary;
