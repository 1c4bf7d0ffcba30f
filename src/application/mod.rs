// Application layer - Loading, binding and UI actions
pub mod binder;
pub mod dashboard_service;
pub mod mock_data;
pub mod resource_source;
pub mod sample_data;
pub mod table_populator;
pub mod ui_actions;
