// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_source;
pub mod html_renderer;
pub mod http_source;
pub mod site_exporter;
