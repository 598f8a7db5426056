// Application layer - Layout editing and dashboard rendering use cases
pub mod analytics_repository;
pub mod dashboard_service;
pub mod layout_editor;
pub mod layout_store;
pub mod session;
