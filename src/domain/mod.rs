// Domain layer - Layout model and dashboard view types
pub mod analytics;
pub mod assistant;
pub mod dashboard;
pub mod layout;
pub mod widget;
