pub mod admin_controller;
pub mod auth_controller;
pub mod vehicle_controller;
