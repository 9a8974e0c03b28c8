//! DriveEase rental backend
//!
//! Catálogo de vehículos, motor de filtros de búsqueda y el área de
//! administración (login y dashboard) servidos con Axum.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router as create_app;
pub use state::AppState;
