//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación:
//! el motor de filtrado, la autenticación y el contenido de la landing.

pub mod auth_provider;
pub mod auth_service;
pub mod content_service;
pub mod dashboard_service;
pub mod filter_engine;
pub mod jwt_service;
pub mod newsletter_service;

pub use filter_engine::{filter_vehicles, FilterOutcome, Predicate};
