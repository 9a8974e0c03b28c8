//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del catálogo, de la búsqueda,
//! del contenido de la landing y de la sesión de administración.

pub mod auth;
pub mod content;
pub mod search;
pub mod vehicle;
