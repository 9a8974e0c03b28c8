//! Contenido de la landing
//!
//! Coches destacados, testimonios y ventajas del servicio.

use serde::Serialize;

/// Especificaciones de un coche destacado
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedSpecs {
    pub power: String,
    pub acceleration: String,
    pub range: String,
    pub passengers: u32,
}

/// Coche destacado; referencia un vehículo del catálogo por id
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedCar {
    pub vehicle_id: u32,
    pub name: String,
    pub category: String,
    pub price_per_day: f64,
    pub image_url: String,
    pub highlights: Vec<String>,
    pub specs: FeaturedSpecs,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image_url: String,
    pub content: String,
    pub rating: u8,
}

/// Ventaja de la sección "Why Choose Us"
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Todo el contenido de la landing en una sola respuesta
#[derive(Debug, Clone, Serialize)]
pub struct LandingContent {
    pub featured: Vec<FeaturedCar>,
    pub testimonials: Vec<Testimonial>,
    pub highlights: Vec<Highlight>,
    pub popular_locations: Vec<String>,
}
