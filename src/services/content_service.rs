//! Contenido estático de la landing
//!
//! Testimonios, ventajas, ubicaciones populares y la selección de coches
//! destacados. Los destacados apuntan a vehículos del catálogo para que
//! precio, nombre e imagen no se desincronicen.

use lazy_static::lazy_static;

use crate::models::content::{FeaturedCar, FeaturedSpecs, Highlight, LandingContent, Testimonial};
use crate::repositories::vehicle_repository::VehicleRepository;

/// Datos propios de cada destacado (lo que no está en el catálogo)
struct FeaturedEntry {
    vehicle_id: u32,
    highlights: [&'static str; 3],
    power: &'static str,
    acceleration: &'static str,
    range: &'static str,
}

const FEATURED: [FeaturedEntry; 3] = [
    FeaturedEntry {
        vehicle_id: 1,
        highlights: ["Auto Pilot", "350mi Range", "Supercharging"],
        power: "450hp",
        acceleration: "3.1s",
        range: "350mi",
    },
    FeaturedEntry {
        vehicle_id: 2,
        highlights: ["503 HP", "0-60 in 3.8s", "Carbon Fiber"],
        power: "503hp",
        acceleration: "3.8s",
        range: "400mi",
    },
    FeaturedEntry {
        vehicle_id: 3,
        highlights: ["Luxury Interior", "Off-road Ready", "Premium Sound"],
        power: "395hp",
        acceleration: "5.5s",
        range: "450mi",
    },
];

pub const POPULAR_LOCATIONS: [&str; 5] = [
    "New York City Airport",
    "Los Angeles Downtown",
    "Chicago O'Hare",
    "Miami Beach",
    "Las Vegas Strip",
];

lazy_static! {
    static ref TESTIMONIALS: Vec<Testimonial> = vec![
        Testimonial {
            id: 1,
            name: "Sarah Johnson".to_string(),
            role: "Business Traveler".to_string(),
            image_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80".to_string(),
            content: "The service was exceptional! The car was clean, well-maintained, and the booking process was seamless.".to_string(),
            rating: 5,
        },
        Testimonial {
            id: 2,
            name: "Michael Chen".to_string(),
            role: "Tourist".to_string(),
            image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80".to_string(),
            content: "Best car rental experience I've had. The staff was friendly and the vehicle exceeded my expectations.".to_string(),
            rating: 5,
        },
        Testimonial {
            id: 3,
            name: "Emily Davis".to_string(),
            role: "Local Resident".to_string(),
            image_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80".to_string(),
            content: "Competitive prices and great selection of vehicles. Will definitely use their service again!".to_string(),
            rating: 5,
        },
    ];

    static ref HIGHLIGHTS: Vec<Highlight> = vec![
        Highlight {
            icon: "shield".to_string(),
            title: "Safe & Secure".to_string(),
            description: "All our vehicles are regularly maintained and fully insured for your peace of mind.".to_string(),
        },
        Highlight {
            icon: "clock".to_string(),
            title: "24/7 Availability".to_string(),
            description: "Book your vehicle any time, day or night, with our easy-to-use online system.".to_string(),
        },
        Highlight {
            icon: "headphones".to_string(),
            title: "Customer Support".to_string(),
            description: "Our dedicated support team is always ready to assist you with any questions.".to_string(),
        },
        Highlight {
            icon: "award".to_string(),
            title: "Best Price Guarantee".to_string(),
            description: "We offer competitive rates and match any comparable price in the market.".to_string(),
        },
    ];
}

pub fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS.clone()
}

pub fn highlights() -> Vec<Highlight> {
    HIGHLIGHTS.clone()
}

/// Destacados presentes en el catálogo, en el orden de la sección
pub fn featured_cars(catalog: &VehicleRepository) -> Vec<FeaturedCar> {
    FEATURED
        .iter()
        .filter_map(|entry| {
            let vehicle = catalog.find_by_id(entry.vehicle_id)?;
            Some(FeaturedCar {
                vehicle_id: vehicle.id,
                name: vehicle.name.clone(),
                category: vehicle.category.label().to_string(),
                price_per_day: vehicle.price_per_day,
                image_url: vehicle.image_url.clone(),
                highlights: entry.highlights.iter().map(|h| h.to_string()).collect(),
                specs: FeaturedSpecs {
                    power: entry.power.to_string(),
                    acceleration: entry.acceleration.to_string(),
                    range: entry.range.to_string(),
                    passengers: vehicle.passenger_capacity,
                },
            })
        })
        .collect()
}

/// Sugerencias del desplegable de ubicación (subcadena, sin mayúsculas)
pub fn suggest_locations(query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    POPULAR_LOCATIONS
        .iter()
        .filter(|loc| loc.to_lowercase().contains(&needle))
        .map(|loc| loc.to_string())
        .collect()
}

pub fn landing_content(catalog: &VehicleRepository) -> LandingContent {
    LandingContent {
        featured: featured_cars(catalog),
        testimonials: testimonials(),
        highlights: highlights(),
        popular_locations: suggest_locations(""),
    }
}
