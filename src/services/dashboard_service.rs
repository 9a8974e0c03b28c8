//! Datos del dashboard de administración
//!
//! Las cifras de flota salen del catálogo; reservas, clientes e ingresos no
//! tienen fuente todavía y se marcan como demo.

use crate::dto::dashboard_dto::{DashboardResponse, DashboardStat, FleetSummary, Notification, SidebarItem};
use crate::models::auth::AdminSession;
use crate::models::vehicle::VehicleCategory;
use crate::repositories::vehicle_repository::VehicleRepository;

const CATEGORIES: [VehicleCategory; 5] = [
    VehicleCategory::Electric,
    VehicleCategory::Sports,
    VehicleCategory::Suv,
    VehicleCategory::Luxury,
    VehicleCategory::Economy,
];

fn stat(label: &str, value: String, trend: Option<&str>, demo: bool) -> DashboardStat {
    DashboardStat {
        label: label.to_string(),
        value,
        trend: trend.map(str::to_string),
        demo,
    }
}

fn link(label: &str, path: &str) -> SidebarItem {
    SidebarItem {
        label: label.to_string(),
        path: Some(path.to_string()),
        submenu: Vec::new(),
    }
}

fn menu(label: &str, submenu: Vec<SidebarItem>) -> SidebarItem {
    SidebarItem {
        label: label.to_string(),
        path: None,
        submenu,
    }
}

pub fn sidebar() -> Vec<SidebarItem> {
    vec![
        link("Dashboard", "/admin/dashboard"),
        menu(
            "Vehicle Management",
            vec![
                link("Add Vehicle", "/admin/vehicles/add"),
                link("All Vehicles", "/admin/vehicles"),
                link("Categories", "/admin/vehicles/categories"),
            ],
        ),
        menu(
            "Bookings",
            vec![
                link("All Bookings", "/admin/bookings"),
                link("Pending", "/admin/bookings/pending"),
                link("Requests", "/admin/bookings/requests"),
            ],
        ),
        link("Customer Management", "/admin/customers"),
        link("Analytics", "/admin/analytics"),
        link("Settings", "/admin/settings"),
    ]
}

pub fn notifications() -> Vec<Notification> {
    [
        (1, "New booking request", "5m ago"),
        (2, "Vehicle maintenance due", "1h ago"),
        (3, "Customer review received", "2h ago"),
    ]
    .into_iter()
    .map(|(id, message, time)| Notification {
        id,
        message: message.to_string(),
        time: time.to_string(),
    })
    .collect()
}

/// Categorías con al menos un vehículo
pub fn fleet_summary(catalog: &VehicleRepository) -> Vec<FleetSummary> {
    CATEGORIES
        .iter()
        .filter_map(|category| {
            let vehicles: Vec<_> = catalog.all().iter().filter(|v| v.category == *category).collect();
            if vehicles.is_empty() {
                return None;
            }
            Some(FleetSummary {
                category: category.label().to_string(),
                total: vehicles.len(),
                available: vehicles.iter().filter(|v| v.is_available).count(),
            })
        })
        .collect()
}

pub fn build_dashboard(
    catalog: &VehicleRepository,
    session: &AdminSession,
    newsletter_subscribers: usize,
) -> DashboardResponse {
    let average_rate = if catalog.is_empty() {
        0.0
    } else {
        catalog.all().iter().map(|v| v.price_per_day).sum::<f64>() / catalog.len() as f64
    };

    let stats = vec![
        stat("Total Vehicles", catalog.len().to_string(), None, false),
        stat("Available Vehicles", catalog.available_count().to_string(), None, false),
        stat("Average Daily Rate", format!("${:.0}", average_rate), None, false),
        stat("Newsletter Subscribers", newsletter_subscribers.to_string(), None, false),
        stat("Active Bookings", "12".to_string(), Some("+5%"), true),
        stat("Total Customers", "156".to_string(), Some("+25%"), true),
        stat("Monthly Revenue", "$5,234".to_string(), Some("+18%"), true),
    ];

    DashboardResponse {
        admin_email: session.email.clone(),
        stats,
        fleet: fleet_summary(catalog),
        sidebar: sidebar(),
        notifications: notifications(),
    }
}
