use serde::Serialize;

/// Tarjeta de estadística del dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    pub trend: Option<String>,
    /// true si el valor es de demostración y no sale del catálogo
    pub demo: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarItem {
    pub label: String,
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<SidebarItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub time: String,
}

/// Vehículos por categoría
#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    pub category: String,
    pub total: usize,
    pub available: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub admin_email: String,
    pub stats: Vec<DashboardStat>,
    pub fleet: Vec<FleetSummary>,
    pub sidebar: Vec<SidebarItem>,
    pub notifications: Vec<Notification>,
}
