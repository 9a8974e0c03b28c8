//! Criterios de búsqueda
//!
//! Los criterios llegan desde el formulario de búsqueda tal cual. Cualquier
//! valor vacío o numérico mal formado se normaliza a "sin restricción", así el
//! motor de filtrado nunca tiene que devolver un error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Precio máximo por defecto del slider del formulario
pub const DEFAULT_MAX_PRICE_PER_DAY: f64 = 500.0;

/// Criterios de una búsqueda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Solo informativo, no se compara con ningún campo del catálogo
    #[serde(default, alias = "location", deserialize_with = "lenient_text")]
    pub location_text: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub pickup_date: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub return_date: Option<String>,

    /// daily / weekly / monthly, informativo
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub vehicle_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub transmission: Option<String>,

    #[serde(default, alias = "passengers", deserialize_with = "lenient_count")]
    pub min_passengers: Option<u32>,

    #[serde(
        default = "default_max_price",
        alias = "priceRange",
        deserialize_with = "lenient_price"
    )]
    pub max_price_per_day: f64,

    #[serde(default, alias = "features", deserialize_with = "lenient_tags")]
    pub required_features: Vec<String>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            location_text: None,
            pickup_date: None,
            return_date: None,
            duration: None,
            vehicle_type: None,
            transmission: None,
            min_passengers: None,
            max_price_per_day: DEFAULT_MAX_PRICE_PER_DAY,
            required_features: Vec::new(),
        }
    }
}

impl SearchCriteria {
    pub fn with_vehicle_type(mut self, value: &str) -> Self {
        self.vehicle_type = normalize_text(value);
        self
    }

    pub fn with_transmission(mut self, value: &str) -> Self {
        self.transmission = normalize_text(value);
        self
    }

    /// Acepta el valor crudo del select de pasajeros
    pub fn with_min_passengers(mut self, raw: &str) -> Self {
        self.min_passengers = parse_count(raw);
        self
    }

    pub fn with_max_price(mut self, value: f64) -> Self {
        self.max_price_per_day = if value.is_finite() {
            value
        } else {
            DEFAULT_MAX_PRICE_PER_DAY
        };
        self
    }

    pub fn with_feature(mut self, tag: &str) -> Self {
        if let Some(tag) = normalize_text(tag) {
            if !self.required_features.contains(&tag) {
                self.required_features.push(tag);
            }
        }
        self
    }

    /// Ajusta los campos informativos (ubicación y fechas)
    pub fn with_trip(mut self, location: &str, pickup: &str, dropoff: &str) -> Self {
        self.location_text = normalize_text(location);
        self.pickup_date = normalize_text(pickup);
        self.return_date = normalize_text(dropoff);
        self
    }

    /// Alterna una característica como hace el checkbox del formulario
    pub fn toggle_feature(&mut self, tag: &str) {
        if let Some(pos) = self.required_features.iter().position(|t| t == tag) {
            self.required_features.remove(pos);
        } else if let Some(tag) = normalize_text(tag) {
            self.required_features.push(tag);
        }
    }
}

/// Parámetros de la búsqueda por query string (`GET /api/vehicles/search`)
///
/// Las claves escalares repetidas se quedan con el último valor. Las
/// características se acumulan: admiten la clave repetida (checkboxes) y
/// valores separados por comas.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchQueryParams {
    pub location_text: Option<String>,
    pub pickup_date: Option<String>,
    pub return_date: Option<String>,
    pub duration: Option<String>,
    pub vehicle_type: Option<String>,
    pub transmission: Option<String>,
    pub min_passengers: Option<String>,
    pub max_price_per_day: Option<String>,
    pub required_features: Vec<String>,
}

impl SearchQueryParams {
    /// Construye los parámetros a partir de los pares ya decodificados
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "locationText" | "location" => params.location_text = Some(value),
                "pickupDate" => params.pickup_date = Some(value),
                "returnDate" => params.return_date = Some(value),
                "duration" => params.duration = Some(value),
                "vehicleType" => params.vehicle_type = Some(value),
                "transmission" => params.transmission = Some(value),
                "minPassengers" | "passengers" => params.min_passengers = Some(value),
                "maxPricePerDay" | "priceRange" => params.max_price_per_day = Some(value),
                "requiredFeatures" | "features" | "features[]" => params.required_features.push(value),
                _ => {}
            }
        }
        params
    }
}

impl From<SearchQueryParams> for SearchCriteria {
    fn from(params: SearchQueryParams) -> Self {
        let text = |v: Option<String>| v.as_deref().and_then(normalize_text);

        let required_features = params
            .required_features
            .iter()
            .flat_map(|raw| raw.split(','))
            .filter_map(normalize_text)
            .collect();

        Self {
            location_text: text(params.location_text),
            pickup_date: text(params.pickup_date),
            return_date: text(params.return_date),
            duration: text(params.duration),
            vehicle_type: text(params.vehicle_type),
            transmission: text(params.transmission),
            min_passengers: params.min_passengers.as_deref().and_then(parse_count),
            max_price_per_day: params
                .max_price_per_day
                .as_deref()
                .and_then(parse_price)
                .unwrap_or(DEFAULT_MAX_PRICE_PER_DAY),
            required_features: dedup(required_features),
        }
    }
}

fn default_max_price() -> f64 {
    DEFAULT_MAX_PRICE_PER_DAY
}

fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn dedup(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Entero inicial de la cadena ("5", " 7+", "4 seats"); None si no hay dígitos
pub fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits: String = trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => normalize_text(&s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f.trunc() as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => parse_count(&s),
        _ => None,
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(s)) => parse_price(&s),
        _ => None,
    }
    .unwrap_or(DEFAULT_MAX_PRICE_PER_DAY))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let tags = match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => normalize_text(&s),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => s.split(',').filter_map(normalize_text).collect(),
        _ => Vec::new(),
    };
    Ok(dedup(tags))
}
