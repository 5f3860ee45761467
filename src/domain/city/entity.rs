use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// A stored favorite. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct FavoriteCity {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub admin1: Option<String>,
}

/// Attributes of a favorite before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewFavoriteCity {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl NewFavoriteCity {
    pub fn with_id(self, id: i32) -> FavoriteCity {
        FavoriteCity {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            country: self.country,
            admin1: self.admin1,
        }
    }
}

/// A geocoding search hit. Not persisted until promoted through "add favorite".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CityCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl CityCandidate {
    /// Reads the `results` array of a geocoding payload. Entries missing a name or
    /// coordinates are skipped; a payload without `results` means no hits.
    pub fn list_from_payload(payload: &Value) -> Vec<CityCandidate> {
        payload
            .get("results")
            .and_then(Value::as_array)
            .map(|results| {
                results
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<CityCandidate> for NewFavoriteCity {
    fn from(c: CityCandidate) -> Self {
        Self {
            name: c.name,
            latitude: c.latitude,
            longitude: c.longitude,
            country: c.country,
            admin1: c.admin1,
        }
    }
}
