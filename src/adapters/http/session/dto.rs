//! Request/response DTOs for session endpoints.
//!
//! Wire names follow the catalog frontend's camelCase schema (`lieu`, `desc`,
//! `placesTotales`, `placesReservees`).

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionChanges, SessionFormation};

/// Body of `POST /api/sessions` and `PUT /api/sessions/:id`.
///
/// Every field is optional: on update, an absent or `null` field keeps the
/// stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub dates: Option<String>,
    #[serde(rename = "lieu")]
    pub location: Option<String>,
    pub price: Option<f64>,
    pub level: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_seat_count")]
    pub places_totales: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_seat_count")]
    pub places_reservees: Option<i32>,
}

/// Seat counts accept any JSON number; a fractional part is truncated.
fn deserialize_seat_count<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let out_of_range =
        || -> D::Error { serde::de::Error::custom(format!("seat count out of range: {}", number)) };
    if let Some(n) = number.as_i64() {
        return i32::try_from(n).map(Some).map_err(|_| out_of_range());
    }
    match number.as_f64().map(f64::trunc) {
        Some(n) if n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) => Ok(Some(n as i32)),
        _ => Err(out_of_range()),
    }
}

impl SessionRequest {
    /// Id carried in the payload, if it is usable as a session id.
    pub fn session_id(&self) -> Option<SessionId> {
        self.id.as_deref().and_then(|id| id.parse().ok())
    }

    pub fn into_changes(self) -> SessionChanges {
        SessionChanges {
            title: self.title,
            dates: self.dates,
            location: self.location,
            price: self.price,
            level: self.level,
            category: self.category,
            description: self.description,
            total_places: self.places_totales,
            reserved_places: self.places_reservees,
        }
    }
}

/// A session as returned to clients. Unset fields serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub title: Option<String>,
    pub dates: Option<String>,
    #[serde(rename = "lieu")]
    pub location: Option<String>,
    pub price: Option<f64>,
    pub level: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    pub places_totales: Option<i32>,
    pub places_reservees: Option<i32>,
}

impl From<SessionFormation> for SessionResponse {
    fn from(session: SessionFormation) -> Self {
        Self {
            id: session.id.to_string(),
            title: session.title,
            dates: session.dates,
            location: session.location,
            price: session.price,
            level: session.level,
            category: session.category,
            description: session.description,
            places_totales: session.total_places,
            places_reservees: session.reserved_places,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
