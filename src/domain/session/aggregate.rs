//! Training session entity.
//!
//! A `SessionFormation` is a schedulable training offering: descriptive
//! metadata plus a seat capacity and a reserved-seat counter. Every field
//! except the id is optional, mirroring what the catalog accepts from clients.
//!
//! # Invariants
//!
//! - `reserved_places` is never negative once a session has been created
//! - an update only replaces `total_places` with a strictly positive value
//! - an update only replaces `reserved_places` with a non-negative value

use crate::domain::foundation::SessionId;

/// Training session record.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionFormation {
    pub id: SessionId,
    pub title: Option<String>,
    pub dates: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub total_places: Option<i32>,
    pub reserved_places: Option<i32>,
}

/// Field values supplied by a client, each one optional.
///
/// Used both as the seed of a new session and as the patch of a partial
/// update. `None` always means "not supplied".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionChanges {
    pub title: Option<String>,
    pub dates: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub total_places: Option<i32>,
    pub reserved_places: Option<i32>,
}

impl SessionFormation {
    /// Create a new session from client-supplied fields.
    ///
    /// `reserved_places` is clamped: missing or negative becomes 0. No other
    /// field is validated.
    pub fn create(id: SessionId, fields: SessionChanges) -> Self {
        Self {
            id,
            title: fields.title,
            dates: fields.dates,
            location: fields.location,
            price: fields.price,
            level: fields.level,
            category: fields.category,
            description: fields.description,
            total_places: fields.total_places,
            reserved_places: Some(sanitize_reserved_places(fields.reserved_places)),
        }
    }

    /// Merge a partial update into this session.
    ///
    /// Supplied descriptive fields overwrite the stored ones; missing fields
    /// are kept. Capacity fields are only overwritten by acceptable values.
    pub fn apply(&mut self, changes: SessionChanges) {
        if let Some(title) = changes.title {
            self.title = Some(title);
        }
        if let Some(dates) = changes.dates {
            self.dates = Some(dates);
        }
        if let Some(location) = changes.location {
            self.location = Some(location);
        }
        if let Some(price) = changes.price {
            self.price = Some(price);
        }
        if let Some(level) = changes.level {
            self.level = Some(level);
        }
        if let Some(category) = changes.category {
            self.category = Some(category);
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }

        if let Some(total) = changes.total_places.filter(|v| *v > 0) {
            self.total_places = Some(total);
        }
        if let Some(reserved) = changes.reserved_places.filter(|v| *v >= 0) {
            self.reserved_places = Some(reserved);
        }
    }
}

/// Clamp a reserved-seat count supplied on creation.
pub fn sanitize_reserved_places(value: Option<i32>) -> i32 {
    match value {
        Some(v) if v >= 0 => v,
        _ => 0,
    }
}
