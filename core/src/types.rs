//! Domain DTOs for the vehicle API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Vehicles are read-only on this side: the server owns them, the client only
//! decodes and prints them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single vehicle returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub shortcode: String,
    pub battery: f64,
    pub position: Position,
}

/// Renders the one-line listing format.
impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Shortcode: {} | Battery: {} | Lat: {} | Lon: {}",
            self.id, self.shortcode, self.battery, self.position.latitude, self.position.longitude
        )
    }
}

/// Payload of `GET /vehicles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VehicleList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vehicles: Vec<Vehicle>,
}

impl VehicleList {
    /// Decode a response body. A body that is not a JSON object has no
    /// `vehicles` field and reads as an empty list. An object whose
    /// `vehicles` does not decode is returned as `ClientError::Unknown`.
    pub fn from_body(body: Value) -> Result<Self, ClientError> {
        if !body.is_object() {
            return Ok(Self::default());
        }
        Self::deserialize(&body).map_err(|_| ClientError::Unknown(body))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Vehicle>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Vehicle>>::deserialize(deserializer)?.unwrap_or_default())
}
