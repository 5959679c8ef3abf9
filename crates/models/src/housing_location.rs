use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A rental/housing listing as served to the frontend.
///
/// `id` is unique within the collection and assigned by the seed data, never
/// generated here. Field casing on the wire is camelCase to match the
/// original web client (`availableUnits`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HousingLocation {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub photo: String,
    pub available_units: u32,
    pub wifi: bool,
    pub laundry: bool,
}

impl HousingLocation {
    /// Decode a JSON array of housing locations, preserving array order.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Vec<Self>, ModelError> {
        serde_json::from_slice(bytes).map_err(|e| ModelError::Decode(e.to_string()))
    }
}
