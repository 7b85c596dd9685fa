//! Destination catalog entries.

use serde::Serialize;

/// Typical daily spend per category at a place.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Expenses {
    pub accommodation: &'static str,
    pub food: &'static str,
    pub transport: &'static str,
    pub activities: &'static str,
}

/// A destination in the built-in catalog. Trips point at places by id only.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub rating: f32,
    pub description: &'static str,
    pub best_season: &'static str,
    pub budget: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub expenses: Expenses,
}
