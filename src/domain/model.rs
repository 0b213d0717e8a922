use crate::utils::error::{Result, TourError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A tour package as published by the catalog source.
///
/// Packages are read-only inside this crate; only the upstream source
/// creates or updates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    /// "North Island", "South Island" or the wildcard "Both".
    pub region: String,
    /// Adventure/Culture/Nature/Food or the wildcard "Mixed".
    #[serde(rename = "type")]
    pub category: String,
    /// Trip length in days.
    pub duration: u32,
    /// Price per person in NZD.
    pub price: f64,
    pub group_size_min: u32,
    pub group_size_max: u32,
    pub description: String,
    pub highlights: Vec<String>,
    pub itinerary: Vec<String>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub image_url: String,
    pub gallery: Vec<String>,
    pub season: Vec<String>,
    /// "Active" packages are the only ones served to callers.
    pub status: String,
}

impl Package {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }

    /// Parse one raw catalog row into a package.
    ///
    /// Missing or empty cells fall back to the source defaults; a cell that
    /// is present but unparseable fails the row so the caller can skip it.
    pub fn from_row(row: &RawRow) -> Result<Package> {
        let group_size = row.get("group_size").unwrap_or("1-10");
        let (group_min, group_max) = parse_group_size(group_size)?;

        Ok(Package {
            id: row.get("id").unwrap_or_default().to_string(),
            name: row.get("name").unwrap_or_default().to_string(),
            region: row.get("region").unwrap_or("Both").to_string(),
            category: row.get("type").unwrap_or("Mixed").to_string(),
            duration: parse_number(row, "duration", 1)?,
            price: parse_price(row)?,
            group_size_min: group_min,
            group_size_max: group_max,
            description: row.get("description").unwrap_or_default().to_string(),
            highlights: parse_list(row.get("highlights").unwrap_or_default()),
            itinerary: parse_list(row.get("itinerary").unwrap_or_default()),
            inclusions: parse_list(row.get("inclusions").unwrap_or_default()),
            exclusions: parse_list(row.get("exclusions").unwrap_or_default()),
            image_url: row.get("image_url").unwrap_or_default().to_string(),
            gallery: parse_list(row.get("gallery").unwrap_or_default()),
            season: parse_list(row.get("season").unwrap_or("All")),
            status: row.get("status").unwrap_or("Active").to_string(),
        })
    }
}

/// One row from the catalog source, keyed by normalised header name.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub fields: HashMap<String, String>,
}

impl RawRow {
    /// Returns the trimmed cell value, or `None` when missing or empty.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Split a comma- or newline-separated cell into trimmed items.
fn parse_list(value: &str) -> Vec<String> {
    value
        .replace('\n', ",")
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Group size cells are either "2-8" or a single number.
fn parse_group_size(value: &str) -> Result<(u32, u32)> {
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| TourError::RowParseError {
                field: "group_size".to_string(),
                reason: e.to_string(),
            })
    };

    match value.split_once('-') {
        Some((min, max)) => Ok((parse(min)?, parse(max)?)),
        None => {
            let n = parse(value)?;
            Ok((n, n))
        }
    }
}

fn parse_number(row: &RawRow, field: &str, default: u32) -> Result<u32> {
    match row.get(field) {
        Some(value) => value.parse::<u32>().map_err(|e| TourError::RowParseError {
            field: field.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_price(row: &RawRow) -> Result<f64> {
    match row.get("price") {
        Some(value) => value.parse::<f64>().map_err(|e| TourError::RowParseError {
            field: "price".to_string(),
            reason: e.to_string(),
        }),
        None => Ok(0.0),
    }
}

/// The five dialog steps that record a user choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKey {
    Destination,
    TripType,
    Duration,
    Budget,
    GroupSize,
}

/// Accumulated user choices for one conversation.
///
/// Owned by the caller and echoed back on every turn; the core keeps no
/// session state of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(HashMap<SelectionKey, String>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SelectionKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Records a choice, replacing any earlier value for the same step.
    pub fn insert(&mut self, key: SelectionKey, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Structural filter derived from [`Selections`]; rebuilt on every request,
/// never persisted. An unset field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub region: Option<String>,
    pub category: Option<String>,
    pub duration_min: Option<u32>,
    pub duration_max: Option<u32>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub group_size: Option<u32>,
}
