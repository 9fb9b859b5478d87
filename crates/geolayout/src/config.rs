//! User-adjustable layout parameters.
//!
//! `LayoutParams` is the property surface a host exposes (scale, coordinate columns, projection,
//! centering, angle unit). It (de)serializes as a JSON object with camelCase keys; missing keys
//! take their defaults.

use std::fmt;

use geolayout_graph::Column;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::projection::ProjectionKind;

pub const DEFAULT_SCALE: f64 = 1000.0;

/// The projection picked on the property surface.
///
/// Names outside the catalog are kept verbatim as `Unrecognized`; a run with such a selection
/// leaves geocoded positions untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionSelection {
    Known(ProjectionKind),
    Unrecognized(String),
}

impl ProjectionSelection {
    pub fn from_name(name: &str) -> Self {
        match ProjectionKind::from_name(name) {
            Some(kind) => Self::Known(kind),
            None => Self::Unrecognized(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Known(kind) => kind.name(),
            Self::Unrecognized(name) => name,
        }
    }

    pub fn kind(&self) -> Option<ProjectionKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unrecognized(_) => None,
        }
    }
}

impl Default for ProjectionSelection {
    fn default() -> Self {
        Self::Known(ProjectionKind::default())
    }
}

impl From<ProjectionKind> for ProjectionSelection {
    fn from(kind: ProjectionKind) -> Self {
        Self::Known(kind)
    }
}

impl fmt::Display for ProjectionSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ProjectionSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ProjectionSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutParams {
    /// Linear multiplier applied to projected coordinates.
    pub scale: f64,
    /// Shift the geocoded centroid to the origin after placement.
    pub centered: bool,
    /// Coordinate attributes already hold radians instead of degrees.
    pub radians: bool,
    /// Latitude column id.
    pub latitude: Option<String>,
    /// Longitude column id.
    pub longitude: Option<String>,
    pub projection: ProjectionSelection,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            centered: true,
            radians: false,
            latitude: None,
            longitude: None,
            projection: ProjectionSelection::default(),
        }
    }
}

impl LayoutParams {
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })
    }

    pub fn to_value(&self) -> Value {
        // Every field is a plain scalar or string; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn with_columns(
        mut self,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        self.latitude = Some(latitude.into());
        self.longitude = Some(longitude.into());
        self
    }

    pub fn with_projection(mut self, projection: impl Into<ProjectionSelection>) -> Self {
        self.projection = projection.into();
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn with_radians(mut self, radians: bool) -> Self {
        self.radians = radians;
        self
    }

    pub fn has_columns(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Coordinate columns detected in a node table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedColumns {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Picks the columns whose id or title reads `latitude`/`lat` and `longitude`/`lon`
/// (ASCII case-insensitive). Later matches win.
pub fn detect_coordinate_columns<'a>(
    columns: impl IntoIterator<Item = &'a Column>,
) -> DetectedColumns {
    let mut out = DetectedColumns::default();
    for c in columns {
        if is_named(c, &["latitude", "lat"]) {
            out.latitude = Some(c.id.clone());
        } else if is_named(c, &["longitude", "lon"]) {
            out.longitude = Some(c.id.clone());
        }
    }
    out
}

fn is_named(column: &Column, names: &[&str]) -> bool {
    names
        .iter()
        .any(|n| column.id.eq_ignore_ascii_case(n) || column.title.eq_ignore_ascii_case(n))
}
