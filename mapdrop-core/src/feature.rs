//! Wire projection for points
//!
//! Points leave the service as GeoJSON-style features. Property values are
//! strings on the wire; `created_at` is ISO-8601 with a numeric UTC offset.
//! `can_delete` is a per-viewer field: it is true only when the record's
//! creator matches the requester.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::Coordinates;

/// A single point in wire form.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub can_delete: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: Properties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Serialize)]
pub struct Properties {
    pub point_id: String,
    pub icon: String,
    pub message: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [f64; 2],
}

impl Feature {
    /// Project a stored point into its wire representation.
    pub fn for_point(
        coords: Coordinates,
        id: Uuid,
        message: String,
        created_at: DateTime<Utc>,
        icon: String,
        can_delete: bool,
    ) -> Self {
        Self {
            can_delete,
            kind: "Feature",
            properties: Properties {
                point_id: id.to_string(),
                icon,
                message,
                created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            },
            geometry: Geometry {
                kind: "Point",
                coordinates: coords.to_array(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn wire_shape() {
        let coords = Coordinates::new(-93.2624, 44.9343).unwrap();
        let id = Uuid::nil();
        let created_at = Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap();

        let feature = Feature::for_point(
            coords,
            id,
            "hello".to_string(),
            created_at,
            "flag".to_string(),
            true,
        );
        let value = serde_json::to_value(&feature).unwrap();

        assert_eq!(value["can_delete"], true);
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["properties"]["point_id"], id.to_string());
        assert_eq!(value["properties"]["icon"], "flag");
        assert_eq!(value["properties"]["message"], "hello");
        assert_eq!(value["geometry"]["type"], "Point");
        assert_eq!(value["geometry"]["coordinates"][0], -93.2624);
        assert_eq!(value["geometry"]["coordinates"][1], 44.9343);
    }

    #[test]
    fn created_at_keeps_numeric_offset() {
        let coords = Coordinates::new(0.0, 0.0).unwrap();
        let created_at = Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap();

        let feature = Feature::for_point(
            coords,
            Uuid::nil(),
            String::new(),
            created_at,
            String::new(),
            false,
        );

        // "+00:00" rather than "Z": the original wire format carried an offset.
        assert_eq!(feature.properties.created_at, "2021-03-14T15:09:26+00:00");
    }
}
