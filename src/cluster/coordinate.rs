//! Coordinate and cluster value types

/// Cluster identifier
///
/// Opaque beyond identity and ordering. Assigned 0, 1, 2, ... in the order
/// clusters are discovered.
pub type ClusterId = usize;

/// Coordinate represents a geographic position in degrees
///
/// No range checks are applied: latitudes outside -90..90 or longitudes
/// outside -180..180 are carried through as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// CoordinateList is a collection of Coordinates
pub type CoordinateList = Vec<Coordinate>;

/// Cluster represents a result of clustering work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Cluster ID
    pub c: ClusterId,
    /// Indices of points belonging to this cluster, in discovery order
    pub points: Vec<usize>,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometers
    pub fn distance(&self, other: &Coordinate) -> f64 {
        super::distance::distance_haversine(self, other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl Cluster {
    /// Resolves member indices into the coordinates they point at
    pub fn coordinates(&self, points: &[Coordinate]) -> CoordinateList {
        self.points.iter().map(|&i| points[i]).collect()
    }
}
