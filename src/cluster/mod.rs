//! Package cluster groups (lat, lon) coordinates by great-circle distance
pub mod centroid;
pub mod coordinate;
pub mod dbscan;
pub mod distance;
pub mod error;
pub mod grouping;

#[cfg(test)]
mod distance_test;

pub use coordinate::{Coordinate, CoordinateList};
pub use grouping::{Clustering, cluster};
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use centroid::{centroid, compute_centroids};
#[allow(unused_imports)]
pub use coordinate::{Cluster, ClusterId};
#[allow(unused_imports)]
pub use dbscan::{db_scan, region_query};
#[allow(unused_imports)]
pub use distance::{DEGREE_RAD, EARTH_R, distance_haversine};
#[allow(unused_imports)]
pub use error::ClusterError;
#[allow(unused_imports)]
pub use grouping::{Centroids, Grouping, group_by_distance};
