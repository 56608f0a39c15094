use super::coordinate::Coordinate;
use super::error::ClusterError;
use super::grouping::{Centroids, Grouping};

/// Calculates the center of a group as the mean latitude and mean longitude
///
/// This is a planar mean over degrees, not a spherical centroid. Groups that
/// straddle the ±180° meridian or surround a pole get a center that can be
/// far from every member.
///
/// # Errors
///
/// `ClusterError::InvalidArgument` if `points` is empty
pub fn centroid(points: &[Coordinate]) -> Result<Coordinate, ClusterError> {
    if points.is_empty() {
        return Err(ClusterError::invalid_argument(
            "cannot compute the centroid of an empty group",
        ));
    }

    let mut center = Coordinate::new(0.0, 0.0);
    for pt in points {
        center.lat += pt.lat;
        center.lon += pt.lon;
    }

    let n = points.len() as f64;
    center.lat /= n;
    center.lon /= n;

    Ok(center)
}

/// Computes one centroid per group, keyed by the same cluster ID
pub fn compute_centroids(groups: &Grouping) -> Result<Centroids, ClusterError> {
    groups
        .iter()
        .map(|(&id, members)| centroid(members).map(|center| (id, center)))
        .collect()
}
