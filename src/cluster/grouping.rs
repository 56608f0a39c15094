use std::collections::BTreeMap;

use super::centroid::compute_centroids;
use super::coordinate::{ClusterId, Coordinate, CoordinateList};
use super::dbscan::db_scan;
use super::error::ClusterError;

/// Members of each cluster, iterated in ascending cluster ID order
pub type Grouping = BTreeMap<ClusterId, CoordinateList>;

/// Center of each cluster, keyed like the matching `Grouping`
pub type Centroids = BTreeMap<ClusterId, Coordinate>;

/// Clustering result handed back to the caller for presentation
///
/// Only built by [`cluster`], which guarantees every group has a centroid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clustering {
    groups: Grouping,
    centroids: Centroids,
}

impl Clustering {
    pub fn groups(&self) -> &Grouping {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates `(id, centroid, members)` in ascending ID order
    pub fn iter(&self) -> impl Iterator<Item = (ClusterId, &Coordinate, &[Coordinate])> {
        debug_assert_eq!(self.groups.len(), self.centroids.len());
        self.groups
            .iter()
            .zip(self.centroids.iter())
            .map(|((&id, members), (&centroid_id, center))| {
                debug_assert_eq!(id, centroid_id);
                (id, center, members.as_slice())
            })
    }
}

fn check_threshold(threshold_km: f64) -> Result<(), ClusterError> {
    if threshold_km > 0.0 {
        Ok(())
    } else {
        Err(ClusterError::invalid_argument(format!(
            "threshold must be > 0 km, got {threshold_km}"
        )))
    }
}

/// Groups points so that any two within `threshold_km` of each other share a cluster
///
/// Membership is transitive: a chain of points each within the threshold of
/// the next ends up in one cluster even when its ends are far apart.
///
/// # Errors
///
/// `ClusterError::InvalidArgument` unless `threshold_km > 0`
pub fn group_by_distance(
    points: &[Coordinate],
    threshold_km: f64,
) -> Result<Grouping, ClusterError> {
    check_threshold(threshold_km)?;

    let grouping = db_scan(points, threshold_km)?
        .into_iter()
        .map(|cluster| (cluster.c, cluster.coordinates(points)))
        .collect();

    Ok(grouping)
}

/// Clusters `points` by great-circle distance and computes each cluster's centroid
///
/// Empty input yields an empty result.
pub fn cluster(points: &[Coordinate], threshold_km: f64) -> Result<Clustering, ClusterError> {
    let groups = group_by_distance(points, threshold_km)?;
    let centroids = compute_centroids(&groups)?;

    tracing::debug!(
        points = points.len(),
        clusters = groups.len(),
        threshold_km,
        "grouped coordinates"
    );

    Ok(Clustering { groups, centroids })
}
