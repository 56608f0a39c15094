use super::coordinate::{Cluster, Coordinate};
use super::error::ClusterError;
use bitvec::prelude::*;

// DBSCAN with MinPts fixed at 1 (from <http://en.wikipedia.org/wiki/DBSCAN>):
//
// DBSCAN(D, eps)
//    C = 0
//    for each unvisited point P in dataset D
//       mark P as visited
//       C = next cluster
//       expandCluster(P, C, eps)
//
// expandCluster(P, C, eps)
//    add P to cluster C
//    for each point P' in the cluster, in order of addition
//       for each unvisited P'' in regionQuery(P', eps)
//          mark P'' as visited
//          add P'' to cluster C
//
// regionQuery(P, eps)
//    return all points within P's eps-neighborhood (including P)
//
// Every point is its own core point, so there is no noise and each cluster
// is a connected component of the "distance <= eps" graph.

/// Clusters incoming points using DBSCAN with a minimum neighbourhood size of one
///
/// # Arguments
///
/// * `points` - List of points to cluster
/// * `eps` - Clustering radius in kilometers, inclusive. Zero merges only
///   identical coordinates.
///
/// # Returns
///
/// Clusters labelled 0, 1, 2, ... in the order their first member appears in
/// `points`. Members are listed in breadth-first discovery order.
///
/// # Errors
///
/// `ClusterError::InvalidArgument` if `eps` is negative or NaN
pub fn db_scan(points: &[Coordinate], eps: f64) -> Result<Vec<Cluster>, ClusterError> {
    if eps.is_nan() || eps < 0.0 {
        return Err(ClusterError::invalid_argument(format!(
            "eps must be >= 0, got {eps}"
        )));
    }

    let mut visited = bitvec![0; points.len()];
    let mut clusters = Vec::new();
    let mut c = 0;

    for i in 0..points.len() {
        if visited[i] {
            continue;
        }
        visited.set(i, true);

        let mut cluster = Cluster { c, points: vec![i] };
        c += 1;

        // expandCluster goes here inline; cluster.points doubles as the BFS queue
        let mut j = 0;
        while j < cluster.points.len() {
            let k = cluster.points[j];
            for n in region_query(points, &points[k], eps) {
                if !visited[n] {
                    visited.set(n, true);
                    cluster.points.push(n);
                }
            }
            j += 1;
        }

        tracing::trace!(cluster = cluster.c, size = cluster.points.len(), "cluster expanded");
        clusters.push(cluster);
    }

    tracing::debug!(
        points = points.len(),
        clusters = clusters.len(),
        eps,
        "clustering complete"
    );

    Ok(clusters)
}

/// Simple O(N) way to find points in neighbourhood
///
/// Returns indices, in input order, of every point whose great-circle distance
/// to `p` is at most `eps` kilometers.
pub fn region_query(points: &[Coordinate], p: &Coordinate, eps: f64) -> Vec<usize> {
    let mut result = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if point.distance(p) <= eps {
            result.push(i);
        }
    }

    result
}
