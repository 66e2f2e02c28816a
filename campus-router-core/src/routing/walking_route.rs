//! Turns a solved node path into the route handed back to callers

use serde::{Deserialize, Serialize};

use crate::{
    Error, Meters, WALKING_SPEED_MPS,
    model::{GeoPoint, WalkwayGraph},
    routing::dijkstra::ShortestPath,
};

/// Walking route between two snapped walkway nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkingRoute {
    /// Total path length in meters
    pub distance_m: Meters,
    /// Estimated walking time in whole minutes, at least 1
    pub eta_minutes: u32,
    /// Polyline from the start snap node to the end snap node
    pub path: Vec<GeoPoint>,
    /// Distance from the requested start to its snap node
    pub start_snap_m: Meters,
    /// Distance from the requested end to its snap node
    pub end_snap_m: Meters,
}

impl WalkingRoute {
    pub(crate) fn from_shortest_path(
        graph: &WalkwayGraph,
        shortest: &ShortestPath,
        start_snap_m: Meters,
        end_snap_m: Meters,
    ) -> Result<Self, Error> {
        let path = shortest
            .nodes
            .iter()
            .map(|&node| {
                graph
                    .point(node)
                    .ok_or_else(|| Error::InvalidData(format!("Path node {node:?} not in graph")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            distance_m: shortest.distance,
            eta_minutes: walking_minutes(shortest.distance),
            path,
            start_snap_m,
            end_snap_m,
        })
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    /// One-line status text for display
    pub fn summary(&self) -> String {
        format!(
            "Route ready: {:.2} km · ~{} min walk.",
            self.distance_km(),
            self.eta_minutes
        )
    }
}

/// Walking time in whole minutes at `WALKING_SPEED_MPS`, rounded to the
/// nearest minute and never below 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn walking_minutes(distance_m: Meters) -> u32 {
    let minutes = (distance_m / (WALKING_SPEED_MPS * 60.0)).round();
    (minutes as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_walks_take_at_least_a_minute() {
        assert_eq!(walking_minutes(0.0), 1);
        assert_eq!(walking_minutes(30.0), 1);
    }

    #[test]
    fn minutes_round_to_nearest() {
        // 84 m per minute
        assert_eq!(walking_minutes(84.0 * 5.0), 5);
        assert_eq!(walking_minutes(84.0 * 5.4), 5);
        assert_eq!(walking_minutes(84.0 * 5.6), 6);
    }

    #[test]
    fn summary_matches_display_format() {
        let route = WalkingRoute {
            distance_m: 452.0,
            eta_minutes: walking_minutes(452.0),
            path: vec![GeoPoint::new(8.5, 76.9), GeoPoint::new(8.504, 76.9)],
            start_snap_m: 0.0,
            end_snap_m: 0.0,
        };
        assert_eq!(route.summary(), "Route ready: 0.45 km · ~5 min walk.");
    }
}
