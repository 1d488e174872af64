use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::node::SearchSpace;

/// Mean Earth radius used by the Haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Index of a waypoint in the order it was supplied.
pub type WaypointId = usize;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Reject non-finite values and out-of-range latitude/longitude.
    pub fn validate(self) -> Result<Self> {
        let valid = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);
        if valid {
            Ok(self)
        } else {
            Err(Error::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// Parse `lat,lon`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidConfig {
            key: "coordinate".to_string(),
            value: s.to_string(),
        };
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lat = lat.trim().parse().map_err(|_| invalid())?;
        let lon = lon.trim().parse().map_err(|_| invalid())?;
        Coordinate::new(lat, lon).validate()
    }
}

/// Great-circle distance in kilometres between two coordinates.
///
/// Symmetric bit for bit: the operands are put in a canonical order first.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let (a, b) = match a.lat.total_cmp(&b.lat).then(a.lon.total_cmp(&b.lon)) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `h` just past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Edge within the waypoint graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: WaypointId,
    pub distance: f64,
}

/// Fully connected graph over a set of waypoints.
#[derive(Debug, Clone)]
pub struct WaypointGraph {
    waypoints: Arc<Vec<Coordinate>>,
    adjacency: Arc<HashMap<WaypointId, Vec<Edge>>>,
}

impl WaypointGraph {
    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoint(&self, id: WaypointId) -> Option<Coordinate> {
        self.waypoints.get(id).copied()
    }

    pub fn waypoints(&self) -> &[Coordinate] {
        &self.waypoints
    }

    /// Return the neighbours for a given waypoint, nearest first.
    pub fn neighbours(&self, id: WaypointId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn edge_weight(&self, from: WaypointId, to: WaypointId) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.distance)
    }

    /// Validate that `id` names a waypoint in this graph.
    pub fn check_waypoint(&self, id: WaypointId) -> Result<()> {
        if id < self.len() {
            Ok(())
        } else {
            Err(Error::UnknownNode {
                node: format!("waypoint {id}"),
            })
        }
    }
}

impl SearchSpace for WaypointGraph {
    type Node = WaypointId;

    fn contains(&self, node: WaypointId) -> bool {
        node < self.len()
    }

    fn is_traversable(&self, node: WaypointId) -> bool {
        self.contains(node)
    }

    fn neighbours(&self, node: WaypointId, buf: &mut Vec<(WaypointId, f64)>) {
        buf.extend(
            WaypointGraph::neighbours(self, node)
                .iter()
                .map(|edge| (edge.target, edge.distance)),
        );
    }
}

/// Build a fully connected graph with Haversine edge weights.
///
/// Every pair of distinct waypoints is joined in both directions with the
/// same weight.
pub fn build_waypoint_graph(waypoints: &[Coordinate]) -> Result<WaypointGraph> {
    if waypoints.len() < 2 {
        return Err(Error::InsufficientWaypoints {
            count: waypoints.len(),
        });
    }
    for waypoint in waypoints {
        waypoint.validate()?;
    }

    let mut adjacency: HashMap<WaypointId, Vec<Edge>> = HashMap::with_capacity(waypoints.len());
    for (i, a) in waypoints.iter().enumerate() {
        for (j, b) in waypoints.iter().enumerate().skip(i + 1) {
            let distance = haversine_km(*a, *b);
            adjacency.entry(i).or_default().push(Edge {
                target: j,
                distance,
            });
            adjacency.entry(j).or_default().push(Edge {
                target: i,
                distance,
            });
        }
    }

    for edges in adjacency.values_mut() {
        edges.sort_by(|a, b| {
            compare_distance(a.distance, b.distance).then_with(|| a.target.cmp(&b.target))
        });
    }

    Ok(WaypointGraph {
        waypoints: Arc::new(waypoints.to_vec()),
        adjacency: Arc::new(adjacency),
    })
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}
