use std::fmt;

use crate::geo_3d::Vector3;

/// A directed edge of a face.
/// Stores copies of its two endpoints. A face regenerates its edges wholesale
/// whenever it is constructed, so an edge never changes after construction.
#[derive(Debug)]
pub struct Edge {
    start: Vector3,
    end: Vector3,
}
impl Edge {
    /// Create a new edge between two endpoints.
    pub fn new(start: Vector3, end: Vector3) -> Self {
        Edge{start, end}
    }

    /// Get the start point.
    pub fn start(&self) -> Vector3 {
        self.start
    }

    /// Get the end point.
    pub fn end(&self) -> Vector3 {
        self.end
    }

    /// Get the edge length. Recomputed on each call.
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Get the unit vector pointing from start to end.
    /// Returns the zero vector for a zero-length edge.
    pub fn direction(&self) -> Vector3 {
        let length = self.length();
        if length > 0.0 {
            (self.end - self.start) / length
        }
        else {
            Vector3::zero()
        }
    }
}
/// Edges compare equal regardless of direction.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "{:.*} -> {:.*}", precision, self.start, precision, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_direction() {
        let edge = Edge::new(Vector3::zero(), Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(edge.length(), 5.0);
        assert_eq!(edge.direction(), Vector3::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn zero_length_edge_has_zero_direction() {
        let point = Vector3::new(1.0, 2.0, 3.0);
        let edge = Edge::new(point, point);
        assert_eq!(edge.length(), 0.0);
        assert_eq!(edge.direction(), Vector3::zero());
    }

    #[test]
    fn equality_ignores_direction() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(1.0, 1.0, 0.0);
        let c = Vector3::new(2.0, 0.0, 0.0);
        assert_eq!(Edge::new(a, b), Edge::new(b, a));
        assert_eq!(Edge::new(a, b), Edge::new(a, b));
        assert_ne!(Edge::new(a, b), Edge::new(a, c));
    }

    #[test]
    fn display_shows_both_endpoints() {
        let edge = Edge::new(Vector3::zero(), Vector3::xhat());
        assert_eq!(format!("{:.1}", edge), "(0.0, 0.0, 0.0) -> (1.0, 0.0, 0.0)");
    }
}
