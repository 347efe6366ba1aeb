/*!
 * Point sampling across a face.
 * The generation strategies live here; `Face` exposes them as methods.
 *
 * All grid strategies work on the X/Y bounding box of the vertices and
 * flatten candidates to the box's minimum Z before the containment test,
 * matching the X/Y-shadow behavior of the containment test itself.
 */

use serde::{Serialize, Deserialize};
use strum::EnumIter;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::geo_3d::{Edge, Face, Vector3};

/// Tolerance for a grid line landing exactly on the far side of the box.
const GRID_EPS: f64 = 1e-9;

/// Classification of a sampled point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// Point lying on a boundary edge.
    Edge,
    /// Point in the face interior.
    Interior,
}

/// Point distribution modes for `Face::generate_point_grid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridMode {
    /// Evenly spaced points along the boundary edges only.
    EdgeOnly,
    /// Area-scaled interior grid points only.
    InteriorOnly,
    /// Bounding-box grid spaced by the first edge length.
    UniformGrid,
    /// Edge points followed by interior grid points.
    EdgeAndInterior,
}
impl Default for GridMode {
    fn default() -> Self {
        GridMode::EdgeAndInterior
    }
}

/// A point sampled on a face.
/// Edge points carry the index of the edge they lie on; the index is only
/// meaningful against the face that generated the point.
#[derive(Debug, Clone, Copy)]
#[derive(Serialize)]
pub struct SampledPoint {
    position: Vector3,
    kind: PointKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    edge_index: Option<usize>,
}
impl SampledPoint {
    /// Create an edge point lying on the face edge with the given index.
    pub fn on_edge(position: Vector3, edge_index: usize) -> Self {
        SampledPoint{position, kind: PointKind::Edge, edge_index: Some(edge_index)}
    }

    /// Create an interior point.
    pub fn interior(position: Vector3) -> Self {
        SampledPoint{position, kind: PointKind::Interior, edge_index: None}
    }

    /// Get the point position.
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Get the point classification.
    pub fn kind(&self) -> PointKind {
        self.kind
    }

    /// Get the index of the edge this point lies on, if it is an edge point.
    pub fn edge_index(&self) -> Option<usize> {
        self.edge_index
    }

    /// Resolve the edge this point lies on against the face that generated it.
    /// Returns `None` for interior points, or if the index is out of range for
    /// the given face.
    pub fn edge<'f>(&self, face: &'f Face) -> Option<&'f Edge> {
        self.edge_index.and_then(|edge_index| face.edges().get(edge_index))
    }
}

/// X/Y/Z extremes of a face's vertices.
struct BoundingBox {
    min: Vector3,
    max: Vector3,
}
impl BoundingBox {
    fn of_face(face: &Face) -> Self {
        let mut min = face.vertices()[0];
        let mut max = min;
        for vertex in face.vertices().iter() {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }
        BoundingBox{min, max}
    }
}

/// Generate `points_per_edge` evenly spaced points along each edge, endpoints
/// included. Fewer than 2 points per edge yields nothing: a single point has
/// no defined parametric position along an edge.
pub(crate) fn edge_points(face: &Face, points_per_edge: usize) -> Vec<SampledPoint> {
    let mut points = Vec::<SampledPoint>::new();
    if points_per_edge < 2 {
        return points;
    }

    for (edge_index, edge) in face.edges().iter().enumerate() {
        let start = edge.start();
        let span = edge.end() - edge.start();
        for step in 0..points_per_edge {
            let t = step as f64 / (points_per_edge - 1) as f64;
            points.push(SampledPoint::on_edge(start + span * t, edge_index));
        }
    }
    points
}

/// Generate interior grid points, containment-tested.
/// The spacing targets one point per `(points_per_edge - 2)^2`-th of the face
/// area; the grid covers the bounding box with the outermost ring dropped.
pub(crate) fn interior_grid_points(face: &Face, points_per_edge: usize) -> Vec<SampledPoint> {
    let mut points = Vec::<SampledPoint>::new();
    if points_per_edge <= 2 {
        return points;
    }

    // As if the face were a square holding (ppe - 2)^2 interior grid nodes
    let interior_count = (points_per_edge - 2) * (points_per_edge - 2);
    let spacing = (face.area() / interior_count as f64).sqrt();
    if spacing <= 0.0 {
        return points;
    }

    let bbox = BoundingBox::of_face(face);
    let count_x = ((bbox.max.x - bbox.min.x) / spacing).ceil() as usize;
    let count_y = ((bbox.max.y - bbox.min.y) / spacing).ceil() as usize;
    if count_x < 3 || count_y < 3 {
        // No room for nodes once the outer ring is dropped
        return points;
    }

    // Re-fit the spacing so the grid spans the box exactly
    let spacing_x = (bbox.max.x - bbox.min.x) / (count_x - 1) as f64;
    let spacing_y = (bbox.max.y - bbox.min.y) / (count_y - 1) as f64;

    for i in 1..count_x - 1 {
        for j in 1..count_y - 1 {
            let candidate = Vector3::new(
                bbox.min.x + i as f64 * spacing_x,
                bbox.min.y + j as f64 * spacing_y,
                bbox.min.z,
            );
            if face.is_point_inside(&candidate) {
                points.push(SampledPoint::interior(candidate));
            }
        }
    }
    points
}

/// Generate containment-tested points on a uniform bounding-box grid, spaced
/// by the first edge length over `points_per_edge - 1`. The node counts are
/// fixed up front from the box extents rather than accumulating float steps
/// across the box, so the far boundary line is kept or dropped consistently.
pub(crate) fn uniform_grid_points(face: &Face, points_per_edge: usize) -> Vec<SampledPoint> {
    let mut points = Vec::<SampledPoint>::new();
    if points_per_edge < 2 {
        return points;
    }

    let spacing = face.edges()[0].length() / (points_per_edge - 1) as f64;
    if spacing <= 0.0 {
        // Zero-length first edge
        return points;
    }

    let bbox = BoundingBox::of_face(face);
    let count_x = axis_node_count(bbox.max.x - bbox.min.x, spacing);
    let count_y = axis_node_count(bbox.max.y - bbox.min.y, spacing);

    for i in 0..count_x {
        for j in 0..count_y {
            let candidate = Vector3::new(
                bbox.min.x + i as f64 * spacing,
                bbox.min.y + j as f64 * spacing,
                bbox.min.z,
            );
            if face.is_point_inside(&candidate) {
                points.push(SampledPoint::interior(candidate));
            }
        }
    }
    points
}

/// Number of grid nodes along one axis: every multiple of `spacing` from zero
/// through `extent`, tolerating float rounding at the far end.
fn axis_node_count(extent: f64, spacing: f64) -> usize {
    (extent / spacing + GRID_EPS).floor() as usize + 1
}

/// Generate up to `num_points` points spread so each represents roughly equal
/// face area. Builds a full bounding-box grid at `sqrt(area / num_points)`
/// spacing, keeps the contained candidates, and randomly down-samples when
/// the grid over-delivers. Fewer candidates are returned as-is.
pub(crate) fn equal_area_points<R: Rng>(
    face: &Face,
    num_points: usize,
    rng: &mut R,
) -> Vec<SampledPoint> {
    let mut points = Vec::<SampledPoint>::new();
    if num_points == 0 {
        return points;
    }

    let spacing = (face.area() / num_points as f64).sqrt();
    if spacing <= 0.0 {
        return points;
    }

    let bbox = BoundingBox::of_face(face);
    let count_x = ((bbox.max.x - bbox.min.x) / spacing).ceil() as usize;
    let count_y = ((bbox.max.y - bbox.min.y) / spacing).ceil() as usize;
    if count_x < 2 || count_y < 2 {
        // The box is thinner than one grid cell
        return points;
    }
    let spacing_x = (bbox.max.x - bbox.min.x) / (count_x - 1) as f64;
    let spacing_y = (bbox.max.y - bbox.min.y) / (count_y - 1) as f64;

    // Full grid, outer ring included; containment filters the rest
    let mut candidates = Vec::<Vector3>::new();
    for i in 0..count_x {
        for j in 0..count_y {
            let candidate = Vector3::new(
                bbox.min.x + i as f64 * spacing_x,
                bbox.min.y + j as f64 * spacing_y,
                bbox.min.z,
            );
            if face.is_point_inside(&candidate) {
                candidates.push(candidate);
            }
        }
    }

    // More candidates than requested: keep a uniform random subset
    if candidates.len() > num_points {
        candidates.shuffle(rng);
        candidates.truncate(num_points);
    }

    for candidate in candidates.into_iter() {
        points.push(SampledPoint::interior(candidate));
    }
    points
}
