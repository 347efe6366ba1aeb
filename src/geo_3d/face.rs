use itertools::concat;
use rand::Rng;

use crate::geo_3d::{Edge, Vector3};
use crate::geo_3d::sampling::{self, GridMode, SampledPoint};

/// Face construction error type.
#[derive(Debug)]
pub enum FaceError {
    /// Wrong number of vertices. Only triangles and quadrilaterals are supported.
    VertexCount(usize),
}
impl std::fmt::Display for FaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceError::VertexCount(count) => {
                write!(f, "face requires 3 or 4 vertices, got {}", count)
            },
        }
    }
}
impl std::error::Error for FaceError {}

/// A planar polygonal face in 3D space: a triangle or a convex quadrilateral.
/// Owns its ordered vertices, the derived boundary edges, and the derived unit
/// normal. A face is constructed whole and never edited in place; build a new
/// face to change the vertices.
#[derive(Debug)]
pub struct Face {
    vertices: Vec<Vector3>,
    edges: Vec<Edge>,
    normal: Vector3,
}
impl Face {
    /// Construct a face from 3 or 4 vertices.
    /// Triangle vertices are kept in input order. Quadrilateral vertices are
    /// sorted by angle around their centroid (X/Y components only), so any
    /// input order produces the same non-self-intersecting boundary.
    pub fn from_vertices(vertices: &[Vector3]) -> Result<Self, FaceError> {
        if vertices.len() != 3 && vertices.len() != 4 {
            return Err(FaceError::VertexCount(vertices.len()));
        }

        let mut vertices = vertices.to_vec();
        if vertices.len() == 4 {
            sort_quad_vertices(&mut vertices);
        }
        let edges = connect_vertices(&vertices);
        let normal = derive_normal(&vertices);

        Ok(Face{vertices, edges, normal})
    }

    /// Get the face vertices, in boundary order.
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    /// Get the face edges. Edge `i` joins vertices `i` and `(i + 1) % n`.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get the unit normal.
    /// The zero vector if the vertices are degenerate (collinear or repeated).
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Calculate the face area.
    /// A quadrilateral is split into two triangles along the v0-v2 diagonal,
    /// which is interior for any convex quad.
    pub fn area(&self) -> f64 {
        match self.vertices.len() {
            3 => triangle_area(&self.vertices[0], &self.vertices[1], &self.vertices[2]),
            _ => {
                triangle_area(&self.vertices[0], &self.vertices[1], &self.vertices[2])
                    + triangle_area(&self.vertices[0], &self.vertices[2], &self.vertices[3])
            },
        }
    }

    /// Calculate the face perimeter.
    pub fn perimeter(&self) -> f64 {
        self.edges.iter().map(|edge| edge.length()).sum()
    }

    /// Calculate the face center.
    /// The arithmetic mean of the vertices, not the area centroid.
    pub fn center(&self) -> Vector3 {
        let mut sum = Vector3::zero();
        for vertex in self.vertices.iter() {
            sum += *vertex;
        }
        sum / self.vertices.len() as f64
    }

    /// Check whether a point lies inside the face.
    /// The point is projected onto the face plane along the normal, then
    /// tested with even-odd ray casting on the X/Y components. Like the quad
    /// sort, the test works on the X/Y shadow of the face, so a face that
    /// collapses to a line in that projection rejects everything.
    pub fn is_point_inside(&self, point: &Vector3) -> bool {
        let offset = (*point - self.vertices[0]).dot(&self.normal);
        let projected = *point - self.normal * offset;

        // Cast a +X ray from the projected point and count edge crossings
        let mut crossings = 0;
        for edge in self.edges.iter() {
            let start = edge.start();
            let end = edge.end();
            if (start.y > projected.y) != (end.y > projected.y) {
                let intersect_x =
                    (end.x - start.x) * (projected.y - start.y) / (end.y - start.y) + start.x;
                if projected.x < intersect_x {
                    crossings += 1;
                }
            }
        }
        crossings % 2 == 1
    }

    /// Generate a grid of sampled points across the face.
    /// `points_per_edge` sets the sampling density; `mode` selects edge
    /// points, interior points, a bounding-box grid, or edges plus interior.
    /// Densities too low for a mode yield an empty set for that part.
    pub fn generate_point_grid(&self, points_per_edge: usize, mode: GridMode) -> Vec<SampledPoint> {
        match mode {
            GridMode::EdgeOnly => sampling::edge_points(self, points_per_edge),
            GridMode::InteriorOnly => sampling::interior_grid_points(self, points_per_edge),
            GridMode::UniformGrid => sampling::uniform_grid_points(self, points_per_edge),
            GridMode::EdgeAndInterior => concat(vec![
                sampling::edge_points(self, points_per_edge),
                sampling::interior_grid_points(self, points_per_edge),
            ]),
        }
    }

    /// Generate up to `num_points` points spread so each represents roughly
    /// equal face area. When the underlying grid yields more candidates than
    /// requested, a uniform random subset is kept; the caller provides the
    /// source of randomness, so a seeded generator gives reproducible output.
    pub fn generate_equal_area_points<R: Rng>(
        &self,
        num_points: usize,
        rng: &mut R,
    ) -> Vec<SampledPoint> {
        sampling::equal_area_points(self, num_points, rng)
    }
}

/// Unsigned area of the triangle spanned by three corners.
fn triangle_area(a: &Vector3, b: &Vector3, c: &Vector3) -> f64 {
    0.5 * (*b - *a).cross(&(*c - *a)).norm()
}

/// Sort quadrilateral vertices by angle about their centroid.
/// The angle is measured in the X/Y plane only, from the negative X axis, so
/// tilted quads are ordered by their X/Y shadow.
fn sort_quad_vertices(vertices: &mut [Vector3]) {
    let mut center = Vector3::zero();
    for vertex in vertices.iter() {
        center += *vertex;
    }
    let center = center / vertices.len() as f64;

    vertices.sort_by(|a, b| {
        let angle_a = (a.y - center.y).atan2(-(a.x - center.x));
        let angle_b = (b.y - center.y).atan2(-(b.x - center.x));
        angle_a.total_cmp(&angle_b)
    });
}

/// Connect consecutive vertices into a closed loop of edges.
fn connect_vertices(vertices: &[Vector3]) -> Vec<Edge> {
    let mut edges = Vec::<Edge>::new();
    for (vertex_id, vertex) in vertices.iter().enumerate() {
        let next_id = (vertex_id + 1) % vertices.len();
        edges.push(Edge::new(*vertex, vertices[next_id]));
    }
    edges
}

/// Unit normal from the first three vertices.
/// The zero vector if they are collinear or repeated.
fn derive_normal(vertices: &[Vector3]) -> Vector3 {
    let normal = (vertices[1] - vertices[0]).cross(&(vertices[2] - vertices[0]));
    let magnitude = normal.norm();
    if magnitude > 0.0 {
        normal / magnitude
    }
    else {
        Vector3::zero()
    }
}
