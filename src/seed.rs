mod proc_errors;
mod cfg;
mod methods;

use crate::geo_3d::{Face, PointKind, SampledPoint};

// Re-export errors
pub use proc_errors::{
    SeedError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::SeedTarget;
// Re-export seeding methods
pub use methods::{
    MethodEnum,
    SeedMethod,
};

/// Seed report struct.
/// Contains the constructed face and the points generated across it.
/// Returned from the seeding process; the points are the saveable product.
#[derive(Debug)]
pub struct SeedReport {
    pub face: Face,
    pub points: Vec<SampledPoint>,
}

/// Construct the face described by a seeding target.
pub fn build_face(target: &SeedTarget) -> ProcResult<Face> {
    Ok(Face::from_vertices(&target.vertices)?)
}

/// Run the seeding process.
/// Returns a `ProcResult` with the `SeedReport` or an `Err`.
pub fn do_seed(target: &SeedTarget) -> ProcResult<SeedReport> {
    println!("Constructing face from {} vertices...", target.vertices.len());
    let face = build_face(target)?;

    println!("Running seeding method: {}...", target.method.get_method_name());
    let points = target.method.seed_face(&face);

    Ok(SeedReport{face, points})
}

/// Print the derived face metrics.
pub fn describe_face(face: &Face, precision: usize) {
    println!("Face with {} vertices:", face.vertices().len());
    for vertex in face.vertices().iter() {
        println!("- {:.*}", precision, vertex);
    }
    println!("Edges:");
    for edge in face.edges().iter() {
        println!("- {:.*} (length: {:.*})", precision, edge, precision, edge.length());
    }
    println!("Normal: {:.*}", precision, face.normal());
    println!("Area: {:.*}", precision, face.area());
    println!("Perimeter: {:.*}", precision, face.perimeter());
    println!("Center: {:.*}", precision, face.center());
}

/// Print the generated points, with edge back-references resolved.
pub fn print_points(report: &SeedReport, precision: usize) {
    println!("Generated {} seed points:", report.points.len());
    for (point_id, point) in report.points.iter().enumerate() {
        match point.kind() {
            PointKind::Edge => {
                // Points from a report always resolve against the report's face
                let length = point.edge(&report.face)
                    .map(|edge| edge.length())
                    .unwrap_or(0.0);
                println!(
                    "Point {} at {:.*} - edge point (edge length: {:.*})",
                    point_id + 1, precision, point.position(), precision, length,
                );
            },
            PointKind::Interior => {
                println!(
                    "Point {} at {:.*} - interior point",
                    point_id + 1, precision, point.position(),
                );
            },
        }
    }
}

/// Save the generated points to a JSON file.
pub fn save_points(points: &[SampledPoint], output_path: &str) -> ProcResult<()> {
    println!("Saving {} seed points to {}...", points.len(), output_path);
    crate::io::write_json_file(output_path, &points)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_3d::Vector3;

    #[test]
    fn do_seed_reports_face_and_points() {
        let target = SeedTarget{
            vertices: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            method: MethodEnum::default(),
            output_path: None,
        };
        let report = do_seed(&target).unwrap();
        assert_eq!(report.face.vertices().len(), 3);
        // Default method: 7 per edge on 3 edges, plus a non-empty interior
        assert!(report.points.len() > 21);
    }

    #[test]
    fn do_seed_rejects_bad_vertex_counts() {
        let target = SeedTarget{
            vertices: vec![Vector3::zero(), Vector3::xhat()],
            method: MethodEnum::default(),
            output_path: None,
        };
        let result = do_seed(&target);
        assert!(matches!(result, Err(SeedError::FaceError(_))));
    }
}
