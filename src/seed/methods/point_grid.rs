/*!
*   Fixed-density point grid seeding method.
*   Wraps `Face::generate_point_grid`: evenly spaced edge points and/or an
*   area-scaled interior grid, selected by the mode.
*
!*/

use serde::{Serialize, Deserialize};

use crate::geo_3d::{Face, GridMode, SampledPoint};
use crate::seed::methods;

/// Point grid method struct.
/// Contains the parameters for the point grid seeding method.
#[derive(Debug)]
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Method {
    /// Points per edge. Edge sampling splits each edge into
    /// `points_per_edge - 1` segments; the interior grid scales itself from
    /// `(points_per_edge - 2)^2` area targets.
    #[serde(default = "Method::default_points_per_edge", alias = "points")]
    pub points_per_edge: usize,

    /// Point distribution mode.
    #[serde(default)]
    pub mode: GridMode,
}
impl Method {
    pub fn default_points_per_edge() -> usize {
        7
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            points_per_edge: Self::default_points_per_edge(),
            mode: GridMode::default(),
        }
    }
}

impl methods::SeedMethod for Method {
    fn get_method_name(&self) -> String {
        "point_grid".to_string()
    }

    fn seed_face(&self, face: &Face) -> Vec<SampledPoint> {
        face.generate_point_grid(self.points_per_edge, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_3d::Vector3;
    use crate::seed::methods::SeedMethod;

    #[test]
    fn defaults_give_edge_and_interior() {
        let method = Method::default();
        assert_eq!(method.points_per_edge, 7);
        assert_eq!(method.mode, GridMode::EdgeAndInterior);
    }

    #[test]
    fn seeds_by_the_configured_mode() {
        let face = Face::from_vertices(&[
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]).unwrap();
        let method = Method{points_per_edge: 3, mode: GridMode::EdgeOnly};
        let points = method.seed_face(&face);
        assert_eq!(points.len(), 9);
    }

    #[test]
    fn parses_with_defaults_and_aliases() {
        let method: Method = serde_yaml::from_str("points: 5\n").unwrap();
        assert_eq!(method.points_per_edge, 5);
        assert_eq!(method.mode, GridMode::EdgeAndInterior);

        let method: Method = serde_yaml::from_str("mode: uniform_grid\n").unwrap();
        assert_eq!(method.points_per_edge, 7);
        assert_eq!(method.mode, GridMode::UniformGrid);
    }
}
