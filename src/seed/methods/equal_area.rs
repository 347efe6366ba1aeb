/*!
*   Equal-area seeding method.
*   Wraps `Face::generate_equal_area_points`: a bounding-box grid sized so
*   each contained point stands for roughly equal face area, randomly
*   down-sampled to the requested count when the grid over-delivers.
*
!*/

use serde::{Serialize, Deserialize};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::geo_3d::{Face, SampledPoint};
use crate::seed::methods;

/// Equal area method struct.
/// Contains the parameters for the equal area seeding method.
#[derive(Debug)]
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Method {
    /// Number of points to aim for. The result never exceeds this count, but
    /// may fall short on small or degenerate faces.
    #[serde(default = "Method::default_num_points", alias = "count")]
    pub num_points: usize,

    /// RNG seed for the down-sampling step.
    /// Leave unset for a fresh entropy-seeded run; set it for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
}
impl Method {
    pub fn default_num_points() -> usize {
        16
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            num_points: Self::default_num_points(),
            seed: None,
        }
    }
}

impl methods::SeedMethod for Method {
    fn get_method_name(&self) -> String {
        "equal_area".to_string()
    }

    fn seed_face(&self, face: &Face) -> Vec<SampledPoint> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        face.generate_equal_area_points(self.num_points, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_3d::Vector3;
    use crate::seed::methods::SeedMethod;

    fn thin_triangle() -> Face {
        Face::from_vertices(&[
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]).unwrap()
    }

    #[test]
    fn same_seed_gives_the_same_points() {
        let face = thin_triangle();
        let method = Method{num_points: 4, seed: Some(11)};
        let first: Vec<Vector3> = method.seed_face(&face).iter()
            .map(|point| point.position())
            .collect();
        let second: Vec<Vector3> = method.seed_face(&face).iter()
            .map(|point| point.position())
            .collect();
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_runs_still_respect_the_count() {
        let face = thin_triangle();
        let method = Method{num_points: 4, seed: None};
        assert_eq!(method.seed_face(&face).len(), 4);
    }

    #[test]
    fn parses_with_defaults_and_aliases() {
        let method: Method = serde_yaml::from_str("{}\n").unwrap();
        assert_eq!(method.num_points, 16);
        assert_eq!(method.seed, None);

        let method: Method = serde_yaml::from_str("count: 3\nseed: 42\n").unwrap();
        assert_eq!(method.num_points, 3);
        assert_eq!(method.seed, Some(42));
    }
}
