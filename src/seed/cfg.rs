use serde::{Serialize, Deserialize};

use crate::geo_3d::Vector3;
use crate::seed::{
    err_str,
    MethodEnum,
    ProcResult,
};

/// A seeding target: the face vertices, the seeding method, and an optional
/// output destination for the generated points.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedTarget {
    /// Face vertices (3 or 4), in any order.
    pub vertices: Vec<Vector3>,

    /// Seeding method and its parameters.
    #[serde(default)]
    pub method: MethodEnum,

    /// Output path for the generated points (must be json).
    #[serde(default, alias = "output", alias = "out", alias = "o")]
    pub output_path: Option<String>,
}
impl SeedTarget {
    /// Construct a seeding target from a config file (.json/.toml/.yaml/.yml).
    pub fn from_cfg_file(cfg_file: &str) -> ProcResult<Self> {
        let target: SeedTarget = crate::io::read_cfg_file(cfg_file)?;

        // Check the output path up front, not after a full run
        if let Some(output_path) = target.output_path.as_ref() {
            if !output_path.ends_with(".json") {
                err_str(&format!("Output path must be a .json file: {}", output_path))?;
            }
        }

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedMethod;

    #[test]
    fn minimal_cfg_gets_the_default_method() {
        let cfg = "vertices:\n- {x: 0.0, y: 0.0, z: 0.0}\n- {x: 1.0, y: 0.0, z: 0.0}\n- {x: 0.0, y: 1.0, z: 0.0}\n";
        let target: SeedTarget = serde_yaml::from_str(cfg).unwrap();
        assert_eq!(target.vertices.len(), 3);
        assert_eq!(target.method.get_method_name(), "point_grid");
        assert_eq!(target.output_path, None);
    }

    #[test]
    fn method_and_output_aliases_parse() {
        let cfg = concat!(
            "vertices:\n",
            "- {x: 0.0, y: 0.0, z: 0.0}\n",
            "- {x: 1.0, y: 0.0, z: 0.0}\n",
            "- {x: 0.0, y: 1.0, z: 0.0}\n",
            "method: !equal_area\n",
            "  count: 12\n",
            "  seed: 9\n",
            "out: points.json\n",
        );
        let target: SeedTarget = serde_yaml::from_str(cfg).unwrap();
        assert_eq!(target.method.get_method_name(), "equal_area");
        assert_eq!(target.output_path.as_deref(), Some("points.json"));
        match target.method {
            MethodEnum::EqualArea(method) => {
                assert_eq!(method.num_points, 12);
                assert_eq!(method.seed, Some(9));
            },
            _ => panic!("wrong method variant"),
        }
    }
}
