/*!
 * This is the seeding methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A source file with a struct implementing `SeedMethod`
 * - An enum variant containing that struct in `MethodEnum`
 *
 * The variant tag doubles as the method name in config files.
 *
 */

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};
use strum::EnumIter;

use crate::geo_3d::{Face, SampledPoint};

// Source files for the seeding methods
mod point_grid;
mod equal_area;

/// Seeding method trait.
/// This trait must be implemented for all seeding methods.
/// To add a new method:
/// implement this trait for it,
/// and include it in the `MethodEnum` enum.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait SeedMethod {
    /// Get the name of the seeding method.
    fn get_method_name(&self) -> String;

    /// Generate the seed points for a constructed face.
    fn seed_face(&self, face: &Face) -> Vec<SampledPoint>;
}

/// Seeding methods enum.
/// To add a new method:
/// implement the `SeedMethod` trait for it,
/// and include it here.
#[derive(Debug, EnumIter)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[enum_dispatch(SeedMethod)]
pub enum MethodEnum {
    /// Edge and/or interior point grids at a fixed density per edge.
    PointGrid(point_grid::Method),
    /// Randomly down-sampled grid with roughly equal area per point.
    EqualArea(equal_area::Method),
}
impl Default for MethodEnum {
    fn default() -> Self {
        MethodEnum::PointGrid(point_grid::Method::default())
    }
}
