pub mod seed;
pub mod args;
pub mod io;
pub mod geo_3d;
mod crate_errors;
mod example;

pub use crate_errors::{
    FaceseedError,
    FaceseedResult,
    err_str,
};

/// Dispatch a parsed command line to the matching process.
/// Returns a `FaceseedResult` with `()` or an `Err`.
pub fn run(cli_args: args::FaceseedCli) -> FaceseedResult<()> {
    match cli_args.sub_command {
        args::CliCommand::Run(run_args) => run_seeding(&run_args),
        args::CliCommand::Inspect(inspect_args) => inspect_face(&inspect_args),
        args::CliCommand::Example(example_args) => example::display_config(&example_args),
    }
}

/// Run the seeding process from a config file:
/// construct the face, generate the points, print the report, and save the
/// points when the target names an output path.
/// Returns a `FaceseedResult` with `()` or an `Err`.
pub fn run_seeding(run_args: &args::RunArgs) -> FaceseedResult<()> {
    println!("Loading seeding config file: {}...", run_args.cfg_path);
    let target = seed::SeedTarget::from_cfg_file(&run_args.cfg_path)?;

    let report = seed::do_seed(&target)?;
    seed::describe_face(&report.face, run_args.shared_args.precision);

    if run_args.quiet {
        println!("Generated {} seed points.", report.points.len());
    }
    else {
        seed::print_points(&report, run_args.shared_args.precision);
    }

    if let Some(output_path) = target.output_path.as_ref() {
        seed::save_points(&report.points, output_path)?;
    }

    Ok(())
}

/// Construct the face from a config file and print its metrics, skipping the
/// seeding method entirely.
/// Returns a `FaceseedResult` with `()` or an `Err`.
pub fn inspect_face(inspect_args: &args::InspectArgs) -> FaceseedResult<()> {
    println!("Loading seeding config file: {}...", inspect_args.cfg_path);
    let target = seed::SeedTarget::from_cfg_file(&inspect_args.cfg_path)?;

    let face = seed::build_face(&target)?;
    seed::describe_face(&face, inspect_args.shared_args.precision);

    Ok(())
}

/// Top-level tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_3d::Vector3;
    use crate::seed::SeedMethod;

    #[test]
    fn default_target_seeds_a_triangle() {
        let target = seed::SeedTarget{
            vertices: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            method: seed::MethodEnum::default(),
            output_path: None,
        };
        assert_eq!(target.method.get_method_name(), "point_grid");
        let report = seed::do_seed(&target).unwrap();
        assert!(report.points.len() > 0);
    }
}
