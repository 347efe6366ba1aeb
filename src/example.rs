use strum::IntoEnumIterator;

use crate::{
    args,
    seed,
    err_str,
    FaceseedResult,
};
use crate::geo_3d::{GridMode, Vector3};
use crate::seed::SeedMethod;

/// Construct the full example config for a method: an unordered unit square
/// with a placeholder output path.
fn construct_example_cfg(method: seed::MethodEnum) -> seed::SeedTarget {
    seed::SeedTarget{
        vertices: vec![
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        ],
        method,
        output_path: Some("OPTIONAL/PATH/TO/POINTS.json".to_string()),
    }
}

/// Display an example config file for a seeding method.
/// With no method given, lists the available methods and grid modes instead.
/// Returns a `FaceseedResult` with `()` or an `Err`.
pub fn display_config(example_args: &args::ExampleArgs) -> FaceseedResult<()> {
    let method_names: Vec<String> = seed::MethodEnum::iter()
        .map(|method| method.get_method_name())
        .collect();

    let target_name = match example_args.method.as_ref() {
        Some(target_name) => target_name,
        None => {
            println!("Available methods:");
            for method_name in method_names.iter() {
                println!("- {}", method_name);
            }
            println!("Available point_grid modes:");
            for mode in GridMode::iter() {
                let mode_name = serde_yaml::to_string(&mode)
                    .map_err(|error| error.to_string())?;
                // serde_yaml strings end with a newline already
                print!("- {}", mode_name);
            }
            return Ok(());
        },
    };

    match seed::MethodEnum::iter().find(|method| &method.get_method_name() == target_name) {
        Some(method) => {
            let example_cfg = construct_example_cfg(method);
            let cfg_str = match example_args.format {
                args::Format::Yaml => serde_yaml::to_string(&example_cfg)
                    .map_err(|error| error.to_string())?,
                args::Format::Json => serde_json::to_string_pretty(&example_cfg)
                    .map_err(|error| error.to_string())?,
                args::Format::Toml => toml::to_string_pretty(&example_cfg)
                    .map_err(|error| error.to_string())?,
            };
            println!("{}", cfg_str);
            Ok(())
        },
        None => {
            err_str(&format!(
                "Method \"{}\" not found. Available methods: {:?}",
                target_name, method_names,
            ))
        },
    }
}
