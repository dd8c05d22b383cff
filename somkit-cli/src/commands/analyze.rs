#[cfg(test)]
#[path = "../../tests/unit/commands/analyze_test.rs"]
mod analyze_test;

use super::*;
use somkit::algorithms::som::{LatticeType, SomModel, get_grid_state};
use somkit::analysis::{ModelStatistics, PlaneDistance, get_component_features};
use somkit::dataset::{Dataset, MinMaxNormalization};
use somkit::persistence::load_model;
use somkit_cli::extensions::analyze::{format_distance_matrix, format_unified_distances};

const METRIC_ARG_NAME: &str = "metric";
const LATTICE_ARG_NAME: &str = "lattice";
const UMATRIX_ARG_NAME: &str = "umatrix";
const NORMALIZE_ARG_NAME: &str = "normalize";

pub fn get_analyze_app() -> Command {
    Command::new("analyze")
        .about("Prints fitting statistics and component plane distances of a trained map")
        .arg(get_dataset_arg())
        .arg(get_models_arg())
        .arg(get_name_arg())
        .arg(
            Arg::new(METRIC_ARG_NAME)
                .help("Specifies a distance between component planes")
                .long(METRIC_ARG_NAME)
                .value_parser(["pearson", "euclidean", "cosine"])
                .default_value("pearson")
                .required(false),
        )
        .arg(
            Arg::new(LATTICE_ARG_NAME)
                .help("Specifies lattice type the model was trained with")
                .short('l')
                .long(LATTICE_ARG_NAME)
                .value_parser(["rect", "rectangular", "hex", "hexagonal"])
                .default_value("rect")
                .required(false),
        )
        .arg(get_flag_arg(NORMALIZE_ARG_NAME, "Scales every dataset dimension into [0, 1] as it was done for training"))
        .arg(get_flag_arg(UMATRIX_ARG_NAME, "Prints unified distances of the map"))
}

pub fn run_analyze(matches: &ArgMatches) -> Result<(), String> {
    let metric = PlaneDistance::try_from(get_required_value(matches, METRIC_ARG_NAME)?.as_str())?;
    let (model, dataset) = get_model_and_dataset(matches)?;

    let logger = create_logger();

    let statistics = ModelStatistics::compute(&model, &dataset).map_err(|err| err.to_string())?;
    (logger)(&format!("{statistics}"));

    let features = get_component_features(&model, dataset.names(), metric).map_err(|err| err.to_string())?;
    (logger)(&format!("component plane distances ({metric}):\n{}", format_distance_matrix(features.as_slice())));

    if matches.get_flag(UMATRIX_ARG_NAME) {
        (logger)(&format!("unified distances:\n{}", format_unified_distances(&get_grid_state(&model))));
    }

    Ok(())
}

/// Loads the saved model and the dataset, prepared the same way as for training.
fn get_model_and_dataset(matches: &ArgMatches) -> Result<(SomModel, VectorDataset), String> {
    let (models_dir, name) = get_models_location(matches)?;
    let lattice = LatticeType::try_from(get_required_value(matches, LATTICE_ARG_NAME)?.as_str())?;

    let mut dataset = read_dataset(matches)?;
    if matches.get_flag(NORMALIZE_ARG_NAME) {
        let normalization = MinMaxNormalization::new(&dataset);
        dataset.normalize(&normalization);
    }

    let model = load_model(models_dir.as_path(), &name, lattice)
        .map_err(|err| format!("cannot load model '{name}': '{err}'"))?
        .ok_or_else(|| format!("model '{name}' is not found in '{}'", models_dir.display()))?;

    if model.dimension() != dataset.dimension() {
        return Err(format!(
            "model '{name}' has dimension {}, dataset has {}",
            model.dimension(),
            dataset.dimension()
        ));
    }

    Ok((model, dataset))
}
