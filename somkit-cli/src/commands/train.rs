#[cfg(test)]
#[path = "../../tests/unit/commands/train_test.rs"]
mod train_test;

use super::*;
use somkit::algorithms::som::LatticeType;
use somkit::analysis::ModelStatistics;
use somkit::dataset::{Dataset, MinMaxNormalization};
use somkit::persistence::{print_model, save_model};
use somkit::utils::*;
use somkit_cli::extensions::config::{Config, read_config};
use somkit_cli::extensions::interruption::create_interruption_quota;
use somkit_cli::extensions::train::{MapShape, get_model, train_model};
use std::fs;

const CONFIG_ARG_NAME: &str = "config";
const WIDTH_ARG_NAME: &str = "width";
const HEIGHT_ARG_NAME: &str = "height";
const LATTICE_ARG_NAME: &str = "lattice";
const EPOCHS_ARG_NAME: &str = "epochs";
const SEED_ARG_NAME: &str = "seed";
const TIME_ARG_NAME: &str = "max-time";
const THREADS_ARG_NAME: &str = "threads";
const NORMALIZE_ARG_NAME: &str = "normalize";
const SHUFFLE_ARG_NAME: &str = "shuffle";
const PRINT_ARG_NAME: &str = "print";

pub fn get_train_app() -> Command {
    Command::new("train")
        .about("Trains a self-organizing map on a csv dataset")
        .arg(get_dataset_arg())
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to a json config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(WIDTH_ARG_NAME)
                .help("Specifies width of a new map. Default is 40")
                .long(WIDTH_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(HEIGHT_ARG_NAME)
                .help("Specifies height of a new map. Default is 20")
                .long(HEIGHT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LATTICE_ARG_NAME)
                .help("Specifies lattice type")
                .short('l')
                .long(LATTICE_ARG_NAME)
                .value_parser(["rect", "rectangular", "hex", "hexagonal"])
                .required(false),
        )
        .arg(
            Arg::new(EPOCHS_ARG_NAME)
                .help("Specifies amount of passes over the dataset for the streaming trainer. Default is 100")
                .short('e')
                .long(EPOCHS_ARG_NAME)
                .required(false),
        )
        .arg(get_models_arg())
        .arg(get_name_arg())
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies a seed of random initialization and shuffling")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of training in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies amount of threads used by training. Default is amount of cpus")
                .long(THREADS_ARG_NAME)
                .required(false),
        )
        .arg(get_flag_arg(NORMALIZE_ARG_NAME, "Scales every dataset dimension into [0, 1] before training"))
        .arg(get_flag_arg(SHUFFLE_ARG_NAME, "Shuffles dataset before training"))
        .arg(get_flag_arg(PRINT_ARG_NAME, "Writes a human-readable dump of the trained model"))
}

pub fn run_train(matches: &ArgMatches) -> Result<(), String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| {
            open_file(path, "config")
                .and_then(|file| read_config(BufReader::new(file)).map_err(|err| err.to_string()))
        })
        .transpose()?
        .unwrap_or_default();

    let width = parse_int_value::<usize>(matches, WIDTH_ARG_NAME, "map width")?;
    let height = parse_int_value::<usize>(matches, HEIGHT_ARG_NAME, "map height")?;
    let lattice =
        matches.get_one::<String>(LATTICE_ARG_NAME).map(|value| LatticeType::try_from(value.as_str())).transpose()?;
    let epochs = parse_int_value::<usize>(matches, EPOCHS_ARG_NAME, "epochs")?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")?;
    let max_time = parse_float_value::<Float>(matches, TIME_ARG_NAME, "max time")?;
    let threads = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "threads")?.unwrap_or_else(get_cpus);
    let (models_dir, name) = get_models_location(matches)?;

    let random: Arc<dyn Random + Send + Sync> = match seed {
        Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let quota = create_interruption_quota(max_time).map_err(|err| err.to_string())?;
    let environment = Arc::new(Environment::new(random, Some(quota), create_logger()));

    let mut dataset = read_dataset(matches)?;
    if matches.get_flag(NORMALIZE_ARG_NAME) {
        let normalization = MinMaxNormalization::new(&dataset);
        dataset.normalize(&normalization);
    }
    if matches.get_flag(SHUFFLE_ARG_NAME) {
        dataset.shuffle(environment.random.as_ref());
    }

    let Config { map, training } = config;
    let shape = MapShape::new(map.as_ref(), width, height, lattice);
    let training = training.unwrap_or_default();

    let pool = ThreadPool::new(threads).map_err(|err| format!("cannot create thread pool: '{err}'"))?;
    let (model, summary) = pool
        .execute(|| -> GenericResult<_> {
            let mut model = get_model(&shape, dataset.dimension(), models_dir.as_path(), &name, environment.as_ref())?;
            let summary = train_model(&mut model, &dataset, &training, epochs, environment.clone())?;

            Ok((model, summary))
        })
        .map_err(|err| format!("cannot train model: '{err}'"))?;

    (environment.logger)(&format!("training summary: {summary}"));

    fs::create_dir_all(models_dir.as_path())
        .map_err(|err| format!("cannot create models directory '{}': '{err}'", models_dir.display()))?;
    let path = save_model(models_dir.as_path(), &name, &model).map_err(|err| err.to_string())?;
    (environment.logger)(&format!("model is saved to '{}'", path.display()));

    if matches.get_flag(PRINT_ARG_NAME) {
        let path = print_model(models_dir.as_path(), &name, &model).map_err(|err| err.to_string())?;
        (environment.logger)(&format!("model is printed to '{}'", path.display()));
    }

    let statistics = ModelStatistics::compute(&model, &dataset).map_err(|err| err.to_string())?;
    (environment.logger)(&format!("{statistics}"));

    Ok(())
}
