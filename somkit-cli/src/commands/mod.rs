use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod analyze;
pub mod train;

use somkit::dataset::VectorDataset;
use somkit::prelude::InfoLogger;
use somkit_cli::extensions::dataset::read_csv_dataset;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

const DATASET_ARG_NAME: &str = "DATASET";
const MODELS_ARG_NAME: &str = "models";
const NAME_ARG_NAME: &str = "name";

fn get_dataset_arg() -> Arg {
    Arg::new(DATASET_ARG_NAME).help("Sets the csv dataset file to use").required(true).index(1)
}

fn get_models_arg() -> Arg {
    Arg::new(MODELS_ARG_NAME)
        .help("Specifies a directory with saved models")
        .short('m')
        .long(MODELS_ARG_NAME)
        .default_value("models")
        .required(false)
}

fn get_name_arg() -> Arg {
    Arg::new(NAME_ARG_NAME)
        .help("Specifies a model name used as a file name")
        .short('n')
        .long(NAME_ARG_NAME)
        .default_value("som")
        .required(false)
}

fn get_flag_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).long(name).action(ArgAction::SetTrue).required(false)
}

fn get_required_value<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a String, String> {
    matches.get_one::<String>(arg_name).ok_or_else(|| format!("argument '{arg_name}' is required"))
}

fn get_models_location(matches: &ArgMatches) -> Result<(PathBuf, String), String> {
    let dir = PathBuf::from(get_required_value(matches, MODELS_ARG_NAME)?);
    let name = get_required_value(matches, NAME_ARG_NAME)?.clone();

    Ok((dir, name))
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn read_dataset(matches: &ArgMatches) -> Result<VectorDataset, String> {
    let path = get_required_value(matches, DATASET_ARG_NAME)?;

    read_csv_dataset(BufReader::new(open_file(path, "dataset")?))
        .map_err(|err| format!("cannot read dataset from '{path}': '{err}'"))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn create_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}
