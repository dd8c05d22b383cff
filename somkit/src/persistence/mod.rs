//! This module contains a json based storage of trained prototype grids.
//!
//! Only prototypes are persisted: lattice, metric and training state are supplied by the caller
//! when the model is restored.

#[cfg(test)]
#[path = "../../tests/unit/persistence/persistence_test.rs"]
mod persistence_test;

use crate::algorithms::som::*;
use crate::utils::{Float, GenericResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// A serializable representation of the prototype grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Input dimensionality.
    pub dimension: usize,
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Prototype values flattened in row-major order.
    pub prototypes: Vec<Float>,
}

impl From<&PrototypeGrid> for ModelRecord {
    fn from(grid: &PrototypeGrid) -> Self {
        Self { dimension: grid.dimension(), width: grid.width(), height: grid.height(), prototypes: grid.flatten() }
    }
}

impl TryFrom<ModelRecord> for PrototypeGrid {
    type Error = crate::utils::GenericError;

    fn try_from(record: ModelRecord) -> Result<Self, Self::Error> {
        let expected = record.width * record.height * record.dimension;
        if record.prototypes.len() != expected || record.dimension == 0 {
            return Err(format!(
                "corrupted model record: {}x{}x{} grid requires {expected} values, got {}",
                record.width,
                record.height,
                record.dimension,
                record.prototypes.len()
            )
            .into());
        }

        let cells = record.prototypes.chunks(record.dimension).map(|chunk| chunk.to_vec()).collect();

        PrototypeGrid::new(record.width, record.height, record.dimension, cells)
    }
}

/// Serializes grid into json format.
pub fn serialize_grid<W: Write>(mut writer: BufWriter<W>, grid: &PrototypeGrid) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, &ModelRecord::from(grid))?;
    writer.flush()?;

    Ok(())
}

/// Deserializes grid from json format.
pub fn deserialize_grid<R: Read>(reader: BufReader<R>) -> GenericResult<PrototypeGrid> {
    let record: ModelRecord = serde_json::from_reader(reader)?;

    PrototypeGrid::try_from(record)
}

/// Saves model prototypes to `<dir>/<name>.json` and returns the file path.
pub fn save_model(dir: &Path, name: &str, model: &SomModel) -> GenericResult<PathBuf> {
    let path = get_model_path(dir, name, "json");
    let file = File::create(&path).map_err(|err| format!("cannot create '{}': {err}", path.display()))?;

    serialize_grid(BufWriter::new(file), model.grid())?;

    Ok(path)
}

/// Loads prototypes from `<dir>/<name>.json`. Returns `Ok(None)` if no model was saved before.
pub fn load_grid(dir: &Path, name: &str) -> GenericResult<Option<PrototypeGrid>> {
    let path = get_model_path(dir, name, "json");

    if !path.is_file() {
        return Ok(None);
    }

    let file = File::open(&path).map_err(|err| format!("cannot open '{}': {err}", path.display()))?;

    deserialize_grid(BufReader::new(file))
        .map(Some)
        .map_err(|err| format!("cannot read model '{}': {err}", path.display()).into())
}

/// Loads a model from `<dir>/<name>.json` using given lattice, euclidean distance and gaussian
/// neighborhood. Returns `Ok(None)` if no model was saved before, so the caller can start from
/// a random initialization instead.
pub fn load_model(dir: &Path, name: &str, lattice: LatticeType) -> GenericResult<Option<SomModel>> {
    load_grid(dir, name)?
        .map(|grid| {
            let config = SomConfig::new(grid.width(), grid.height(), grid.dimension(), lattice);
            SomModel::new(config, grid)
        })
        .transpose()
}

/// Writes a human-readable dump of the model to `<dir>/<name>.txt` and returns the file path.
pub fn print_model(dir: &Path, name: &str, model: &SomModel) -> GenericResult<PathBuf> {
    let path = get_model_path(dir, name, "txt");
    let file = File::create(&path).map_err(|err| format!("cannot create '{}': {err}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_model(&mut writer, model)?;
    writer.flush()?;

    Ok(path)
}

/// Writes a human-readable dump of the model: a header line and one line per cell.
pub fn write_model<W: Write>(writer: &mut W, model: &SomModel) -> GenericResult<()> {
    writeln!(
        writer,
        "lattice: {}, width: {}, height: {}, dimension: {}",
        model.lattice().kind(),
        model.width(),
        model.height(),
        model.dimension()
    )?;

    for (coordinate, prototype) in model.grid().iter() {
        let values = prototype.iter().map(|value| format!("{value:.6}")).collect::<Vec<_>>().join(" ");
        writeln!(writer, "{coordinate} {values}")?;
    }

    Ok(())
}

fn get_model_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}
