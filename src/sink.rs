use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use failure::Error;
use log::debug;
use serde::Serialize;

use crate::hdx::{Dataset, Showcase};

#[derive(Serialize)]
struct DatasetAndShowcase<'a> {
    dataset: &'a Dataset,
    showcase: &'a Showcase,
}

/// Writes dataset and showcase pairs as JSON files into a directory.
pub struct JsonFileSink {
    directory: PathBuf,
}

impl JsonFileSink {
    /// Create the sink and its output directory.
    pub fn new(directory: &Path) -> Result<Self, Error> {
        fs::create_dir_all(directory)?;

        Ok(Self {
            directory: directory.to_path_buf(),
        })
    }

    /// Write `<dataset name>.json` and return its path.
    pub fn insert(&self, dataset: &Dataset, showcase: &Showcase) -> Result<PathBuf, Error> {
        let path = self.directory.join(format!("{}.json", dataset.name));

        let output = File::create(&path)?;
        let writer = BufWriter::new(&output);
        serde_json::to_writer_pretty(writer, &DatasetAndShowcase { dataset, showcase })?;

        debug!(
            "Wrote `{}` with {} resources, {} dataset tags and {} showcase tags",
            path.display(),
            dataset.resources().len(),
            dataset.tags().len(),
            showcase.tags().len()
        );

        Ok(path)
    }
}
