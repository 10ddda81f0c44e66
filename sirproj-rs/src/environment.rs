//! Run description read from stdin and the output sink it names.
//!
//! ```json
//! {
//!   "input": { "region": "Sweden", "start": "2020-3-1", "seed": 1 },
//!   "model": { "files": { "timeseries": "data/timeseries.json" } },
//!   "output": { "spec": "filesystem", "dir": "out" }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SirError};

pub struct Environment<I = ()> {
    input_json: serde_json::Map<String, Value>,
    pub input: Option<I>,
    /// Protocol pass-through taken out of `input`. The SIR pipeline is
    /// deterministic and does not consume it; it is only reported.
    pub seed: u64,
    /// Replicate number assigned by the runner, reported alongside the output.
    pub replicate: u64,
    pub files: HashMap<String, PathBuf>,
    output: Value,
}

impl Environment {
    pub fn from_json(data: Value) -> Self {
        let mut input_json = data
            .get("input")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let mut take_u64 = |key: &str| input_json.remove(key).and_then(|v| v.as_u64()).unwrap_or(0);
        let seed = take_u64("seed");
        let replicate = take_u64("replicate");

        let files = data
            .pointer("/model/files")
            .and_then(Value::as_object)
            .map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), PathBuf::from(s))))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            input_json,
            input: None,
            seed,
            replicate,
            files,
            output: data.get("output").cloned().unwrap_or(Value::Null),
        }
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Err(SirError::EmptyInput);
        }
        Ok(Self::from_json(serde_json::from_str(&raw)?))
    }

    pub fn from_stdin() -> Result<Self> {
        Self::from_reader(io::stdin().lock())
    }

    pub fn with_input_type<I: DeserializeOwned>(self) -> Result<Environment<I>> {
        let input = serde_json::from_value(Value::Object(self.input_json.clone()))?;
        Ok(Environment {
            input_json: self.input_json,
            input: Some(input),
            seed: self.seed,
            replicate: self.replicate,
            files: self.files,
            output: self.output,
        })
    }
}

impl<I: DeserializeOwned> Environment<I> {
    pub fn load() -> Result<Self> {
        Environment::from_stdin()?.with_input_type::<I>()
    }
}

impl<I> Environment<I> {
    pub fn input_json(&self) -> &serde_json::Map<String, Value> {
        &self.input_json
    }

    pub fn file(&self, name: &str) -> Option<&Path> {
        self.files.get(name).map(PathBuf::as_path)
    }

    /// Directory of a `filesystem` output, either flat or under the
    /// `default` profile (falling back to the first profile listed).
    pub fn output_dir(&self) -> Option<PathBuf> {
        let dir_of = |sink: &Value| {
            (sink.get("spec").and_then(Value::as_str) == Some("filesystem"))
                .then(|| sink.get("dir").and_then(Value::as_str).map(PathBuf::from))
                .flatten()
        };

        if self.output.get("spec").is_some() {
            return dir_of(&self.output);
        }
        let profiles = self.output.get("profile").and_then(Value::as_object)?;
        let selected = profiles.get("default").or_else(|| profiles.values().next())?;
        dir_of(selected)
    }

    /// Writes to `<output_dir>/<filename>`, or stdout without an output dir.
    pub fn write_csv(&self, filename: &str, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
        match self.output_dir() {
            Some(dir) => {
                fs::create_dir_all(&dir)?;
                let path = dir.join(filename);
                debug!(path = %path.display(), rows = rows.len(), "writing csv");
                write_rows(csv::Writer::from_path(path)?, headers, rows)
            }
            None => write_rows(csv::Writer::from_writer(io::stdout().lock()), headers, rows),
        }
    }
}

fn write_rows<W: Write>(
    mut wtr: csv::Writer<W>,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<()> {
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
