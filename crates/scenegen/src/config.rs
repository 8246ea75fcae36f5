use serde::Deserialize;
use scenegen_utils::{AnyResult, AnyhowResultExt};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where the packer reads its inputs from and where it writes the generated files.
///
/// Every field defaults to the layout the packer has always assumed, so running it from a
/// project root with `models/` and `src/` needs no configuration at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackerConfig {
    /// Directory searched (recursively) for scene files
    pub models_dir: PathBuf,
    /// Base for the `o`/`m` paths found inside scene files
    pub reference_root: PathBuf,
    /// Directory receiving the generated header and source. It must already exist.
    pub output_dir: PathBuf,
    pub header_name: String,
    pub source_name: String,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            reference_root: PathBuf::from("."),
            output_dir: PathBuf::from("src"),
            header_name: String::from("dataset.h"),
            source_name: String::from("dataset.cpp"),
        }
    }
}

impl PackerConfig {
    /// Reads a TOML configuration file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> AnyResult<Self> {
        let text = fs::read_to_string(path)
            .otherwise_with(|| format!("couldn't read configuration {}", path.display()))?;
        Self::parse(&text).otherwise_with(|| format!("invalid configuration {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(&self.header_name)
    }

    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(&self.source_name)
    }
}
