use crate::config::PackerConfig;
use clap::Args;
use scenegen_utils::AnyResult;
use std::path::PathBuf;

pub mod build;
pub mod inspect;
pub mod list;

/// Options shared by every command. Flags take precedence over the configuration file.
#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// TOML file with packer settings
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Directory searched for scene files [default: models]
    #[arg(long, short = 'm')]
    pub models: Option<PathBuf>,
    /// Base directory of the paths referenced by scenes [default: .]
    #[arg(long, short = 'r')]
    pub references: Option<PathBuf>,
    /// Directory the dataset files are written to [default: src]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn resolve(self) -> AnyResult<PackerConfig> {
        let mut config = match self.config {
            Some(path) => PackerConfig::load(&path)?,
            None => PackerConfig::default(),
        };

        if let Some(models) = self.models {
            config.models_dir = models;
        }
        if let Some(references) = self.references {
            config.reference_root = references;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }

        log::debug!("Using {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigArgs;
    use crate::testing::ScratchDir;
    use std::path::{Path, PathBuf};

    #[test]
    fn flags_override_file() {
        let dir = ScratchDir::new("config-args");
        let file = dir.write(
            "scenegen.toml",
            "models_dir = \"scenes\"\noutput_dir = \"gen\"\nheader_name = \"assets.h\"\n",
        );

        let config = ConfigArgs {
            config: Some(file),
            models: None,
            references: Some(PathBuf::from("assets")),
            output: Some(PathBuf::from("out")),
        }
        .resolve()
        .unwrap();

        assert_eq!(config.models_dir, Path::new("scenes"));
        assert_eq!(config.reference_root, Path::new("assets"));
        assert_eq!(config.output_dir, Path::new("out"));
        assert_eq!(config.header_name, "assets.h");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = ScratchDir::new("config-args-missing");
        let args = ConfigArgs {
            config: Some(dir.path().join("nope.toml")),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }
}
