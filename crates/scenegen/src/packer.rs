use crate::{
    config::PackerConfig,
    discovery::discover_scenes,
    emit::DatasetWriter,
    scene::{SceneEntry, SceneReferences, SceneSource},
};
use scenegen_utils::AnyResult;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    pub entries: usize,
    pub header_path: PathBuf,
    pub source_path: PathBuf,
}

/// A discovered scene with the references it declares, without anything being loaded.
#[derive(Debug, Clone)]
pub struct SceneSurvey {
    pub name: String,
    pub path: PathBuf,
    pub references: SceneReferences,
}

/// Packs every scene under `config.models_dir` into the dataset header and source.
///
/// All scenes are read before anything is written. Referenced files are only read while the
/// source is being written, so a broken reference leaves a complete header next to a
/// truncated source.
///
/// This can be called from build scripts of the consuming project.
pub fn pack(config: &PackerConfig) -> AnyResult<PackSummary> {
    println!(" : Reading scenes from {}...", config.models_dir.display());
    let sources = load_sources(config)?;

    println!(" : Writing {}...", config.header_path().display());
    let mut writer = DatasetWriter::create(config, sources.len())?;

    println!(" : Writing {}...", config.source_path().display());
    for source in sources {
        println!("  - Embedding {}...", source.name);
        let entry = SceneEntry::load(source, &config.reference_root)?;
        writer.write_entry(&entry)?;
    }

    println!(" : Finishing...");
    let entries = writer.entries_written();
    writer.finish()?;

    Ok(PackSummary {
        entries,
        header_path: config.header_path(),
        source_path: config.source_path(),
    })
}

/// Runs discovery and reference extraction only. Nothing is written.
pub fn survey(config: &PackerConfig) -> AnyResult<Vec<SceneSurvey>> {
    Ok(load_sources(config)?
        .into_iter()
        .map(|source| SceneSurvey {
            references: source.references(),
            name: source.name,
            path: source.path,
        })
        .collect())
}

/// Loads every scene together with its referenced files, the way [`pack`] would embed them.
/// Nothing is written.
pub fn load_entries(config: &PackerConfig) -> AnyResult<Vec<SceneEntry>> {
    load_sources(config)?
        .into_iter()
        .map(|source| SceneEntry::load(source, &config.reference_root))
        .collect()
}

fn load_sources(config: &PackerConfig) -> AnyResult<Vec<SceneSource>> {
    discover_scenes(&config.models_dir)?
        .iter()
        .map(|path| SceneSource::load(path))
        .collect()
}
