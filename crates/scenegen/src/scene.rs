//! Scene descriptions and the files they reference
//!
//! A scene file is newline delimited text where the first character of each line selects a
//! directive. The packer only cares about two of them:
//!
//! ```text
//! o assets/foo.obj    <- geometry
//! m assets/foo.mtl    <- materials
//! ```
//!
//! Everything else (lights, camera, comments) is carried along verbatim in the embedded text.

use scenegen_utils::{file_stem_prefix, AnyResult, AnyhowResultExt};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Kind of a scene line, decided by its first non-whitespace character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Object,
    Material,
    Other,
}

impl DirectiveKind {
    /// Classifies an already trimmed, non-empty line.
    pub fn of(line: &str) -> Self {
        match line.chars().next() {
            Some('o') => Self::Object,
            Some('m') => Self::Material,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DirectiveKind::Object => "o",
            DirectiveKind::Material => "m",
            DirectiveKind::Other => "?",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("scene `{scene}` doesn't reference a file with a `{kind}` directive")]
    Unresolved { scene: String, kind: DirectiveKind },
}

/// Logical name of a scene, the part of its file name before the first `.`
pub fn scene_name(file_name: &str) -> &str {
    file_stem_prefix(file_name)
}

/// Paths pulled out of a scene's `o` and `m` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneReferences {
    pub obj: Option<String>,
    pub mtl: Option<String>,
}

impl SceneReferences {
    pub fn is_complete(&self) -> bool {
        self.obj.is_some() && self.mtl.is_some()
    }

    pub fn get(&self, kind: DirectiveKind) -> Option<&str> {
        match kind {
            DirectiveKind::Object => self.obj.as_deref(),
            DirectiveKind::Material => self.mtl.as_deref(),
            DirectiveKind::Other => None,
        }
    }

    pub fn resolve(&self, scene: &str, kind: DirectiveKind) -> Result<&str, ReferenceError> {
        self.get(kind).ok_or_else(|| ReferenceError::Unresolved {
            scene: scene.to_string(),
            kind,
        })
    }
}

/// Scans scene text for `o` and `m` directives.
///
/// The path is the second whitespace separated token of the line. When a directive shows up
/// more than once, the last one wins. Directives without a path token are ignored.
///
/// ```
/// use scenegen::scene::extract_references;
/// let refs = extract_references("# comment\nm a.mtl\no a.obj\nl 0 1 0\n");
/// assert_eq!(refs.obj.as_deref(), Some("a.obj"));
/// assert_eq!(refs.mtl.as_deref(), Some("a.mtl"));
/// ```
pub fn extract_references(text: &str) -> SceneReferences {
    let mut refs = SceneReferences::default();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let slot = match DirectiveKind::of(line) {
            DirectiveKind::Object => &mut refs.obj,
            DirectiveKind::Material => &mut refs.mtl,
            DirectiveKind::Other => continue,
        };

        match line.split_whitespace().nth(1) {
            Some(path) => *slot = Some(path.to_string()),
            None => log::debug!("Ignoring directive without a path: `{line}`"),
        }
    }

    refs
}

/// A scene file read into memory, before its references are followed.
#[derive(Debug, Clone)]
pub struct SceneSource {
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

impl SceneSource {
    pub fn load(path: &Path) -> AnyResult<Self> {
        let file_name = path
            .file_name()
            .otherwise_with(|| format!("{} is not a file path", path.display()))?
            .to_string_lossy();

        let text = fs::read_to_string(path)
            .otherwise_with(|| format!("couldn't read scene file {}", path.display()))?;

        Ok(Self {
            name: scene_name(&file_name).to_string(),
            path: path.to_path_buf(),
            text,
        })
    }

    /// Extracts the references, warning when one of them is missing.
    ///
    /// A missing reference isn't an error yet, it only turns fatal once something tries to
    /// load it.
    pub fn references(&self) -> SceneReferences {
        let refs = extract_references(&self.text);
        if let Some(warning) = self.incomplete_references_warning(&refs) {
            log::warn!("{warning}");
        }
        refs
    }

    /// Diagnostic for a scene lacking an `o` or `m` directive, if it does.
    pub fn incomplete_references_warning(&self, refs: &SceneReferences) -> Option<String> {
        (!refs.is_complete()).then(|| {
            format!(
                "{}: .obj or .mtl files not found in scene description",
                self.path.display()
            )
        })
    }
}

/// One record of the generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEntry {
    pub name: String,
    pub scene_text: String,
    pub obj_text: String,
    pub mtl_text: String,
}

impl SceneEntry {
    /// Follows the scene's references, relative to `reference_root`, and reads them in.
    pub fn load(source: SceneSource, reference_root: &Path) -> AnyResult<Self> {
        let refs = source.references();
        let obj_text = read_reference(&source, &refs, DirectiveKind::Object, reference_root)?;
        let mtl_text = read_reference(&source, &refs, DirectiveKind::Material, reference_root)?;

        Ok(Self {
            name: source.name,
            scene_text: source.text,
            obj_text,
            mtl_text,
        })
    }
}

fn read_reference(
    source: &SceneSource,
    refs: &SceneReferences,
    kind: DirectiveKind,
    reference_root: &Path,
) -> AnyResult<String> {
    let path = reference_root.join(refs.resolve(&source.name, kind)?);
    fs::read_to_string(&path).otherwise_with(|| {
        format!(
            "couldn't read `{kind}` file {} referenced by {}",
            path.display(),
            source.path.display()
        )
    })
}
