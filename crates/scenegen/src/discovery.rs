//! Locating scene files in the assets directory

use crate::scene::scene_name;
use scenegen_utils::{AnyResult, AnyhowResultExt};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Token a file name has to contain to be treated as a scene description.
pub const SCENE_TOKEN: &str = "scene";

/// Checks whether a file name looks like a scene description.
///
/// Anything with a prefix ending in `scene` qualifies, so `foo.scene`, `scene_a.txt` and
/// `ascene` all match.
///
/// ```
/// use scenegen::discovery::is_scene_file_name;
/// assert!(is_scene_file_name("foo.scene"));
/// assert!(is_scene_file_name("bigscene.txt"));
/// assert!(!is_scene_file_name("foo.obj"));
/// ```
pub fn is_scene_file_name(file_name: &str) -> bool {
    file_name.contains(SCENE_TOKEN)
}

/// Walks `root` at any depth and returns every scene file, in walk order.
///
/// Each match is announced on stdout as it's found. Failing to read any part of the tree
/// (including `root` itself not existing) aborts the walk.
pub fn discover_scenes(root: &Path) -> AnyResult<Vec<PathBuf>> {
    discover_scenes_into(root, &mut io::stdout().lock())
}

/// Same as [`discover_scenes`], announcing matches to `progress` instead of stdout.
///
/// Symlinked directories aren't entered, but symlinks pointing at files count as files.
pub fn discover_scenes_into(root: &Path, progress: &mut impl Write) -> AnyResult<Vec<PathBuf>> {
    let mut scenes = vec![];

    for entry in WalkDir::new(root) {
        let entry =
            entry.otherwise_with(|| format!("couldn't scan assets directory {}", root.display()))?;

        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !is_scene_file_name(&file_name) {
            log::trace!("Skipping {}", entry.path().display());
            continue;
        }

        writeln!(progress, "{}", scene_name(&file_name))?;
        scenes.push(entry.into_path());
    }

    Ok(scenes)
}
