//! Generation of the C++ dataset header and source
//!
//! Texts are embedded as `R"X(...)X"` raw string literals, so quotes and backslashes in the
//! assets don't need escaping. The flip side is that a text containing the terminator `)X"`
//! breaks the generated code. That case is reported, but the output is written as is.

use crate::{config::PackerConfig, scene::SceneEntry};
use scenegen_utils::{ok, AnyResult, AnyhowResultExt};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const RAW_STRING_OPEN: &str = "R\"X(";
pub const RAW_STRING_CLOSE: &str = ")X\"";

/// Record type shared by every dataset header.
pub const HEADER_PROLOGUE: &str = "#pragma once

struct dataset {
    const char *name;
    const char *scene;
    const char *obj;
    const char *mtl;
};
";

pub const SIZE_DEFINE: &str = "#define DATASETS_SIZE";
pub const ARRAY_OPEN: &str = "const dataset datasets[] = {\n";
pub const ARRAY_CLOSE: &str = "};\n";

/// Full contents of the header for a dataset of `count` entries.
///
/// ```
/// let header = scenegen::emit::header_text(3);
/// assert!(header.starts_with("#pragma once\n"));
/// assert!(header.ends_with("#define DATASETS_SIZE 3\nextern const dataset datasets[];\n"));
/// ```
pub fn header_text(count: usize) -> String {
    format!("{HEADER_PROLOGUE}{SIZE_DEFINE} {count}\nextern const dataset datasets[];\n")
}

/// Beginning of the source file, up to and including the array opening.
pub fn source_prologue(header_name: &str) -> String {
    format!("#include \"{header_name}\"\n{ARRAY_OPEN}")
}

/// A single array initializer. Entries are concatenated without separators.
pub fn entry_text(entry: &SceneEntry) -> String {
    format!(
        "{{.name = \"{}\", .scene = {},.obj = {},.mtl = {}}},",
        entry.name,
        raw_literal(&entry.scene_text),
        raw_literal(&entry.obj_text),
        raw_literal(&entry.mtl_text),
    )
}

fn raw_literal(text: &str) -> String {
    format!("{RAW_STRING_OPEN}{text}{RAW_STRING_CLOSE}")
}

/// Names the fields of `entry` that would terminate their raw string literal early.
pub fn delimiter_collisions(entry: &SceneEntry) -> Vec<&'static str> {
    [
        ("scene", &entry.scene_text),
        ("obj", &entry.obj_text),
        ("mtl", &entry.mtl_text),
    ]
    .into_iter()
    .filter(|(_, text)| text.contains(RAW_STRING_CLOSE))
    .map(|(field, _)| field)
    .collect()
}

/// Streams a dataset to disk.
///
/// The header is written out completely on creation, while entries of the source file are
/// appended one at a time. If the caller bails out midway, the source is left incomplete.
pub struct DatasetWriter {
    source: BufWriter<File>,
    source_path: PathBuf,
    expected: usize,
    written: usize,
}

impl DatasetWriter {
    pub fn create(config: &PackerConfig, count: usize) -> AnyResult<Self> {
        let header_path = config.header_path();
        let mut header = create_output(&header_path)?;
        header
            .write_all(header_text(count).as_bytes())
            .and_then(|_| header.flush())
            .otherwise_with(|| format!("couldn't write {}", header_path.display()))?;

        let source_path = config.source_path();
        let mut source = create_output(&source_path)?;
        source
            .write_all(source_prologue(&config.header_name).as_bytes())
            .otherwise_with(|| format!("couldn't write {}", source_path.display()))?;

        Ok(Self {
            source,
            source_path,
            expected: count,
            written: 0,
        })
    }

    pub fn write_entry(&mut self, entry: &SceneEntry) -> AnyResult {
        let collisions = delimiter_collisions(entry);
        if !collisions.is_empty() {
            log::warn!(
                "{}: {} contain `{RAW_STRING_CLOSE}`, the generated literal will be malformed",
                entry.name,
                collisions.join(", ")
            );
        }

        self.source
            .write_all(entry_text(entry).as_bytes())
            .otherwise_with(|| format!("couldn't write {}", self.source_path.display()))?;
        self.written += 1;
        ok()
    }

    pub fn entries_written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> AnyResult {
        if self.written != self.expected {
            log::warn!(
                "Header declares {} entries, but {} were written",
                self.expected,
                self.written
            );
        }

        self.source
            .write_all(ARRAY_CLOSE.as_bytes())
            .and_then(|_| self.source.flush())
            .otherwise_with(|| format!("couldn't write {}", self.source_path.display()))
    }
}

fn create_output(path: &Path) -> AnyResult<BufWriter<File>> {
    let file = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .otherwise_with(|| format!("couldn't create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
