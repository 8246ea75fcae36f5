//! Reading generated datasets back
//!
//! This is the inverse of [`crate::emit`], used to check what a previous run produced. It
//! trusts the layout the emitter writes and gives up on anything else.

use crate::emit::{ARRAY_CLOSE, ARRAY_OPEN, RAW_STRING_CLOSE, RAW_STRING_OPEN, SIZE_DEFINE};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetParseError {
    #[error("header doesn't define DATASETS_SIZE")]
    MissingSize,
    #[error("invalid DATASETS_SIZE value `{0}`")]
    InvalidSize(String),
    #[error("source doesn't open the datasets array")]
    MissingArray,
    #[error("entry {index}: expected `{expected}`")]
    Malformed { index: usize, expected: &'static str },
}

/// One record of a generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedEntry {
    pub name: String,
    pub scene: String,
    pub obj: String,
    pub mtl: String,
}

/// Reads the `DATASETS_SIZE` value out of a generated header.
///
/// ```
/// use scenegen::dataset::read_header_size;
/// let header = scenegen::emit::header_text(7);
/// assert_eq!(read_header_size(&header), Ok(7));
/// ```
pub fn read_header_size(header: &str) -> Result<usize, DatasetParseError> {
    let value = header
        .lines()
        .find_map(|line| line.strip_prefix(SIZE_DEFINE))
        .ok_or(DatasetParseError::MissingSize)?
        .trim();

    value
        .parse()
        .map_err(|_| DatasetParseError::InvalidSize(value.to_string()))
}

/// Splits a generated source file back into its entries.
///
/// Texts containing the raw string terminator can't be told apart from the end of the literal,
/// so those will come back cut short or fail to parse.
pub fn read_source(source: &str) -> Result<Vec<EmbeddedEntry>, DatasetParseError> {
    let (_, mut rest) = source
        .split_once(ARRAY_OPEN)
        .ok_or(DatasetParseError::MissingArray)?;

    let mut entries = vec![];
    loop {
        let index = entries.len();
        if rest.starts_with(ARRAY_CLOSE.trim_end()) {
            return Ok(entries);
        }

        let mut cursor = Cursor { rest, index };
        cursor.expect("{.name = \"")?;
        let name = cursor.until("\"")?;
        cursor.expect(", .scene = ")?;
        let scene = cursor.raw_literal()?;
        cursor.expect(",.obj = ")?;
        let obj = cursor.raw_literal()?;
        cursor.expect(",.mtl = ")?;
        let mtl = cursor.raw_literal()?;
        cursor.expect("},")?;

        rest = cursor.rest;
        entries.push(EmbeddedEntry {
            name: name.to_string(),
            scene: scene.to_string(),
            obj: obj.to_string(),
            mtl: mtl.to_string(),
        });
    }
}

struct Cursor<'a> {
    rest: &'a str,
    index: usize,
}

impl<'a> Cursor<'a> {
    fn expect(&mut self, token: &'static str) -> Result<(), DatasetParseError> {
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(self.malformed(token)),
        }
    }

    fn until(&mut self, terminator: &'static str) -> Result<&'a str, DatasetParseError> {
        match self.rest.split_once(terminator) {
            Some((value, rest)) => {
                self.rest = rest;
                Ok(value)
            }
            None => Err(self.malformed(terminator)),
        }
    }

    fn raw_literal(&mut self) -> Result<&'a str, DatasetParseError> {
        self.expect(RAW_STRING_OPEN)?;
        self.until(RAW_STRING_CLOSE)
    }

    fn malformed(&self, expected: &'static str) -> DatasetParseError {
        DatasetParseError::Malformed {
            index: self.index,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        emit::{entry_text, header_text, source_prologue},
        scene::SceneEntry,
    };

    fn entry(name: &str, scene: &str, obj: &str, mtl: &str) -> SceneEntry {
        SceneEntry {
            name: name.into(),
            scene_text: scene.into(),
            obj_text: obj.into(),
            mtl_text: mtl.into(),
        }
    }

    fn generate(entries: &[SceneEntry]) -> String {
        let mut source = source_prologue("dataset.h");
        for entry in entries {
            source.push_str(&entry_text(entry));
        }
        source.push_str(ARRAY_CLOSE);
        source
    }

    #[test]
    fn header_size() {
        assert_eq!(read_header_size(&header_text(0)), Ok(0));
        assert_eq!(read_header_size("#pragma once\n"), Err(DatasetParseError::MissingSize));
        assert_eq!(
            read_header_size("#define DATASETS_SIZE lots\n"),
            Err(DatasetParseError::InvalidSize("lots".into()))
        );
    }

    #[test]
    fn entries_come_back_in_order() {
        let written = [
            entry("a", "o a.obj\nm a.mtl\n", "v 0 0 0\n", "newmtl a\n"),
            entry("b", "m b.mtl\no b.obj", "\"}, {\\", ""),
        ];

        let read = read_source(&generate(&written)).unwrap();
        assert_eq!(read.len(), 2);
        for (read, written) in read.iter().zip(&written) {
            assert_eq!(read.name, written.name);
            assert_eq!(read.scene, written.scene_text);
            assert_eq!(read.obj, written.obj_text);
            assert_eq!(read.mtl, written.mtl_text);
        }
    }

    #[test]
    fn truncated_source_is_rejected() {
        let mut source = generate(&[entry("a", "", "", "")]);
        source.truncate(source.len() - ARRAY_CLOSE.len() - 5);

        assert!(matches!(
            read_source(&source),
            Err(DatasetParseError::Malformed { index: 0, .. })
        ));
    }

    #[test]
    fn not_a_dataset() {
        assert_eq!(read_source("int main() {}\n"), Err(DatasetParseError::MissingArray));
    }
}
