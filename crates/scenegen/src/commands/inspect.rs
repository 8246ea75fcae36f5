use super::ConfigArgs;
use crate::{
    dataset::{read_header_size, read_source},
    packer::load_entries,
};
use anyhow::ensure;
use clap::Args;
use scenegen_utils::{ok, AnyResult, AnyhowResultExt};
use std::fs;

#[derive(Debug, Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl crate::Command for InspectCommand {
    fn run(self) -> AnyResult {
        let config = self.config.resolve()?;
        let header_path = config.header_path();
        let source_path = config.source_path();

        let header = fs::read_to_string(&header_path)
            .otherwise_with(|| format!("couldn't read {}", header_path.display()))?;
        let source = fs::read_to_string(&source_path)
            .otherwise_with(|| format!("couldn't read {}", source_path.display()))?;

        let declared = read_header_size(&header)
            .otherwise_with(|| format!("couldn't parse {}", header_path.display()))?;
        let entries = read_source(&source)
            .otherwise_with(|| format!("couldn't parse {}", source_path.display()))?;

        println!(" : {} declares {declared} dataset(s)", header_path.display());
        for entry in &entries {
            println!(
                "  - {}: scene {} B, obj {} B, mtl {} B",
                entry.name,
                entry.scene.len(),
                entry.obj.len(),
                entry.mtl.len()
            );
        }

        ensure!(
            entries.len() == declared,
            "{} holds {} entries, but the header declares {declared}",
            source_path.display(),
            entries.len()
        );

        println!(" : Comparing against {}...", config.models_dir.display());
        let current = load_entries(&config)?;
        ensure!(
            current.len() == entries.len(),
            "{} holds {} entries, but {} scenes are present now",
            source_path.display(),
            entries.len(),
            current.len()
        );

        for (index, (embedded, current)) in entries.iter().zip(&current).enumerate() {
            ensure!(
                embedded.name == current.name,
                "entry {index} is `{}`, expected `{}`",
                embedded.name,
                current.name
            );

            let stale = [
                ("scene", &embedded.scene, &current.scene_text),
                ("obj", &embedded.obj, &current.obj_text),
                ("mtl", &embedded.mtl, &current.mtl_text),
            ]
            .into_iter()
            .filter(|(_, packed, on_disk)| packed != on_disk)
            .map(|(field, _, _)| field)
            .collect::<Vec<_>>();

            ensure!(
                stale.is_empty(),
                "entry `{}` is out of date: {} differ from the files on disk",
                embedded.name,
                stale.join(", ")
            );
        }

        ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{emit::header_text, packer::pack, testing::ScratchDir, Command};

    fn inspect(dir: &ScratchDir) -> AnyResult {
        InspectCommand {
            config: ConfigArgs {
                models: Some(dir.path().join("models")),
                references: Some(dir.path().to_path_buf()),
                output: Some(dir.path().join("src")),
                ..Default::default()
            },
        }
        .run()
    }

    #[test]
    fn freshly_packed_dataset_is_consistent() {
        let dir = ScratchDir::new("inspect-ok");
        dir.mkdir("src");
        dir.write("models/foo.scene", "o assets/foo.obj\nm assets/foo.mtl\n");
        dir.write("assets/foo.obj", "v 0 0 0\n");
        dir.write("assets/foo.mtl", "newmtl x\n");

        pack(&dir.config()).unwrap();
        inspect(&dir).unwrap();
    }

    #[test]
    fn edited_asset_is_reported() {
        let dir = ScratchDir::new("inspect-stale");
        dir.mkdir("src");
        dir.write("models/foo.scene", "o assets/foo.obj\nm assets/foo.mtl\n");
        dir.write("assets/foo.obj", "v 0 0 0\n");
        dir.write("assets/foo.mtl", "newmtl x\n");

        pack(&dir.config()).unwrap();
        dir.write("assets/foo.obj", "v 1 1 1\n");

        let err = inspect(&dir).unwrap_err();
        assert!(err.to_string().contains("obj"));
    }

    #[test]
    fn count_mismatch_is_reported() {
        let dir = ScratchDir::new("inspect-mismatch");
        dir.mkdir("models");
        dir.mkdir("src");

        pack(&dir.config()).unwrap();
        dir.write("src/dataset.h", &header_text(4));

        assert!(inspect(&dir).is_err());
    }
}
