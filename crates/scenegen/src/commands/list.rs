use super::ConfigArgs;
use crate::{packer::survey, scene::DirectiveKind};
use clap::Args;
use scenegen_utils::{ok, AnyResult};

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl crate::Command for ListCommand {
    fn run(self) -> AnyResult {
        let config = self.config.resolve()?;

        println!(" : Scenes in {}:", config.models_dir.display());
        for scene in survey(&config)? {
            println!("  - {} ({})", scene.name, scene.path.display());
            for kind in [DirectiveKind::Object, DirectiveKind::Material] {
                match scene.references.get(kind) {
                    Some(path) => println!("    {kind} {path}"),
                    None => println!("    {kind} <missing>"),
                }
            }
        }

        ok()
    }
}
