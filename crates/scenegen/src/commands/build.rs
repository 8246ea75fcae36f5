use super::ConfigArgs;
use crate::packer::pack;
use clap::Args;
use scenegen_utils::{ok, AnyResult};

#[derive(Debug, Default, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl crate::Command for BuildCommand {
    fn run(self) -> AnyResult {
        let config = self.config.resolve()?;

        let summary = match pack(&config) {
            Ok(summary) => summary,
            Err(err) => {
                log::error!("Packing failed, generated files may be incomplete");
                return Err(err);
            }
        };

        log::info!(
            "Wrote {} scene(s) to {} and {}",
            summary.entries,
            summary.header_path.display(),
            summary.source_path.display()
        );

        ok()
    }
}
