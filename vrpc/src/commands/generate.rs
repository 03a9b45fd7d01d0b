use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Service definition: a TOML manifest or a JSON service descriptor
    pub service: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Generator to use (overrides the manifest setting)
    #[arg(short, long)]
    pub generator: Option<String>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = vrpc_manifest::load(&self.service).unwrap_or_exit();
        let name = self
            .generator
            .as_deref()
            .unwrap_or(manifest.output.generator.as_str());
        let language = LanguageSupport::get(name)?;

        let report = ops::generate(
            &manifest,
            &language,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
