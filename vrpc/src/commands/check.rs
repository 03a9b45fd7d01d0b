use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Service definition: a TOML manifest or a JSON service descriptor
    pub service: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = vrpc_manifest::load(&self.service).unwrap_or_exit();
        let language = LanguageSupport::get(&manifest.output.generator)?;
        let report = ops::check(&manifest, &language, &self.service)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
