//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from stub generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub service: String,
    /// Name of the generator that ran.
    pub generator: &'static str,
    pub method_count: usize,
    pub event_count: usize,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file written (or left as is) on disk.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// False if the file already had the generated content.
    pub changed: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(files) => self.render_written(out, files),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        out.key_value("Service", &self.service);
        out.key_value("Generator", self.generator);
        out.key_value(
            "Members",
            &format!("{} methods, {} events", self.method_count, self.event_count),
        );
        out.newline();
        out.section("Files");
        for file in files {
            let path = file.path.display().to_string();
            if file.changed {
                out.added_item(&path);
            } else {
                out.unchanged_item(&path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
