//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from service validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub service: String,
    /// Methods that will appear in the generated interface.
    pub methods: Vec<String>,
    pub events: Vec<String>,
    /// Methods filtered out as synthesized accessors or operators.
    pub skipped: Vec<String>,
    /// Target names of the types that will be declared, in registration order.
    pub types: Vec<String>,
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for name in &self.skipped {
            out.warning(&format!("skipping synthesized member '{}'", name));
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Service", &self.service);

        for (label, items) in [
            ("method", &self.methods),
            ("event", &self.events),
            ("declared type", &self.types),
        ] {
            out.newline();
            out.section(&format!("{} {}{}", items.len(), label, plural(items.len())));
            for item in items {
                out.list_item(item);
            }
        }
    }
}
