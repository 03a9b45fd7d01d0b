//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use vrpc_ir::ServiceDescriptor;

use super::{Manifest, RawManifest, lower::lower, validate::ParseContext};
use crate::{Error, OutputConfig, Result, descriptor::validate_descriptor, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "service.toml")
    }
}

impl Manifest {
    /// Parse a TOML manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        parse_manifest(&read(path)?, &path.display().to_string())
    }

    /// Parse a TOML manifest with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Load a service definition, choosing the format by extension:
/// `.json` holds a serialized descriptor, anything else is a TOML manifest.
pub fn load(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = read(path)?;
    let filename = path.display().to_string();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Manifest {
            service: parse_descriptor(&content, &filename)?,
            output: OutputConfig::default(),
        }),
        _ => parse_manifest(&content, &filename),
    }
}

/// Parse and validate a TOML manifest.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source.toml_error(e))?;
    let ctx = ParseContext::new(content, filename);
    let service = lower(&raw, &ctx)?;
    Ok(Manifest {
        service,
        output: raw.output,
    })
}

/// Parse and validate a JSON-serialized [`ServiceDescriptor`].
pub fn parse_descriptor(content: &str, filename: &str) -> Result<ServiceDescriptor> {
    let ctx = ParseContext::new(content, filename);
    let mut service: ServiceDescriptor =
        serde_json::from_str(content).map_err(|e| ctx.source().json_error(e))?;
    validate_descriptor(&mut service, &ctx)?;
    Ok(service)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}
