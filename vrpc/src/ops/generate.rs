//! Generate operation - stub generation from a service definition.

use std::path::Path;

use eyre::{Context, Result};
use tracing::info;
use vrpc_codegen::ServiceMembers;
use vrpc_core::WriteResult;
use vrpc_manifest::Manifest;

use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, PreviewFile, WrittenFile},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory generated files are written under.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Nothing is written unless generation succeeds for the whole service.
pub fn generate(
    manifest: &Manifest,
    language: &LanguageSupport,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = language.generator(&manifest.output);
    let files = generator
        .generate(&manifest.service)
        .wrap_err_with(|| format!("Failed to generate code for '{}'", manifest.service.name))?;

    let result = if opts.dry_run {
        GenerationResult::Preview(
            files
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.file_name().to_string(),
                    content: f.content().to_string(),
                })
                .collect(),
        )
    } else {
        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            let status = file.write(opts.output_dir)?;
            let path = file.path(opts.output_dir);
            info!(path = %path.display(), ?status, "wrote generated file");
            written.push(WrittenFile {
                path,
                changed: status == WriteResult::Written,
            });
        }
        GenerationResult::Written(written)
    };

    let members = ServiceMembers::extract(&manifest.service);
    Ok(GenerateReport {
        service: manifest.service.name.clone(),
        generator: generator.language(),
        method_count: members.methods.len(),
        event_count: members.events.len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use vrpc_manifest::OutputConfig;
    use vrpc_ir::{MethodDescriptor, ServiceDescriptor};

    use super::*;

    fn manifest() -> Manifest {
        Manifest {
            service: ServiceDescriptor::new("Inspector")
                .method(MethodDescriptor::new("getName").param("id", "int").returns("string")),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let language = LanguageSupport::get("typescript").unwrap();
        let report = generate(
            &manifest(),
            &language,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        let path = dir.path().join("Inspector_vrpc.ts");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("getName(id: number): Promise<string>;"));
        match report.result {
            GenerationResult::Written(files) => {
                assert_eq!(files.len(), 1);
                assert!(files[0].changed);
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
    }

    #[test]
    fn test_method_count_excludes_synthesized_members() {
        let dir = TempDir::new().unwrap();
        let language = LanguageSupport::get("typescript").unwrap();
        let mut manifest = manifest();
        manifest.service = manifest
            .service
            .method(MethodDescriptor::new("get_Title").returns("string"))
            .method(MethodDescriptor::new("op_Equality"));
        let report = generate(
            &manifest,
            &language,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(report.method_count, 1);
        assert_eq!(report.event_count, 0);
    }

    #[test]
    fn test_second_run_reports_unchanged() {
        let dir = TempDir::new().unwrap();
        let language = LanguageSupport::get("typescript").unwrap();
        let run = || {
            generate(
                &manifest(),
                &language,
                GenerateOptions {
                    output_dir: dir.path(),
                    dry_run: false,
                },
            )
            .unwrap()
        };
        run();
        match run().result {
            GenerationResult::Written(files) => assert!(!files[0].changed),
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let language = LanguageSupport::get("typescript").unwrap();
        let report = generate(
            &manifest(),
            &language,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert!(!dir.path().join("Inspector_vrpc.ts").exists());
        match report.result {
            GenerationResult::Preview(files) => assert_eq!(files[0].path, "Inspector_vrpc.ts"),
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
    }
}
