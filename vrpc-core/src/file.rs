use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A generated file: a name relative to the output directory and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    file_name: String,
    content: String,
}

impl OutputFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Get the file name relative to the output directory
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the destination path under `base`
    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    /// Write the file under `base`, leaving it untouched if the content
    /// on disk is already identical.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == self.content) {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let file = OutputFile::new("Svc_vrpc.ts", "hello");

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("Svc_vrpc.ts")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("a").join("b");
        let file = OutputFile::new("Svc_vrpc.ts", "nested");

        file.write(&base).unwrap();

        assert_eq!(
            fs::read_to_string(base.join("Svc_vrpc.ts")).unwrap(),
            "nested"
        );
    }

    #[test]
    fn test_write_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Svc_vrpc.ts"), "first").unwrap();

        let result = OutputFile::new("Svc_vrpc.ts", "second")
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("Svc_vrpc.ts")).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Svc_vrpc.ts"), "same").unwrap();

        let result = OutputFile::new("Svc_vrpc.ts", "same")
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }
}
