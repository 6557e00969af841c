//! Output file writing under an overwrite policy
//!
//! Whether an existing output file may be replaced is a policy decision
//! injected into the writer, never an interactive prompt: report runs
//! are expected to run unattended.

use crate::output::{OutputError, OutputResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of an overwrite inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Overwrite this file
    Allow,
    /// Overwrite this file and every later one without asking again
    AllowAll,
    /// Do not overwrite; abort the run
    Deny,
}

/// Decides whether an existing output file may be replaced
pub trait OverwritePolicy {
    fn should_overwrite(&self, path: &Path) -> Decision;
}

/// Replaces existing files unconditionally
pub struct AlwaysOverwrite;

impl OverwritePolicy for AlwaysOverwrite {
    fn should_overwrite(&self, _path: &Path) -> Decision {
        Decision::AllowAll
    }
}

/// Never replaces an existing file; the run aborts instead
pub struct NeverOverwrite;

impl OverwritePolicy for NeverOverwrite {
    fn should_overwrite(&self, _path: &Path) -> Decision {
        Decision::Deny
    }
}

/// Writes report pages into the output directory
///
/// The directory is created on first write if it does not exist. The
/// policy is consulted only when the target file already exists; an
/// `AllowAll` decision latches for the rest of the run. On `Deny` the
/// existing file is left untouched and `WriteDenied` is returned.
pub struct ReportWriter {
    directory: PathBuf,
    policy: Box<dyn OverwritePolicy>,
    overwrite_all: bool,
}

impl ReportWriter {
    /// Creates a writer for the given output directory and policy.
    pub fn new(directory: impl Into<PathBuf>, policy: Box<dyn OverwritePolicy>) -> Self {
        Self {
            directory: directory.into(),
            policy,
            overwrite_all: false,
        }
    }

    /// Writes one named document, returning the path written to.
    pub fn write(&mut self, filename: &str, content: &str) -> OutputResult<PathBuf> {
        if !self.directory.is_dir() {
            fs::create_dir_all(&self.directory)?;
        }

        let path = self.directory.join(filename);
        if path.exists() && !self.overwrite_all {
            match self.policy.should_overwrite(&path) {
                Decision::Allow => {}
                Decision::AllowAll => self.overwrite_all = true,
                Decision::Deny => {
                    return Err(OutputError::WriteDenied { path });
                }
            }
        }

        fs::write(&path, content)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_write_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");
        let mut writer = ReportWriter::new(&target, Box::new(NeverOverwrite));

        let path = writer.write("index.html", "<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_deny_leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("sitemap.html");
        std::fs::write(&existing, "original").unwrap();

        let mut writer = ReportWriter::new(dir.path(), Box::new(NeverOverwrite));
        let result = writer.write("sitemap.html", "replacement");

        assert!(matches!(result, Err(OutputError::WriteDenied { .. })));
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "original");
    }

    #[test]
    fn test_always_policy_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("index.html");
        std::fs::write(&existing, "original").unwrap();

        let mut writer = ReportWriter::new(dir.path(), Box::new(AlwaysOverwrite));
        writer.write("index.html", "replacement").unwrap();
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "replacement");
    }

    #[test]
    fn test_allow_all_latches() {
        // policy that counts how often it is consulted
        struct CountingPolicy<'a>(&'a Cell<u32>);
        impl OverwritePolicy for CountingPolicy<'_> {
            fn should_overwrite(&self, _path: &Path) -> Decision {
                self.0.set(self.0.get() + 1);
                Decision::AllowAll
            }
        }

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "old").unwrap();
        std::fs::write(dir.path().join("b.html"), "old").unwrap();

        let calls = Box::leak(Box::new(Cell::new(0)));
        let mut writer = ReportWriter::new(dir.path(), Box::new(CountingPolicy(calls)));
        writer.write("a.html", "new").unwrap();
        writer.write("b.html", "new").unwrap();

        assert_eq!(calls.get(), 1, "AllowAll must suppress further inquiries");
    }

    #[test]
    fn test_fresh_files_never_consult_policy() {
        struct PanickingPolicy;
        impl OverwritePolicy for PanickingPolicy {
            fn should_overwrite(&self, _path: &Path) -> Decision {
                panic!("policy must not be consulted for fresh files");
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let mut writer = ReportWriter::new(dir.path(), Box::new(PanickingPolicy));
        writer.write("fresh.html", "content").unwrap();
    }
}
