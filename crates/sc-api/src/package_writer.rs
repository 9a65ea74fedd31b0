use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use sc_compiler::SpellPackage;
use sc_core::SpellcastError;
use tracing::debug;
use walkdir::WalkDir;

/// Destination for a compiled package. Receives the complete path-to-text
/// mapping in one call.
pub trait PackageWriter {
    fn write_package(&mut self, package: &SpellPackage) -> Result<(), SpellcastError>;
}

/// Writes each package file under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryPackageWriter {
    root: PathBuf,
}

impl DirectoryPackageWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PackageWriter for DirectoryPackageWriter {
    fn write_package(&mut self, package: &SpellPackage) -> Result<(), SpellcastError> {
        for (relative, text) in &package.files {
            let path = self.root.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|error| SpellcastError::io("create", parent, error))?;
            }
            fs::write(&path, text).map_err(|error| SpellcastError::io("write", &path, error))?;
            debug!(path = %path.display(), "wrote package file");
        }
        Ok(())
    }
}

/// Reads every file under `root` back into a package-relative mapping.
pub fn read_package_dir(root: &Path) -> Result<BTreeMap<String, String>, SpellcastError> {
    let mut files = BTreeMap::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map_err(|error| {
                SpellcastError::io("scan", path, std::io::Error::other(error.to_string()))
            })?
            .to_string_lossy()
            .replace('\\', "/");
        let text =
            fs::read_to_string(path).map_err(|error| SpellcastError::io("read", path, error))?;
        files.insert(relative, text);
    }
    Ok(files)
}
