use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const GIT_DIR_NAME: &str = ".git";

/// A directory holding a `.git` directory among its immediate children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    name: String,
    path: PathBuf,
    subdirectory_names: BTreeSet<String>,
    file_names: BTreeSet<String>,
}

impl RepositoryRef {
    pub fn new(
        path: PathBuf,
        subdirectory_names: BTreeSet<String>,
        file_names: BTreeSet<String>,
    ) -> Self {
        let name = Self::base_name(&path);

        RepositoryRef {
            name,
            path,
            subdirectory_names,
            file_names,
        }
    }

    /// Scan the immediate children of `path`, returning a reference only if
    /// one of them is a `.git` directory
    pub fn try_from_dir(path: &Path) -> anyhow::Result<Option<Self>> {
        let mut subdirectory_names = BTreeSet::new();
        let mut file_names = BTreeSet::new();

        for entry in std::fs::read_dir(path)?.filter_map(|entry| entry.ok()) {
            let name = entry.file_name().to_string_lossy().into_owned();
            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => {
                    subdirectory_names.insert(name);
                }
                Ok(_) => {
                    file_names.insert(name);
                }
                Err(_) => continue,
            }
        }

        if !subdirectory_names.contains(GIT_DIR_NAME) {
            return Ok(None);
        }

        Ok(Some(RepositoryRef::new(
            path.to_path_buf(),
            subdirectory_names,
            file_names,
        )))
    }

    fn base_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn subdirectory_names(&self) -> &BTreeSet<String> {
        &self.subdirectory_names
    }

    pub fn file_names(&self) -> &BTreeSet<String> {
        &self.file_names
    }
}
