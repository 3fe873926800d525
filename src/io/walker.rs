use crate::analyzers::is_java_file;
use crate::core::errors::{Error, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct FileWalker {
    root: PathBuf,
    exclude_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            exclude_patterns: vec![],
        }
    }

    pub fn with_exclude_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.exclude_patterns = patterns
            .iter()
            .map(|pattern| glob::Pattern::new(pattern).map_err(Error::from))
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Java files under the root, sorted by path
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .require_git(false)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !is_java_file(path) {
            return false;
        }

        let excluded = self
            .exclude_patterns
            .iter()
            .any(|pattern| pattern.matches_path(path));
        if excluded {
            log::debug!("Skipping excluded file {}", path.display());
        }
        !excluded
    }
}

pub fn find_java_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_exclude_patterns(exclude)?
        .walk()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_finds_java_files_and_applies_excludes() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("src");
        let generated = root.path().join("generated");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&generated).unwrap();
        fs::write(src.join("B.java"), "class B {}").unwrap();
        fs::write(src.join("A.java"), "class A {}").unwrap();
        fs::write(src.join("notes.txt"), "").unwrap();
        fs::write(generated.join("G.java"), "class G {}").unwrap();

        let files = find_java_files(root.path(), &["**/generated/**".to_string()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.java", "B.java"]);
    }

    #[test]
    fn test_single_file_root() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("T.java");
        fs::write(&file, "class T {}").unwrap();

        assert_eq!(find_java_files(&file, &[]).unwrap(), vec![file]);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let root = TempDir::new().unwrap();
        assert!(find_java_files(root.path(), &["[".to_string()]).is_err());
    }
}
