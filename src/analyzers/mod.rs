use crate::core::errors::Result;
use crate::core::ClassModel;
use std::path::Path;

pub mod java;

pub use java::JavaAnalyzer;

/// Builds the structural model of every type declared in a source file.
pub trait Analyzer: Send + Sync {
    fn parse_classes(&self, content: &str, path: &Path) -> Result<Vec<ClassModel>>;
}

pub fn is_java_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("java"))
}
