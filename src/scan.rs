//! Accessor detection over source files and directory trees.
//!
//! Files are parsed and classified independently, so the work is spread
//! across a rayon pool. Each file gets its own [`FieldIndex`] per class and
//! the classifier is called once per method or constructor.

use crate::analyzers::{Analyzer, JavaAnalyzer};
use crate::classifier::{classify_indexed, AccessorKind, FieldIndex};
use crate::config::ScanConfig;
use crate::core::errors::{Error, Result};
use crate::core::ClassModel;
use crate::io::walker::find_java_files;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Verdict for one method or constructor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodVerdict {
    /// Dotted class path, e.g. `Outer.Inner`
    pub class: String,
    pub method: String,
    pub line: usize,
    pub constructor: bool,
    pub accessor: Option<AccessorKind>,
}

impl MethodVerdict {
    pub fn is_accessor(&self) -> bool {
        self.accessor.is_some()
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.class, self.method)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub methods: Vec<MethodVerdict>,
    /// Set when the file could not be read or parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn accessors(&self) -> impl Iterator<Item = &MethodVerdict> {
        self.methods.iter().filter(|m| m.is_accessor())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub files: usize,
    pub failed_files: usize,
    pub methods: usize,
    pub getters: usize,
    pub setters: usize,
}

impl ScanSummary {
    pub fn accessors(&self) -> usize {
        self.getters + self.setters
    }

    fn from_files(files: &[FileReport]) -> Self {
        files.iter().fold(Self::default(), |mut summary, file| {
            summary.files += 1;
            if file.error.is_some() {
                summary.failed_files += 1;
            }
            for method in &file.methods {
                summary.methods += 1;
                match method.accessor {
                    Some(AccessorKind::Getter { .. }) => summary.getters += 1,
                    Some(AccessorKind::Setter { .. }) => summary.setters += 1,
                    None => {}
                }
            }
            summary
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files: Vec<FileReport>,
    pub summary: ScanSummary,
}

/// Classify every method and constructor of the given classes, nested
/// types included, in declaration order.
pub fn classify_classes(classes: &[ClassModel]) -> Vec<MethodVerdict> {
    let mut verdicts = Vec::new();
    for class in classes {
        collect_verdicts(class, &class.name, &mut verdicts);
    }
    verdicts
}

fn collect_verdicts(class: &ClassModel, class_path: &str, verdicts: &mut Vec<MethodVerdict>) {
    let fields = FieldIndex::new(class);
    for member in class.callables() {
        verdicts.push(MethodVerdict {
            class: class_path.to_string(),
            method: member.name().unwrap_or_default().to_string(),
            line: member.line(),
            constructor: member.is_constructor(),
            accessor: classify_indexed(&fields, member),
        });
    }
    for nested in class.nested_types() {
        collect_verdicts(nested, &format!("{}.{}", class_path, nested.name), verdicts);
    }
}

pub fn scan_source(analyzer: &dyn Analyzer, source: &str, path: &Path) -> Result<FileReport> {
    let classes = analyzer.parse_classes(source, path)?;
    Ok(FileReport {
        path: path.to_path_buf(),
        methods: classify_classes(&classes),
        error: None,
    })
}

/// Scan one file. Read and parse failures are recorded in the report.
pub fn scan_file(analyzer: &dyn Analyzer, path: &Path) -> FileReport {
    log::debug!("Scanning {}", path.display());
    let result = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read source file", path, e))
        .and_then(|source| scan_source(analyzer, &source, path));

    result.unwrap_or_else(|e| {
        log::warn!("Skipping {}: {}", path.display(), e);
        FileReport {
            path: path.to_path_buf(),
            methods: Vec::new(),
            error: Some(e.to_string()),
        }
    })
}

/// Scan a file or directory tree of Java sources.
pub fn scan_paths(root: &Path, config: &ScanConfig) -> Result<ScanReport> {
    let paths = find_java_files(root, &config.exclude)?;
    log::debug!("Found {} Java files under {}", paths.len(), root.display());

    let analyzer = JavaAnalyzer::new();
    let scan_all = || -> Vec<FileReport> {
        paths
            .par_iter()
            .map(|path| scan_file(&analyzer, path))
            .collect()
    };

    let files = if config.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build thread pool: {}", e)))?
            .install(scan_all)
    } else {
        scan_all()
    };

    let summary = ScanSummary::from_files(&files);
    log::info!(
        "Scanned {} files: {} methods, {} getters, {} setters",
        summary.files,
        summary.methods,
        summary.getters,
        summary.setters
    );

    Ok(ScanReport {
        root: root.to_path_buf(),
        files,
        summary,
    })
}

/// Find a method by `Class.method` (nested classes as `Outer.Inner.method`).
/// The first declaration wins when the method is overloaded.
pub fn find_verdict<'a>(
    verdicts: &'a [MethodVerdict],
    qualified_name: &str,
) -> Result<&'a MethodVerdict> {
    verdicts
        .iter()
        .find(|verdict| verdict.qualified_name() == qualified_name)
        .ok_or_else(|| Error::NotFound(qualified_name.to_string()))
}
