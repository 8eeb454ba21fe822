use crate::analysis::{AnalyzerOptions, Finding, analyze_source};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source root: {0}")]
    InvalidRoot(String),
    #[error("Invalid glob pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

/// Include/exclude glob filter over paths relative to the analysed root.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: Vec<glob::Pattern>,
    exclude: Vec<glob::Pattern>,
}

impl FileFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, IoError> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// True when `path` matches an include pattern and no exclude pattern.
    pub fn accepts(&self, path: &RelativePath) -> bool {
        let path = path.as_str();
        self.include.iter().any(|p| p.matches(path)) && !self.exclude.iter().any(|p| p.matches(path))
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            include: compile(&["*.cs".to_string()]).unwrap_or_default(),
            exclude: Vec::new(),
        }
    }
}

fn compile(patterns: &[String]) -> Result<Vec<glob::Pattern>, IoError> {
    patterns
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern).map_err(|e| IoError::Pattern {
                pattern: pattern.clone(),
                message: e.msg.to_string(),
            })
        })
        .collect()
}

/// Findings for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: RelativePathBuf,
    pub source: String,
    pub findings: Vec<Finding>,
}

/// Read a source file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read and analyze one file
pub fn analyze_file(
    relative_path: &RelativePath,
    root: &Path,
    options: &AnalyzerOptions,
) -> Result<FileReport, IoError> {
    let source = read_file(relative_path, root)?;
    let findings = analyze_source(&source, options);
    log::debug!("{}: {} findings", relative_path, findings.len());

    Ok(FileReport {
        path: relative_path.to_relative_path_buf(),
        source,
        findings,
    })
}

/// Scan for source files under `root`, relative to it and sorted.
///
/// Hidden directories (`.git`, `.vs`, ...) are skipped.
pub fn scan_source_files(root: &Path, filter: &FileFilter) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_root(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, root, filter, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    filter: &FileFilter,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            let hidden = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'));
            if !hidden {
                scan_directory_recursive(root, &path, filter, files)?;
            }
        } else if let Ok(stripped) = path.strip_prefix(root)
            && let Ok(relative) = RelativePathBuf::from_path(stripped)
            && filter.accepts(&relative)
        {
            files.push(relative);
        }
    }

    Ok(())
}

pub fn validate_root(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidRoot(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
