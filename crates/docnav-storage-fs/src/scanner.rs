//! Content discovery by filesystem walking.
//!
//! This module separates the discovery phase (finding files) from the building
//! phase (reading and parsing them). The Scanner only identifies files that
//! could form documents or declarations, returning lightweight references for
//! `FsStorage` to process.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use docnav_storage::{is_content_file, is_toc_file};

/// What a discovered file contributes to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FileKind {
    /// Markdown/MDX content document.
    Content,
    /// Table-of-contents declaration.
    Toc,
}

/// Reference to a discovered file.
///
/// Contains only locations, no content is read at this stage.
#[derive(Clone, Debug)]
pub(crate) struct FileRef {
    /// Project-relative identifier (e.g., `/docs/basics/intro.md`).
    pub fs_path: String,
    /// Location on disk.
    pub os_path: PathBuf,
    /// File role.
    pub kind: FileKind,
}

/// Discovers file references by walking configured content roots.
pub(crate) struct Scanner {
    project_dir: PathBuf,
    roots: Vec<String>,
}

impl Scanner {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `project_dir` - Directory that content roots are relative to
    /// * `roots` - Content roots with a leading `/` (e.g., `/docs/basics`)
    pub fn new(project_dir: PathBuf, roots: Vec<String>) -> Self {
        Self { project_dir, roots }
    }

    /// Scan every root and return file references ordered by `fs_path`.
    ///
    /// Missing roots are skipped. Overlapping roots yield each file once.
    pub fn scan(&self) -> Vec<FileRef> {
        let mut refs = BTreeMap::new();
        for root in &self.roots {
            let prefix = root.trim_end_matches('/');
            let dir = self.project_dir.join(prefix.trim_start_matches('/'));
            if dir.is_dir() {
                scan_directory(&dir, prefix, &mut refs);
            } else {
                tracing::debug!(root = %prefix, dir = %dir.display(), "Content root not found");
            }
        }
        refs.into_values().collect()
    }
}

/// Recursively collect content and declaration files below `dir_path`.
fn scan_directory(dir_path: &Path, fs_prefix: &str, refs: &mut BTreeMap<String, FileRef>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        // Skip hidden files/dirs
        if name.starts_with('.') {
            continue;
        }

        let fs_path = format!("{fs_prefix}/{name}");
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            scan_directory(&entry.path(), &fs_path, refs);
            continue;
        }

        let kind = if is_content_file(&name) {
            FileKind::Content
        } else if is_toc_file(&name) {
            FileKind::Toc
        } else {
            continue;
        };

        refs.insert(
            fs_path.clone(),
            FileRef {
                fs_path,
                os_path: entry.path(),
                kind,
            },
        );
    }
}
