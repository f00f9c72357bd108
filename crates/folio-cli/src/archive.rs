//! Archive discovery and unpacking.
//!
//! Each corpus directory holds one archive per source text. Discovery walks
//! the corpus roots for `.zip` files grouped by containing directory;
//! unpacking extracts the first archive of a directory into a caller-owned
//! workspace and locates the text file inside it.

use crate::error::{CliError, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;
use zip::ZipArchive;

/// The archives found in one corpus directory, sorted by name.
#[derive(Debug, Clone)]
pub struct ArchiveSet {
    /// The directory containing the archives
    pub directory: PathBuf,

    /// Archive paths in sorted order
    pub archives: Vec<PathBuf>,
}

/// Find every `.zip` archive beneath the given roots, grouped by containing
/// directory, in sorted directory order.
pub fn discover(roots: &[String]) -> Vec<ArchiveSet> {
    let mut by_directory: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();

    for root in roots {
        for entry in WalkDir::new(root).into_iter() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root, e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("zip")) {
                let parent = path.parent().unwrap_or(Path::new("")).to_path_buf();
                by_directory.entry(parent).or_default().push(path.to_path_buf());
            }
        }
    }

    by_directory
        .into_iter()
        .map(|(directory, mut archives)| {
            archives.sort();
            archives.dedup();
            ArchiveSet { directory, archives }
        })
        .collect()
}

/// Unpack the first archive of a set into `workspace` and return the path of
/// the first `.txt` member found.
///
/// The workspace is caller-owned (a scoped temporary directory in the
/// runner), so extracted files never touch the corpus directories and are
/// removed whether processing succeeds or fails.
pub fn unpack_first(set: &ArchiveSet, workspace: &Path) -> Result<PathBuf> {
    let archive_path = set
        .archives
        .first()
        .ok_or_else(|| CliError::MissingArchive(set.directory.clone()))?;

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    archive.extract(workspace)?;

    find_text_file(workspace)
        .ok_or_else(|| CliError::MissingTextFile(archive_path.clone()))
}

fn find_text_file(workspace: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = WalkDir::new(workspace)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt")))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
