/*
 * This module implements the work-queue abstraction over the source folder:
 * a non-recursive scan that yields some remaining web-archive file, or none.
 * It deliberately retains no state between calls; every call re-scans, so
 * files added or removed externally are picked up on the next call. It is not
 * a persistent queue and makes no ordering promise beyond "some remaining
 * file" under a stable directory-entry order.
 */
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

// Archive extensions recognized as unprocessed articles, matched
// case-insensitively against the file extension.
pub const ARCHIVE_EXTENSIONS: [&str; 2] = ["mhtml", "mht"];

/*
 * Defines the operation for finding the next unprocessed article.
 * A missing, unreadable, or match-free source folder is an empty queue,
 * never an error.
 */
pub trait ArticleQueueOperations: Send + Sync {
    fn next(&self, source_folder: &Path) -> Option<PathBuf>;
}

pub struct CoreArticleQueue {}

impl CoreArticleQueue {
    pub fn new() -> Self {
        CoreArticleQueue {}
    }
}

impl Default for CoreArticleQueue {
    fn default() -> Self {
        Self::new()
    }
}

fn is_archive_extension(extension: Option<&OsStr>) -> bool {
    extension
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ARCHIVE_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
}

impl ArticleQueueOperations for CoreArticleQueue {
    /*
     * Scans `source_folder` (non-recursive) for files with an archive
     * extension and returns the first match in directory-entry order.
     * Without filesystem mutation between calls the same path is returned
     * again, which makes retry-after-failure behave predictably.
     */
    fn next(&self, source_folder: &Path) -> Option<PathBuf> {
        let entries = match fs::read_dir(source_folder) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!(
                    "ArticleQueue: Source folder {source_folder:?} not readable ({e}); treating as empty queue."
                );
                return None;
            }
        };

        for entry_result in entries {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("ArticleQueue: Skipping unreadable directory entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if is_archive_extension(path.extension()) {
                log::debug!("ArticleQueue: Next unprocessed article: {path:?}");
                return Some(path);
            }
        }

        log::debug!("ArticleQueue: No unprocessed articles left in {source_folder:?}.");
        None
    }
}
