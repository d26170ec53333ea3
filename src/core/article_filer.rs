/*
 * This module moves a triaged article into its chosen category folder. The
 * move preserves the file's base name and relies on the filesystem rename
 * primitive, so no partial-file states are produced. A same-named file at
 * the destination is a conflict surfaced to the caller; nothing is ever
 * overwritten or auto-renamed.
 *
 * A trait (`ArticleFilerOperations`) abstracts the operation for testing and
 * dependency injection; `CoreArticleFiler` is the concrete implementation.
 */
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum FilerError {
    // The article vanished between scan and use (external filesystem race).
    NotFound(PathBuf),
    // A file with the same base name already exists at the destination.
    OverwriteConflict { source: PathBuf, destination: PathBuf },
    Io(io::Error),
}

impl From<io::Error> for FilerError {
    fn from(err: io::Error) -> Self {
        FilerError::Io(err)
    }
}

impl std::fmt::Display for FilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilerError::NotFound(p) => write!(f, "Article not found: {p:?}"),
            FilerError::OverwriteConflict {
                source,
                destination,
            } => write!(
                f,
                "A file named like {source:?} already exists at {destination:?}"
            ),
            FilerError::Io(e) => write!(f, "I/O error while moving article: {e}"),
        }
    }
}

impl std::error::Error for FilerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilerError>;

pub trait ArticleFilerOperations: Send + Sync {
    /*
     * Moves `article_path` into `destination_folder`, preserving the base
     * name. Returns the article's new path on success.
     */
    fn file(&self, article_path: &Path, destination_folder: &Path) -> Result<PathBuf>;
}

pub struct CoreArticleFiler {}

impl CoreArticleFiler {
    pub fn new() -> Self {
        CoreArticleFiler {}
    }
}

impl Default for CoreArticleFiler {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleFilerOperations for CoreArticleFiler {
    fn file(&self, article_path: &Path, destination_folder: &Path) -> Result<PathBuf> {
        if !article_path.is_file() {
            return Err(FilerError::NotFound(article_path.to_path_buf()));
        }

        // "Drop it near here": a non-directory destination retargets to its
        // containing directory. Logged, since selecting a file in a folder
        // tree usually means its parent.
        let mut destination_folder = destination_folder;
        if !destination_folder.is_dir() {
            match destination_folder.parent() {
                Some(parent) => {
                    log::warn!(
                        "ArticleFiler: Destination {destination_folder:?} is not a directory; retargeting to parent {parent:?}."
                    );
                    destination_folder = parent;
                }
                None => {
                    return Err(FilerError::Io(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("Destination {destination_folder:?} has no parent directory"),
                    )));
                }
            }
        }

        let file_name = article_path.file_name().ok_or_else(|| {
            FilerError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Article path {article_path:?} has no file name"),
            ))
        })?;
        let new_path = destination_folder.join(file_name);

        if new_path.exists() {
            return Err(FilerError::OverwriteConflict {
                source: article_path.to_path_buf(),
                destination: new_path,
            });
        }

        fs::rename(article_path, &new_path)?;
        log::info!("ArticleFiler: Moved {article_path:?} to {new_path:?}.");
        Ok(new_path)
    }
}
