/*
 * This module manages the category hierarchy on disk: a tree of directories
 * under a user-chosen root. It exposes creation of new categories, a
 * per-level enumeration (`list_children`), and a full recursive enumeration
 * (`build_tree`) used to populate the tree view in one shot. Categories are
 * only ever created by explicit user action; nothing here deletes them.
 *
 * A trait (`CategoryStoreOperations`) abstracts the store for testing and
 * dependency injection; `CoreCategoryStore` is the concrete implementation.
 */
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::category_node::CategoryNode;

#[derive(Debug)]
pub enum CategoryStoreError {
    // Empty or whitespace-only category name.
    InvalidName(String),
    AlreadyExists(PathBuf),
    Io(io::Error),
}

impl From<io::Error> for CategoryStoreError {
    fn from(err: io::Error) -> Self {
        CategoryStoreError::Io(err)
    }
}

impl std::fmt::Display for CategoryStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryStoreError::InvalidName(name) => {
                write!(f, "Invalid category name: '{name}'")
            }
            CategoryStoreError::AlreadyExists(p) => {
                write!(f, "Category already exists: {p:?}")
            }
            CategoryStoreError::Io(e) => write!(f, "Category I/O error: {e}"),
        }
    }
}

impl std::error::Error for CategoryStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CategoryStoreError::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CategoryStoreError>;

pub trait CategoryStoreOperations: Send + Sync {
    /*
     * Makes `root` usable as the categories root, creating the directory
     * (and any missing parents) if needed. Changing the root is a pointer
     * swap: the consuming view re-enumerates from the new root.
     */
    fn ensure_root(&self, root: &Path) -> Result<()>;

    /*
     * Creates a subdirectory named `name` under `parent`. Fails if the name
     * is empty, the directory already exists, or it cannot be created.
     * Returns the new category's path.
     */
    fn create_category(&self, parent: &Path, name: &str) -> Result<PathBuf>;

    /*
     * Enumerates the immediate child categories of `path`, ordered by name,
     * with `has_children` computed from a shallow probe for grandchild
     * directories.
     */
    fn list_children(&self, path: &Path) -> Result<Vec<CategoryNode>>;

    // Full recursive enumeration rooted at `root`, children ordered by name
    // at every level.
    fn build_tree(&self, root: &Path) -> Result<Vec<CategoryNode>>;
}

pub struct CoreCategoryStore {}

impl CoreCategoryStore {
    pub fn new() -> Self {
        CoreCategoryStore {}
    }
}

impl Default for CoreCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// A directory "has children" for tree purposes when it contains at least one
// subdirectory. Files inside category folders (the filed articles) don't count.
fn dir_has_subdirectories(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.any(|entry| {
            entry
                .as_ref()
                .map(|e| e.path().is_dir())
                .unwrap_or(false)
        }),
        Err(_) => false,
    }
}

impl CategoryStoreOperations for CoreCategoryStore {
    fn ensure_root(&self, root: &Path) -> Result<()> {
        if !root.exists() {
            fs::create_dir_all(root)?;
            log::info!("CategoryStore: Created categories root {root:?}.");
        }
        Ok(())
    }

    fn create_category(&self, parent: &Path, name: &str) -> Result<PathBuf> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CategoryStoreError::InvalidName(name.to_string()));
        }

        let new_dir = parent.join(trimmed);
        if new_dir.exists() {
            return Err(CategoryStoreError::AlreadyExists(new_dir));
        }

        fs::create_dir(&new_dir)?;
        log::info!("CategoryStore: Created category {new_dir:?}.");
        Ok(new_dir)
    }

    fn list_children(&self, path: &Path) -> Result<Vec<CategoryNode>> {
        let mut nodes = Vec::new();
        for entry_result in fs::read_dir(path)? {
            let entry = entry_result?;
            let child_path = entry.path();
            if !child_path.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let has_children = dir_has_subdirectories(&child_path);
            nodes.push(CategoryNode::new(child_path, name, has_children));
        }
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(nodes)
    }

    /*
     * Builds the whole category tree by walking the root. Only directories
     * are considered; any filed articles inside them are invisible to the
     * tree. Walk errors on individual entries are logged and skipped so one
     * unreadable folder does not hide the rest of the hierarchy.
     */
    fn build_tree(&self, root: &Path) -> Result<Vec<CategoryNode>> {
        if !root.is_dir() {
            return Err(CategoryStoreError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Categories root {root:?} is not a directory"),
            )));
        }

        let mut nodes_map: std::collections::HashMap<PathBuf, CategoryNode> =
            std::collections::HashMap::new();
        let mut discovery_order: Vec<PathBuf> = Vec::new();

        let walker = WalkDir::new(root).sort_by_file_name().into_iter();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("CategoryStore: Skipping unreadable entry during tree build: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_dir() || entry.path() == root {
                continue;
            }
            let path = entry.path().to_path_buf();
            let name = entry.file_name().to_string_lossy().into_owned();
            let node = CategoryNode::new(path.clone(), name, dir_has_subdirectories(&path));
            nodes_map.insert(path.clone(), node);
            discovery_order.push(path);
        }

        // Reattach children to parents, leaves first, leaving only the
        // root's direct children in the map.
        for child_path in discovery_order.iter().rev() {
            let Some(parent_path) = child_path.parent() else {
                continue;
            };
            if parent_path == root {
                continue;
            }
            if let Some(child_node) = nodes_map.remove(child_path) {
                if let Some(parent_node) = nodes_map.get_mut(parent_path) {
                    parent_node.children.push(child_node);
                } else {
                    log::warn!(
                        "CategoryStore: Parent {parent_path:?} missing for {child_path:?}; keeping as top-level."
                    );
                    nodes_map.insert(child_path.clone(), child_node);
                }
            }
        }

        let mut top_level: Vec<CategoryNode> = nodes_map.into_values().collect();
        sort_nodes_recursively(&mut top_level);
        log::debug!(
            "CategoryStore: Tree build complete; {} top-level categories under {root:?}.",
            top_level.len()
        );
        Ok(top_level)
    }
}

fn sort_nodes_recursively(nodes: &mut [CategoryNode]) {
    nodes.sort_by(|a, b| a.name.cmp(&b.name));
    for node in nodes.iter_mut() {
        if !node.children.is_empty() {
            sort_nodes_recursively(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_root_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("categories").join("nested");
        let store = CoreCategoryStore::new();

        store.ensure_root(&root).unwrap();
        assert!(root.is_dir());

        // Second call is a no-op.
        store.ensure_root(&root).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn test_create_category_under_empty_root() {
        // Arrange
        let dir = tempdir().unwrap();
        let store = CoreCategoryStore::new();

        // Act
        let created = store.create_category(dir.path(), "Travel").unwrap();

        // Assert: exactly one subdirectory named Travel.
        assert_eq!(created, dir.path().join("Travel"));
        let children = store.list_children(dir.path()).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "Travel");
    }

    #[test]
    fn test_create_category_twice_fails_without_modifying_existing() {
        // Arrange
        let dir = tempdir().unwrap();
        let store = CoreCategoryStore::new();
        let created = store.create_category(dir.path(), "Travel").unwrap();
        File::create(created.join("kept.mhtml")).unwrap();

        // Act
        let result = store.create_category(dir.path(), "Travel");

        // Assert
        assert!(matches!(result, Err(CategoryStoreError::AlreadyExists(_))));
        assert!(
            created.join("kept.mhtml").exists(),
            "Existing directory contents must be untouched"
        );
    }

    #[test]
    fn test_create_category_rejects_blank_names() {
        let dir = tempdir().unwrap();
        let store = CoreCategoryStore::new();
        assert!(matches!(
            store.create_category(dir.path(), ""),
            Err(CategoryStoreError::InvalidName(_))
        ));
        assert!(matches!(
            store.create_category(dir.path(), "   "),
            Err(CategoryStoreError::InvalidName(_))
        ));
    }

    #[test]
    fn test_list_children_is_name_ordered_and_skips_files() {
        // Arrange
        let dir = tempdir().unwrap();
        let store = CoreCategoryStore::new();
        store.create_category(dir.path(), "Zoology").unwrap();
        store.create_category(dir.path(), "Art").unwrap();
        let art_sub = store
            .create_category(&dir.path().join("Art"), "Painting")
            .unwrap();
        File::create(dir.path().join("stray.mhtml")).unwrap();

        // Act
        let children = store.list_children(dir.path()).unwrap();

        // Assert
        let names: Vec<&str> = children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Art", "Zoology"]);
        assert!(children[0].has_children, "Art contains Painting");
        assert!(!children[1].has_children);
        assert!(art_sub.is_dir());
    }

    #[test]
    fn test_build_tree_reconstructs_nested_hierarchy() {
        // Arrange
        let dir = tempdir().unwrap();
        let store = CoreCategoryStore::new();
        store.create_category(dir.path(), "Travel").unwrap();
        store
            .create_category(&dir.path().join("Travel"), "Asia")
            .unwrap();
        store
            .create_category(&dir.path().join("Travel").join("Asia"), "Japan")
            .unwrap();
        store.create_category(dir.path(), "Recipes").unwrap();
        File::create(dir.path().join("Travel").join("filed.mht")).unwrap();

        // Act
        let tree = store.build_tree(dir.path()).unwrap();

        // Assert
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name, "Recipes");
        assert_eq!(tree[1].name, "Travel");
        assert_eq!(tree[1].children.len(), 1, "Filed articles are not tree nodes");
        let asia = &tree[1].children[0];
        assert_eq!(asia.name, "Asia");
        assert!(asia.has_children);
        assert_eq!(asia.children[0].name, "Japan");
        assert!(asia.children[0].children.is_empty());
    }

    #[test]
    fn test_build_tree_fails_for_missing_root() {
        let store = CoreCategoryStore::new();
        let result = store.build_tree(Path::new("/no/such/categories/root"));
        assert!(matches!(result, Err(CategoryStoreError::Io(_))));
    }
}
