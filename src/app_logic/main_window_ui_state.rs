/*
 * This module defines the MainWindowUiState struct: state tied to the main
 * window's presentation rather than to the triage workflow itself. That
 * covers the window identifier, the mapping from tree item ids back to
 * category paths, the remembered tree selection, and window title
 * composition.
 */
use crate::platform_layer::{TreeItemId, WindowId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub type TreeItemToPathMap = HashMap<TreeItemId, PathBuf>;

#[derive(Debug)]
pub struct MainWindowUiState {
    pub window_id: WindowId,
    /* Maps tree item ids handed to the shell back to category paths. */
    pub tree_item_paths: TreeItemToPathMap,
    /* Counter generating unique TreeItemIds for the category tree. */
    pub next_tree_item_id_counter: u64,
    /* The category the user currently has selected in the tree, if any. */
    pub selected_category_path: Option<PathBuf>,
}

impl MainWindowUiState {
    pub fn new(window_id: WindowId) -> Self {
        log::debug!("MainWindowUiState::new called for window_id: {window_id:?}");
        MainWindowUiState {
            window_id,
            tree_item_paths: HashMap::new(),
            next_tree_item_id_counter: 1,
            selected_category_path: None,
        }
    }

    // Repopulating the tree invalidates every previously issued item id.
    pub fn reset_tree_mapping(&mut self) {
        self.tree_item_paths.clear();
        self.next_tree_item_id_counter = 1;
        self.selected_category_path = None;
    }

    /*
     * Composes the main window title: the application name, the source
     * folder's directory name when one is set, and the current article's
     * file name when one is loaded.
     */
    pub fn compose_window_title(
        source_folder: Option<&Path>,
        current_article: Option<&Path>,
    ) -> String {
        let mut title = "Article Sorter".to_string();
        if let Some(folder) = source_folder {
            if let Some(dir_name) = folder.file_name() {
                title = format!("{title} - {}", dir_name.to_string_lossy());
            }
        }
        if let Some(article) = current_article {
            if let Some(file_name) = article.file_name() {
                title = format!("{title} - {}", file_name.to_string_lossy());
            }
        }
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_window_ui_state_new() {
        // Arrange
        crate::initialize_logging();
        let test_window_id = WindowId(42);

        // Act
        let ui_state = MainWindowUiState::new(test_window_id);

        // Assert
        assert_eq!(ui_state.window_id, test_window_id);
        assert!(ui_state.tree_item_paths.is_empty());
        assert_eq!(ui_state.next_tree_item_id_counter, 1);
        assert!(ui_state.selected_category_path.is_none());
    }

    #[test]
    fn test_reset_tree_mapping_clears_selection_and_ids() {
        crate::initialize_logging();
        let mut ui_state = MainWindowUiState::new(WindowId(1));
        ui_state
            .tree_item_paths
            .insert(TreeItemId(7), PathBuf::from("/cats/Travel"));
        ui_state.next_tree_item_id_counter = 8;
        ui_state.selected_category_path = Some(PathBuf::from("/cats/Travel"));

        ui_state.reset_tree_mapping();

        assert!(ui_state.tree_item_paths.is_empty());
        assert_eq!(ui_state.next_tree_item_id_counter, 1);
        assert!(ui_state.selected_category_path.is_none());
    }

    #[test]
    fn test_compose_window_title_variants() {
        crate::initialize_logging();

        let title1 = MainWindowUiState::compose_window_title(None, None);
        assert_eq!(title1, "Article Sorter");

        let title2 = MainWindowUiState::compose_window_title(
            Some(Path::new("/home/user/saved_pages")),
            None,
        );
        assert_eq!(title2, "Article Sorter - saved_pages");

        let title3 = MainWindowUiState::compose_window_title(
            Some(Path::new("/home/user/saved_pages")),
            Some(Path::new("/home/user/saved_pages/trip.mhtml")),
        );
        assert_eq!(title3, "Article Sorter - saved_pages - trip.mhtml");
    }
}
