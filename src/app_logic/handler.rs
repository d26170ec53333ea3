/*
 * Manages the triage workflow in a platform-agnostic manner: load the next
 * unprocessed article, wait for the user to pick a category, file the
 * article, advance. It processes `AppEvent`s received from the shell and
 * queues `PlatformCommand`s to update the UI. All collaborators are injected
 * as trait objects (`ArticleQueueOperations`, `ArticleFilerOperations`,
 * `CategoryStoreOperations`, `SettingsStoreOperations`), so the controller
 * carries explicit context instead of process-wide singletons.
 *
 * Everything runs synchronously on the shell's single logic thread; each
 * event either completes or fails before control returns to the dispatcher.
 */
use crate::core::{
    ArticleFilerOperations, ArticleQueueOperations, CategoryNode, CategoryStoreOperations,
    Settings, SettingsStoreOperations, path_utils,
};
use crate::platform_layer::{
    AppEvent, MenuAction, MessageSeverity, PlatformCommand, PlatformEventHandler, WindowId,
};
use crate::ui_description_layer;

use super::main_window_ui_state::MainWindowUiState;
use super::ui_constants::{
    DIALOG_TAG_NEW_CATEGORY_NAME, DIALOG_TAG_SELECT_CATEGORIES_ROOT,
    DIALOG_TAG_SELECT_SOURCE_FOLDER, ID_LABEL_STATUS, ID_TREEVIEW_CATEGORIES,
};

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) const APP_NAME_FOR_SETTINGS: &str = "ArticleSorter";

/*
 * The filing workflow's state machine. `ArticleLoaded` carries the current
 * article's path; the path referred to an existing file in the source folder
 * when it was set, though it may vanish concurrently (accepted race, detected
 * at filing time).
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    ArticleLoaded(PathBuf),
    AllProcessed,
}

pub struct MyAppLogic {
    article_queue: Arc<dyn ArticleQueueOperations>,
    article_filer: Arc<dyn ArticleFilerOperations>,
    category_store: Arc<dyn CategoryStoreOperations>,
    settings_store: Arc<dyn SettingsStoreOperations>,

    pub(crate) workflow_state: WorkflowState,
    pub(crate) source_folder: Option<PathBuf>,
    pub(crate) categories_root: Option<PathBuf>,
    pub(crate) main_window_ui: Option<MainWindowUiState>,

    command_queue: VecDeque<PlatformCommand>,
}

impl MyAppLogic {
    pub fn new(
        article_queue: Arc<dyn ArticleQueueOperations>,
        article_filer: Arc<dyn ArticleFilerOperations>,
        category_store: Arc<dyn CategoryStoreOperations>,
        settings_store: Arc<dyn SettingsStoreOperations>,
    ) -> Self {
        MyAppLogic {
            article_queue,
            article_filer,
            category_store,
            settings_store,
            workflow_state: WorkflowState::Idle,
            source_folder: None,
            categories_root: None,
            main_window_ui: None,
            command_queue: VecDeque::new(),
        }
    }

    fn enqueue_command(&mut self, command: PlatformCommand) {
        self.command_queue.push_back(command);
    }

    fn current_article(&self) -> Option<&PathBuf> {
        match &self.workflow_state {
            WorkflowState::ArticleLoaded(path) => Some(path),
            _ => None,
        }
    }

    fn update_window_title(&mut self, window_id: WindowId) {
        let title = MainWindowUiState::compose_window_title(
            self.source_folder.as_deref(),
            self.current_article().map(|p| p.as_path()),
        );
        self.enqueue_command(PlatformCommand::SetWindowTitle { window_id, title });
    }

    fn update_status(&mut self, window_id: WindowId, text: String, severity: MessageSeverity) {
        self.enqueue_command(PlatformCommand::UpdateStatusLabel {
            window_id,
            control_id: ID_LABEL_STATUS,
            text,
            severity,
        });
    }

    fn show_notice(
        &mut self,
        window_id: WindowId,
        severity: MessageSeverity,
        title: &str,
        message: String,
    ) {
        self.enqueue_command(PlatformCommand::ShowNoticeDialog {
            window_id,
            severity,
            title: title.to_string(),
            message,
        });
    }

    /*
     * Advances the queue: asks for the next unprocessed article and either
     * hands it to the display surface (-> ArticleLoaded) or shows the
     * all-processed page (-> AllProcessed). An unset source folder behaves
     * as an empty queue.
     */
    fn load_next_article(&mut self, window_id: WindowId) {
        let next = self
            .source_folder
            .as_ref()
            .and_then(|folder| self.article_queue.next(folder));

        match next {
            Some(article_path) => {
                log::info!("AppLogic: Loading article {article_path:?}.");
                let file_url = path_utils::to_file_url(&article_path);
                let file_name = article_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.workflow_state = WorkflowState::ArticleLoaded(article_path);
                self.enqueue_command(PlatformCommand::LoadDisplayContent {
                    window_id,
                    file_url,
                });
                self.update_window_title(window_id);
                self.update_status(
                    window_id,
                    format!("Loaded: {file_name}"),
                    MessageSeverity::Information,
                );
            }
            None => {
                log::info!("AppLogic: No unprocessed articles remain.");
                self.workflow_state = WorkflowState::AllProcessed;
                self.enqueue_command(PlatformCommand::SetDisplayHtml {
                    window_id,
                    html: "<h1>All files processed!</h1>".to_string(),
                });
                self.update_window_title(window_id);
                self.update_status(
                    window_id,
                    "All files processed - no more articles".to_string(),
                    MessageSeverity::Information,
                );
            }
        }
    }

    /*
     * Rebuilds the category tree view from the store. Repopulation is a
     * pointer swap as far as the view is concerned: every previously issued
     * tree item id (and the remembered selection) is invalidated.
     */
    fn populate_category_tree(&mut self, window_id: WindowId) {
        let Some(root) = self.categories_root.clone() else {
            log::error!("AppLogic: populate_category_tree called without a categories root.");
            return;
        };

        let tree_result = self.category_store.build_tree(&root);
        let Some(ui_state) = self.main_window_ui.as_mut() else {
            log::error!("AppLogic: populate_category_tree called without main window UI state.");
            return;
        };

        match tree_result {
            Ok(nodes) => {
                ui_state.reset_tree_mapping();
                let items = CategoryNode::build_tree_item_descriptors_recursive(
                    &nodes,
                    &mut ui_state.tree_item_paths,
                    &mut ui_state.next_tree_item_id_counter,
                );
                self.enqueue_command(PlatformCommand::PopulateTreeView {
                    window_id,
                    control_id: ID_TREEVIEW_CATEGORIES,
                    items,
                });
            }
            Err(e) => {
                log::error!("AppLogic: Failed to enumerate categories under {root:?}: {e}");
                self.show_notice(
                    window_id,
                    MessageSeverity::Warning,
                    "Categories",
                    format!("Failed to read categories folder: {e}"),
                );
            }
        }
    }

    /*
     * Startup sequence, run once the shell reports the static UI is in
     * place: load persisted settings, resolve and ensure the categories
     * root (falling back to the home-directory default), populate the tree,
     * and kick off the first scan when a source folder is configured.
     */
    fn on_main_window_ui_setup_complete(&mut self, window_id: WindowId) {
        self.main_window_ui = Some(MainWindowUiState::new(window_id));

        match self.settings_store.load(APP_NAME_FOR_SETTINGS) {
            Ok(settings) => {
                log::debug!("AppLogic: Loaded settings: {settings:?}");
                self.source_folder = settings.source_folder;
                self.categories_root = settings.categories_root_folder;
            }
            Err(e) => {
                log::error!("AppLogic: Failed to load settings: {e}. Proceeding with defaults.");
            }
        }

        if self.categories_root.is_none() {
            self.categories_root = path_utils::default_categories_root();
            log::debug!(
                "AppLogic: No categories root configured; defaulting to {:?}.",
                self.categories_root
            );
        }

        if let Some(root) = self.categories_root.clone() {
            if let Err(e) = self.category_store.ensure_root(&root) {
                log::error!("AppLogic: Failed to ensure categories root {root:?}: {e}");
                self.show_notice(
                    window_id,
                    MessageSeverity::Error,
                    "Categories",
                    format!("Failed to create categories folder: {e}"),
                );
            } else {
                self.populate_category_tree(window_id);
            }
        }

        self.update_window_title(window_id);

        // The first scan runs as the tail of startup handling; on a single
        // logic thread this orders it after the window is fully constructed.
        if self.source_folder.is_some() {
            self.load_next_article(window_id);
        }

        self.enqueue_command(PlatformCommand::ShowWindow { window_id });
    }

    /*
     * Switching source folders abandons in-progress triage: a loaded article
     * is discarded without filing, and `AllProcessed` is reset so the new
     * folder is scanned immediately.
     */
    fn set_source_folder(&mut self, window_id: WindowId, folder: PathBuf) {
        if let WorkflowState::ArticleLoaded(old) = &self.workflow_state {
            log::info!("AppLogic: Discarding unfiled article {old:?} on source folder change.");
        }
        self.workflow_state = WorkflowState::Idle;
        self.source_folder = Some(folder.clone());
        self.update_window_title(window_id);
        self.update_status(
            window_id,
            format!("Source folder set to: {}", folder.display()),
            MessageSeverity::Information,
        );
        self.load_next_article(window_id);
    }

    fn set_categories_root(&mut self, window_id: WindowId, root: PathBuf) {
        if let Err(e) = self.category_store.ensure_root(&root) {
            log::error!("AppLogic: Failed to set categories root {root:?}: {e}");
            self.show_notice(
                window_id,
                MessageSeverity::Error,
                "Categories",
                format!("Failed to create categories folder: {e}"),
            );
            return;
        }
        self.categories_root = Some(root.clone());
        self.populate_category_tree(window_id);
        self.update_status(
            window_id,
            format!("Categories root: {}", root.display()),
            MessageSeverity::Information,
        );
    }

    fn on_move_article_clicked(&mut self, window_id: WindowId) {
        let Some(article_path) = self.current_article().cloned() else {
            log::debug!("AppLogic: Move requested but no article is loaded.");
            self.update_status(
                window_id,
                "No article is loaded.".to_string(),
                MessageSeverity::Information,
            );
            return;
        };

        let selected = self
            .main_window_ui
            .as_ref()
            .and_then(|ui| ui.selected_category_path.clone());
        let Some(destination) = selected else {
            log::debug!("AppLogic: Move requested but no category is selected.");
            self.update_status(
                window_id,
                "Select a category to move the article into.".to_string(),
                MessageSeverity::Information,
            );
            return;
        };

        match self.article_filer.file(&article_path, &destination) {
            Ok(new_path) => {
                log::info!("AppLogic: Filed article to {new_path:?}.");
                self.workflow_state = WorkflowState::Idle;
                self.load_next_article(window_id);
            }
            Err(e) => {
                // Stay in ArticleLoaded; the action is re-triable.
                log::error!("AppLogic: Failed to move article {article_path:?}: {e}");
                self.show_notice(
                    window_id,
                    MessageSeverity::Error,
                    "Move Article",
                    format!("Failed to move article: {e}"),
                );
            }
        }
    }

    fn on_new_category_submitted(&mut self, window_id: WindowId, name: String) {
        let parent = self
            .main_window_ui
            .as_ref()
            .and_then(|ui| ui.selected_category_path.clone())
            .or_else(|| self.categories_root.clone());
        let Some(parent) = parent else {
            log::error!("AppLogic: New category submitted without a categories root.");
            return;
        };

        match self.category_store.create_category(&parent, &name) {
            Ok(created) => {
                log::info!("AppLogic: Created category {created:?}.");
                self.update_status(
                    window_id,
                    format!("Category created: {name}"),
                    MessageSeverity::Information,
                );
                self.populate_category_tree(window_id);
            }
            Err(e) => {
                log::warn!("AppLogic: Failed to create category '{name}' under {parent:?}: {e}");
                self.show_notice(
                    window_id,
                    MessageSeverity::Warning,
                    "New Category",
                    format!("Failed to create folder: {e}"),
                );
            }
        }
    }

    fn persist_settings(&self) {
        let settings = Settings {
            source_folder: self.source_folder.clone(),
            categories_root_folder: self.categories_root.clone(),
        };
        if let Err(e) = self.settings_store.save(APP_NAME_FOR_SETTINGS, &settings) {
            log::error!("AppLogic: Failed to save settings: {e}");
        }
    }

    fn main_window_id(&self) -> Option<WindowId> {
        self.main_window_ui.as_ref().map(|ui| ui.window_id)
    }
}

impl PlatformEventHandler for MyAppLogic {
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::MainWindowUISetupComplete { window_id } => {
                self.command_queue
                    .extend(ui_description_layer::describe_main_window_layout(window_id));
                self.on_main_window_ui_setup_complete(window_id);
            }
            AppEvent::WindowCloseRequestedByUser { window_id } => {
                if self.main_window_id() == Some(window_id) {
                    self.persist_settings();
                    self.enqueue_command(PlatformCommand::CloseWindow { window_id });
                }
            }
            AppEvent::WindowDestroyed { window_id } => {
                if self.main_window_id() == Some(window_id) {
                    log::debug!("AppLogic: Main window destroyed.");
                    self.main_window_ui = None;
                    self.workflow_state = WorkflowState::Idle;
                    self.enqueue_command(PlatformCommand::QuitApplication);
                }
            }
            AppEvent::MenuActionClicked { action } => {
                let Some(window_id) = self.main_window_id() else {
                    log::warn!("AppLogic: Menu action {action:?} before main window setup.");
                    return;
                };
                match action {
                    MenuAction::SelectSourceFolder => {
                        let initial_dir = self.source_folder.clone();
                        self.enqueue_command(PlatformCommand::ShowFolderPickerDialog {
                            window_id,
                            title: "Select Folder with MHTML Files".to_string(),
                            initial_dir,
                            context_tag: Some(DIALOG_TAG_SELECT_SOURCE_FOLDER.to_string()),
                        });
                    }
                    MenuAction::SelectCategoriesRoot => {
                        let initial_dir = self.categories_root.clone();
                        self.enqueue_command(PlatformCommand::ShowFolderPickerDialog {
                            window_id,
                            title: "Select Categories Root Folder".to_string(),
                            initial_dir,
                            context_tag: Some(DIALOG_TAG_SELECT_CATEGORIES_ROOT.to_string()),
                        });
                    }
                    MenuAction::Quit => {
                        self.persist_settings();
                        self.enqueue_command(PlatformCommand::CloseWindow { window_id });
                    }
                }
            }
            AppEvent::ButtonClicked {
                window_id,
                control_id,
            } => {
                if self.main_window_id() != Some(window_id) {
                    return;
                }
                match control_id {
                    super::ui_constants::ID_BUTTON_MOVE_ARTICLE => {
                        self.on_move_article_clicked(window_id);
                    }
                    super::ui_constants::ID_BUTTON_NEW_CATEGORY => {
                        self.enqueue_command(PlatformCommand::ShowTextInputDialog {
                            window_id,
                            title: "New Category".to_string(),
                            prompt: "Category name:".to_string(),
                            default_text: None,
                            context_tag: Some(DIALOG_TAG_NEW_CATEGORY_NAME.to_string()),
                        });
                    }
                    other => {
                        log::warn!("AppLogic: Click on unknown control id {other}.");
                    }
                }
            }
            AppEvent::TreeViewItemSelected { window_id, item_id } => {
                if self.main_window_id() != Some(window_id) {
                    return;
                }
                if let Some(ui_state) = self.main_window_ui.as_mut() {
                    match ui_state.tree_item_paths.get(&item_id) {
                        Some(path) => {
                            log::debug!("AppLogic: Category selected: {path:?}");
                            ui_state.selected_category_path = Some(path.clone());
                        }
                        None => {
                            log::error!("AppLogic: Unknown tree item {item_id:?} selected.");
                        }
                    }
                }
            }
            AppEvent::FolderPickerDialogCompleted {
                window_id,
                path,
                context_tag,
            } => {
                if self.main_window_id() != Some(window_id) {
                    return;
                }
                let Some(path) = path else {
                    log::debug!("AppLogic: Folder picker cancelled ({context_tag:?}).");
                    return;
                };
                match context_tag.as_deref() {
                    Some(DIALOG_TAG_SELECT_SOURCE_FOLDER) => {
                        self.set_source_folder(window_id, path);
                    }
                    Some(DIALOG_TAG_SELECT_CATEGORIES_ROOT) => {
                        self.set_categories_root(window_id, path);
                    }
                    other => {
                        log::error!("AppLogic: Folder picker completed with unknown tag {other:?}.");
                    }
                }
            }
            AppEvent::TextInputDialogCompleted {
                window_id,
                text,
                context_tag,
            } => {
                if self.main_window_id() != Some(window_id) {
                    return;
                }
                let Some(text) = text else {
                    log::debug!("AppLogic: Text input cancelled ({context_tag:?}).");
                    return;
                };
                match context_tag.as_deref() {
                    Some(DIALOG_TAG_NEW_CATEGORY_NAME) => {
                        self.on_new_category_submitted(window_id, text);
                    }
                    other => {
                        log::error!("AppLogic: Text input completed with unknown tag {other:?}.");
                    }
                }
            }
            AppEvent::DisplayContentLoadCompleted { window_id, success } => {
                // Status display only; never gates the filing workflow.
                if self.main_window_id() != Some(window_id) {
                    return;
                }
                if !success {
                    self.update_status(
                        window_id,
                        "Failed to display the current article.".to_string(),
                        MessageSeverity::Warning,
                    );
                }
            }
        }
    }

    fn on_quit(&mut self) {
        log::debug!("AppLogic: on_quit called by the shell.");
        self.persist_settings();
    }

    fn try_dequeue_command(&mut self) -> Option<PlatformCommand> {
        self.command_queue.pop_front()
    }
}
