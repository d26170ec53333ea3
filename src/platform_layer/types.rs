/*
 * This module defines the data types used for communication between the
 * application logic and the native shell. It includes identifiers for windows
 * and tree items, platform-agnostic event types (`AppEvent`), commands for the
 * shell (`PlatformCommand`), severity levels for status messages
 * (`MessageSeverity`), and semantic identifiers for menu actions
 * (`MenuAction`). It also defines the `PlatformEventHandler` trait that the
 * application logic implements.
 *
 * The shell itself (window chrome, web-rendering surface, dialogs, tree
 * widget) is an external collaborator and is not part of this crate; these
 * types are its fixed request/response contract.
 */

use std::path::PathBuf;

// An opaque identifier for a native window, managed by the shell.
//
// The application logic uses this ID to refer to specific windows when
// sending commands or receiving events, without knowing native handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub usize);

// An opaque identifier for an item within the category tree view.
//
// Generated and managed by the application logic; the shell maps it to
// native tree item handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeItemId(pub u64);

/*
 * Represents logical menu actions in a platform-agnostic way.
 * Used in `MenuItemConfig` and `AppEvent` to identify menu actions
 * semantically rather than by raw control IDs. The shell manages the mapping
 * from these actions to native menu item IDs.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SelectSourceFolder,
    SelectCategoriesRoot,
    Quit,
}

/*
 * Configuration for a single menu item, used by `PlatformCommand::CreateMainMenu`.
 * Items that are themselves popups (e.g. a "File" menu opening a submenu)
 * have `action: None`.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemConfig {
    pub action: Option<MenuAction>,
    pub text: String,
    pub children: Vec<MenuItemConfig>,
}

// Describes a single item to be displayed in the category tree view.
//
// The application logic defines the content and hierarchy; the shell renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeItemDescriptor {
    pub id: TreeItemId,
    pub text: String,
    pub has_children: bool,
    pub children: Vec<TreeItemDescriptor>,
}

// Defines the severity of a message shown in the status label.
// Ordered from least to most severe for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MessageSeverity {
    Information,
    Warning,
    Error,
}

/*
 * Platform-agnostic UI events generated by the native shell.
 *
 * The shell translates native toolkit events into these types and hands them
 * to the application logic. Dialog completions carry `None` when the user
 * cancelled; cancellation is a no-op transition, never an error.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // Signals that the initial static UI setup for the main window is complete.
    // The application logic performs its startup sequence (settings load,
    // category tree population, first article scan) in response.
    MainWindowUISetupComplete {
        window_id: WindowId,
    },
    WindowCloseRequestedByUser {
        window_id: WindowId,
    },
    // The `WindowId` is invalid after this event.
    WindowDestroyed {
        window_id: WindowId,
    },
    MenuActionClicked {
        action: MenuAction,
    },
    ButtonClicked {
        window_id: WindowId,
        control_id: i32,
    },
    // The user selected (highlighted) an item in the category tree view.
    TreeViewItemSelected {
        window_id: WindowId,
        item_id: TreeItemId,
    },
    FolderPickerDialogCompleted {
        window_id: WindowId,
        path: Option<PathBuf>,
        context_tag: Option<String>,
    },
    TextInputDialogCompleted {
        window_id: WindowId,
        text: Option<String>,
        context_tag: Option<String>,
    },
    // The display surface finished loading the content it was given. Status
    // display only; the filing workflow never gates on it.
    DisplayContentLoadCompleted {
        window_id: WindowId,
        success: bool,
    },
}

// Platform-agnostic commands sent from the application logic to the shell.
//
// These instruct the shell to act on native UI elements. Commands are queued
// by the logic layer and drained by the shell via
// `PlatformEventHandler::try_dequeue_command`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCommand {
    SetWindowTitle {
        window_id: WindowId,
        title: String,
    },
    ShowWindow {
        window_id: WindowId,
    },
    CloseWindow {
        window_id: WindowId,
    },
    QuitApplication,
    CreateMainMenu {
        window_id: WindowId,
        menu_items: Vec<MenuItemConfig>,
    },
    CreateButton {
        window_id: WindowId,
        control_id: i32,
        text: String,
    },
    CreateTreeView {
        window_id: WindowId,
        control_id: i32,
    },
    CreateStatusLabel {
        window_id: WindowId,
        control_id: i32,
        initial_text: String,
    },
    PopulateTreeView {
        window_id: WindowId,
        control_id: i32,
        items: Vec<TreeItemDescriptor>,
    },
    // Directs the display surface to render a local file, given as a
    // file-scheme URL.
    LoadDisplayContent {
        window_id: WindowId,
        file_url: String,
    },
    // Directs the display surface to render literal HTML (e.g. the
    // "all files processed" page).
    SetDisplayHtml {
        window_id: WindowId,
        html: String,
    },
    ShowFolderPickerDialog {
        window_id: WindowId,
        title: String,
        initial_dir: Option<PathBuf>,
        context_tag: Option<String>,
    },
    ShowTextInputDialog {
        window_id: WindowId,
        title: String,
        prompt: String,
        default_text: Option<String>,
        context_tag: Option<String>,
    },
    // A blocking notice; the shell returns control only after dismissal.
    ShowNoticeDialog {
        window_id: WindowId,
        severity: MessageSeverity,
        title: String,
        message: String,
    },
    UpdateStatusLabel {
        window_id: WindowId,
        control_id: i32,
        text: String,
        severity: MessageSeverity,
    },
}

// A trait implemented by the application logic layer to handle UI events.
//
// The shell calls `handle_event` for each native event, then drains the
// resulting commands with `try_dequeue_command`. Everything runs on the
// shell's single logic thread.
pub trait PlatformEventHandler: Send + Sync + 'static {
    fn handle_event(&mut self, event: AppEvent);

    // Called when the shell is about to exit its main loop.
    fn on_quit(&mut self) {}

    // Attempts to dequeue a single `PlatformCommand` from the internal queue.
    fn try_dequeue_command(&mut self) -> Option<PlatformCommand>;
}
