/*
 * This module defines the static structure of the main window. It generates
 * the `PlatformCommand`s describing the menu, the sidebar controls (Move
 * Article and New Category buttons, the category tree), and the status
 * label, decoupling the UI definition from whatever toolkit the shell uses.
 */

use crate::app_logic::ui_constants::{
    ID_BUTTON_MOVE_ARTICLE, ID_BUTTON_NEW_CATEGORY, ID_LABEL_STATUS, ID_TREEVIEW_CATEGORIES,
};
use crate::platform_layer::{MenuAction, MenuItemConfig, PlatformCommand, WindowId};

/*
 * Generates the commands that describe the initial static UI layout for the
 * main application window: the File menu, the triage buttons, the category
 * tree view, and the status label.
 */
pub fn describe_main_window_layout(window_id: WindowId) -> Vec<PlatformCommand> {
    log::debug!("ui_description_layer: describe_main_window_layout called.");

    let mut commands = Vec::new();

    let file_menu_items = vec![
        MenuItemConfig {
            action: Some(MenuAction::SelectSourceFolder),
            text: "Open Source Folder...".to_string(),
            children: Vec::new(),
        },
        MenuItemConfig {
            action: Some(MenuAction::SelectCategoriesRoot),
            text: "Open Categories Root...".to_string(),
            children: Vec::new(),
        },
        MenuItemConfig {
            action: Some(MenuAction::Quit),
            text: "Quit".to_string(),
            children: Vec::new(),
        },
    ];

    commands.push(PlatformCommand::CreateMainMenu {
        window_id,
        menu_items: vec![MenuItemConfig {
            action: None, // Popup items don't carry actions themselves.
            text: "&File".to_string(),
            children: file_menu_items,
        }],
    });

    commands.push(PlatformCommand::CreateButton {
        window_id,
        control_id: ID_BUTTON_MOVE_ARTICLE,
        text: "Move Article".to_string(),
    });

    commands.push(PlatformCommand::CreateTreeView {
        window_id,
        control_id: ID_TREEVIEW_CATEGORIES,
    });

    commands.push(PlatformCommand::CreateButton {
        window_id,
        control_id: ID_BUTTON_NEW_CATEGORY,
        text: "New Category".to_string(),
    });

    commands.push(PlatformCommand::CreateStatusLabel {
        window_id,
        control_id: ID_LABEL_STATUS,
        initial_text: String::new(),
    });

    commands
}
