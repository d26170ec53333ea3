/*
 * Logical control ids and dialog context tags for the main window. The shell
 * maps these ids to native controls; the tags route dialog completions back
 * to the flow that opened them.
 */

pub const ID_BUTTON_MOVE_ARTICLE: i32 = 1001;
pub const ID_BUTTON_NEW_CATEGORY: i32 = 1002;
pub const ID_TREEVIEW_CATEGORIES: i32 = 1003;
pub const ID_LABEL_STATUS: i32 = 1004;

pub const DIALOG_TAG_SELECT_SOURCE_FOLDER: &str = "select_source_folder";
pub const DIALOG_TAG_SELECT_CATEGORIES_ROOT: &str = "select_categories_root";
pub const DIALOG_TAG_NEW_CATEGORY_NAME: &str = "new_category_name";
