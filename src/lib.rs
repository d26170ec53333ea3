/*
 * article_sorter is the platform-agnostic logic layer of a desktop application
 * for triaging locally saved web archives (.mhtml/.mht): the user views one
 * article at a time and files it into a folder taken from a user-maintained
 * category tree. The native shell (windows, menus, web view, dialogs, tree
 * widget) lives outside this crate and communicates through the event/command
 * contract in `platform_layer::types`.
 */
pub mod app_logic;
pub mod core;
pub mod platform_layer;
pub mod ui_description_layer;

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/*
 * Initializes the global logger exactly once for the whole process.
 * Safe to call from every test; later calls are no-ops. The embedding shell
 * calls this before constructing the application logic.
 */
pub fn initialize_logging() {
    INIT_LOGGING.call_once(|| {
        let config = simplelog::ConfigBuilder::new()
            .set_thread_level(log::LevelFilter::Off)
            .build();
        let _ = simplelog::TermLogger::init(
            log::LevelFilter::Debug,
            config,
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        );
    });
}
