/*
 * This module provides the application logic layer, centered around
 * `MyAppLogic`, the workflow controller that turns shell events into
 * platform commands. `MainWindowUiState` holds UI-specific state for the
 * main window. Unit tests for `MyAppLogic` are in `handler_tests.rs`.
 */
pub mod handler;
pub mod main_window_ui_state;
pub mod ui_constants;


pub use handler::{MyAppLogic, WorkflowState};
pub use main_window_ui_state::MainWindowUiState;
