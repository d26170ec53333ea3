pub mod types;

pub use types::{
    AppEvent, MenuAction, MenuItemConfig, MessageSeverity, PlatformCommand, PlatformEventHandler,
    TreeItemDescriptor, TreeItemId, WindowId,
};
