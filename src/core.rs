/*
 * This module consolidates the core, platform-agnostic logic of the
 * application. It re-exports the key data structures and abstractions
 * (`ArticleQueueOperations`, `ArticleFilerOperations`,
 * `CategoryStoreOperations`, `SettingsStoreOperations`,
 * `PagePermissionPolicy`) for source-folder scanning, article filing,
 * category management, settings persistence, and page-permission policy.
 */
pub mod article_filer;
pub mod article_queue;
pub mod category_node;
pub mod category_store;
pub mod path_utils;
pub mod policy;
pub mod settings;

pub use category_node::CategoryNode;

pub use article_queue::{ArticleQueueOperations, CoreArticleQueue};

pub use article_filer::{ArticleFilerOperations, CoreArticleFiler, FilerError};

pub use category_store::{CategoryStoreError, CategoryStoreOperations, CoreCategoryStore};

pub use settings::{CoreSettingsStore, Settings, SettingsError, SettingsStoreOperations};

pub use policy::{PagePermissionPolicy, PermissionRequestKind, PolicyDecision, StaticPolicy};
