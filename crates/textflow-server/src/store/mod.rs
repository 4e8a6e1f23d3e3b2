//! In-process stores.
//!
//! Both stores are cloneable handles over shared, lock-protected state.
//! Nothing is persisted; a restart starts from empty stores.

pub mod history;
pub mod workflows;

pub use history::{RunHistory, DEFAULT_HISTORY_CAPACITY};
pub use workflows::WorkflowStore;
