//! Command implementations for the folio CLI

pub mod add;
pub mod categories;
pub mod config;
pub mod list;
pub mod show;

// Re-export dispatcher functions for flat access from main.rs
pub use add::run_add;
pub use categories::run_categories;
pub use config::run_config;
pub use list::run_list;
pub use show::run_show;
