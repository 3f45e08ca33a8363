//! SKV invoicing and consultation service.
//!
//! Country-aware invoice assembly (tax table, calculator, validators,
//! formatters, HTML documents) and a chat relay for four jurisdictions.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod startup;

// Re-export commonly used types
pub use modules::catalog;
pub use modules::chat;
pub use modules::countries;
pub use modules::invoices;
pub use modules::taxes;
pub use startup::AppState;
