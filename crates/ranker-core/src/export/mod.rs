//! Export functionality for ranked lists
//!
//! Supports JSON (pretty and compact) and a Markdown report.
//!
//! # Example
//!
//! ```ignore
//! use ranker_core::export::ExportManager;
//!
//! let manager = ExportManager::new();
//! let json = manager.export(&ranked, "json")?;
//! ```

mod exporter;
mod json;
mod markdown;

pub use exporter::{ExportManager, Exporter};
pub use json::{ExportComment, ExportData, JsonExporter, EXPORT_VERSION};
pub use markdown::MarkdownExporter;
