//! Exporter trait and manager

use crate::config::ExportConfig;
use crate::error::{RankerError, Result};
use crate::rank::RankedList;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Trait for ranked list exporters
pub trait Exporter: Send + Sync {
    /// Export a ranked list to string
    fn export(&self, list: &RankedList<'_>) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        Self::from_config(&ExportConfig::default())
    }

    /// Create a manager whose default exporters follow `config`
    pub fn from_config(config: &ExportConfig) -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        manager.register(Box::new(
            super::json::JsonExporter::pretty().with_scores(config.include_scores),
        ));
        manager.register(Box::new(
            super::json::JsonExporter::compact().with_scores(config.include_scores),
        ));
        manager.register(Box::new(
            super::markdown::MarkdownExporter::new().with_scores(config.include_scores),
        ));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Export a ranked list to the specified format
    pub fn export(&self, list: &RankedList<'_>, format: &str) -> Result<String> {
        self.get(format)
            .ok_or_else(|| RankerError::UnknownFormat(format.to_string()))?
            .export(list)
    }

    /// Export a ranked list to a file
    pub fn export_to_file(&self, list: &RankedList<'_>, format: &str, path: &Path) -> Result<()> {
        let exporter = self
            .get(format)
            .ok_or_else(|| RankerError::UnknownFormat(format.to_string()))?;
        let content = exporter.export(list)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        // Atomic write using temp file
        let temp_path = final_path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
        }

        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
