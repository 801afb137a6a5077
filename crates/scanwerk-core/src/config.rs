// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanwerkError};

/// Tuning parameters for the live scan pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Longest output dimension for live preview processing (default 480).
    pub max_dimension: u32,
    /// Longest output dimension for general-purpose resizing, e.g. thumbnails
    /// of captured stills (default 640).
    pub capture_max_dimension: u32,
    /// Process every Nth frame; the rest are released untouched (default 15).
    pub sample_interval: u32,
    /// Contrast factor applied after desaturation in normal-scan mode.
    pub normal_contrast: f32,
    /// Contrast factor applied after desaturation before edge detection.
    pub edge_contrast: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_dimension: 480,
            capture_max_dimension: 640,
            sample_interval: 15,
            normal_contrast: 1.8,
            edge_contrast: 2.2,
        }
    }
}

impl PipelineConfig {
    /// Check that every parameter is usable by the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 || self.capture_max_dimension == 0 {
            return Err(ScanwerkError::Config(
                "max dimensions must be at least 1 pixel".into(),
            ));
        }
        if self.sample_interval == 0 {
            return Err(ScanwerkError::Config(
                "sample_interval must be at least 1".into(),
            ));
        }
        if self.normal_contrast <= 0.0 || self.edge_contrast <= 0.0 {
            return Err(ScanwerkError::Config(
                "contrast factors must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }
}
