// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Scanwerk.

use thiserror::Error;

use crate::types::PixelFormat;

/// Top-level error type for all Scanwerk operations.
///
/// Every variant is recoverable at the pipeline level: a failure affects the
/// frame it occurred on and nothing else. `ScanPipeline` absorbs all of them
/// (skip-and-continue); none may terminate a live session.
#[derive(Debug, Error)]
pub enum ScanwerkError {
    // -- Frame decode errors --
    #[error("unsupported pixel format: {0:?}")]
    UnsupportedFormat(PixelFormat),

    #[error("frame decode failed: {0}")]
    Decode(String),

    // -- Image operation errors --
    #[error("image processing failed: {0}")]
    Image(String),

    /// Catch-all for unexpected failures in a pipeline stage.
    #[error("pipeline stage failed: {0}")]
    Processing(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScanwerkError>;
