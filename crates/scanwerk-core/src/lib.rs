// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanwerk — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod raster;
pub mod types;

pub use config::PipelineConfig;
pub use error::{Result, ScanwerkError};
pub use raster::Raster;
pub use types::*;
