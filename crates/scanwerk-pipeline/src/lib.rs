// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-pipeline — Live frame orchestration for Scanwerk.
//
// Ties the image-processing stages together per camera frame: frame-skip
// sampling, decode, scaling, mode-dependent enhancement, and delivery to a
// display sink.

pub mod pipeline;
pub mod sink;

pub use pipeline::ScanPipeline;
pub use sink::RasterSink;
