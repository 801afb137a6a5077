// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-image — Image processing for the Scanwerk scan pipeline.
//
// Provides the frame decoder (planar 4:2:0 to packed ARGB), geometric
// scaling, photometric enhancement (desaturation, contrast), Sobel edge
// detection, and still-image encoding.

pub mod convert;
pub mod edges;
pub mod encode;
pub mod enhance;
pub mod interop;
pub mod scale;

pub use convert::convert;
pub use edges::detect_edges;
pub use enhance::{adjust_contrast, desaturate};
pub use scale::resize;
