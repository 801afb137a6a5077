// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster delivery boundary between the pipeline worker and the display side.

use scanwerk_core::raster::Raster;

/// Receives the result of each `analyze` call.
///
/// `Some(raster)` hands over a completed, exclusively-owned raster;
/// `None` means "nothing to display this call" — the frame was skipped by
/// the sampling policy or its processing failed, and the previously
/// displayed raster should stay on screen.
///
/// Implementations typically marshal the raster onto a UI-owned execution
/// context; the pipeline only hands the raster off and returns, it never
/// touches display state itself. A partially-built raster is never
/// delivered.
pub trait RasterSink {
    fn display(&mut self, raster: Option<Raster>);
}

impl<F: FnMut(Option<Raster>)> RasterSink for F {
    fn display(&mut self, raster: Option<Raster>) {
        self(raster)
    }
}
