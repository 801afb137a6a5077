// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Scanwerk scan pipeline: camera frame boundary,
// pixel formats, and the processing-mode switch.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Pixel format tag carried by a camera-delivered frame.
///
/// The pipeline supports exactly one format — planar 4:2:0 chroma-subsampled
/// (`Yuv420Planar`). Every other tag is rejected non-fatally with
/// [`crate::ScanwerkError::UnsupportedFormat`] and the frame is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// One full-resolution luma plane plus two quarter-resolution chroma planes.
    Yuv420Planar,
    /// Packed 32-bit RGBA (not supported by the converter).
    Rgba8888,
    /// Already-encoded JPEG bytes (not supported by the converter).
    Jpeg,
    /// Anything the capture layer could not classify.
    Unknown,
}

/// One memory plane of a camera frame.
///
/// `row_stride` is the byte distance between the starts of adjacent rows and
/// may exceed the row's payload width (padding). `pixel_stride` is the byte
/// distance between adjacent samples within a row: 1 for fully planar data,
/// 2 for interleaved chroma.
#[derive(Debug, Clone)]
pub struct FramePlane {
    pub data: Vec<u8>,
    pub row_stride: usize,
    pub pixel_stride: usize,
}

impl FramePlane {
    pub fn new(data: Vec<u8>, row_stride: usize, pixel_stride: usize) -> Self {
        Self {
            data,
            row_stride,
            pixel_stride,
        }
    }
}

/// The camera frame boundary.
///
/// A frame is owned by the capture subsystem for the duration of one analysis
/// call and is recycled immediately afterwards. `release` consumes the frame,
/// so the type system guarantees the two lifetime rules the capture layer
/// depends on: a frame is released exactly once, and no reference to it can
/// survive past the release.
pub trait CameraFrame: Sized {
    fn pixel_format(&self) -> PixelFormat;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Memory planes in capture order: luma first, then the chroma planes.
    fn planes(&self) -> &[FramePlane];
    /// Hand the frame back to the capture subsystem.
    fn release(self);
}

/// A frame that owns its plane buffers outright.
///
/// Used by the demo binary and tests; a real capture integration would
/// implement [`CameraFrame`] over its own recycled buffers instead.
#[derive(Debug, Clone)]
pub struct OwnedFrame {
    format: PixelFormat,
    width: u32,
    height: u32,
    planes: Vec<FramePlane>,
}

impl OwnedFrame {
    pub fn new(format: PixelFormat, width: u32, height: u32, planes: Vec<FramePlane>) -> Self {
        Self {
            format,
            width,
            height,
            planes,
        }
    }
}

impl CameraFrame for OwnedFrame {
    fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> &[FramePlane] {
        &self.planes
    }

    fn release(self) {
        // Owned buffers are simply dropped.
    }
}

/// Which enhancement chain the live pipeline applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessingMode {
    /// Desaturate + moderate contrast boost.
    NormalScan,
    /// Desaturate + strong contrast boost + edge detection.
    EdgeDetect,
}

/// Shared mode flag between the UI and the pipeline worker.
///
/// The UI toggles it on a gesture; the pipeline reads it once at the start of
/// each processed frame. A read observing a one-frame-stale value is
/// acceptable, so a single relaxed atomic is all the synchronisation needed.
#[derive(Debug, Default)]
pub struct ModeSwitch {
    edge_detect: AtomicBool,
}

impl ModeSwitch {
    pub fn new(mode: ProcessingMode) -> Self {
        Self {
            edge_detect: AtomicBool::new(mode == ProcessingMode::EdgeDetect),
        }
    }

    /// Current mode. Called once per frame by the pipeline.
    pub fn mode(&self) -> ProcessingMode {
        if self.edge_detect.load(Ordering::Relaxed) {
            ProcessingMode::EdgeDetect
        } else {
            ProcessingMode::NormalScan
        }
    }

    pub fn set(&self, mode: ProcessingMode) {
        self.edge_detect
            .store(mode == ProcessingMode::EdgeDetect, Ordering::Relaxed);
    }

    /// Flip between the two modes, returning the mode now in effect.
    pub fn toggle(&self) -> ProcessingMode {
        let was_edge = self.edge_detect.fetch_xor(true, Ordering::Relaxed);
        if was_edge {
            ProcessingMode::NormalScan
        } else {
            ProcessingMode::EdgeDetect
        }
    }
}
