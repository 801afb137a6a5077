// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Live scan pipeline — per-frame orchestration of decode, scale, enhance,
// and edge detection, under a frame-skip sampling policy.
//
// Frames arrive one at a time on a dedicated worker context (the capture
// layer keeps only the latest frame under backpressure). Processing is
// synchronous within `analyze`; the only cross-frame state is the frame
// counter (owned here, mutated only on the worker) and the mode switch
// (written by the UI, read once per frame).

use std::sync::Arc;

use scanwerk_core::config::PipelineConfig;
use scanwerk_core::error::Result;
use scanwerk_core::raster::Raster;
use scanwerk_core::types::{CameraFrame, ModeSwitch, ProcessingMode};
use tracing::{debug, info, warn};

use crate::sink::RasterSink;

/// The live document-scan pipeline.
///
/// One instance per camera session; concurrent sessions get independent
/// instances with independent frame counters. The counter resets only when
/// the pipeline is re-created.
pub struct ScanPipeline<S: RasterSink> {
    config: PipelineConfig,
    mode: Arc<ModeSwitch>,
    sink: S,
    frame_count: u64,
}

impl<S: RasterSink> ScanPipeline<S> {
    /// Create a pipeline in normal-scan mode.
    ///
    /// Fails only on an invalid configuration; a running pipeline never
    /// returns errors to its caller.
    pub fn new(config: PipelineConfig, sink: S) -> Result<Self> {
        config.validate()?;
        info!(
            sample_interval = config.sample_interval,
            max_dimension = config.max_dimension,
            "scan pipeline created"
        );
        Ok(Self {
            config,
            mode: Arc::new(ModeSwitch::new(ProcessingMode::NormalScan)),
            sink,
            frame_count: 0,
        })
    }

    /// Shared handle to the mode flag, for the UI side to toggle.
    pub fn mode_switch(&self) -> Arc<ModeSwitch> {
        Arc::clone(&self.mode)
    }

    /// Total frames delivered to this pipeline so far.
    pub fn frames_seen(&self) -> u64 {
        self.frame_count
    }

    /// Ingest one camera frame.
    ///
    /// Every `sample_interval`-th frame runs the full processing chain; all
    /// others are acknowledged without work. Either way the frame is
    /// released exactly once before the sink is invoked, and every failure
    /// is absorbed here — a bad frame logs a diagnostic and delivers `None`,
    /// the session continues.
    pub fn analyze<F: CameraFrame>(&mut self, frame: F) {
        self.frame_count += 1;

        if self.frame_count % self.config.sample_interval as u64 != 0 {
            frame.release();
            self.sink.display(None);
            return;
        }

        let frame_number = self.frame_count;
        let mode = self.mode.mode();
        let result = self.process(&frame, mode);
        frame.release();

        match result {
            Ok(raster) => {
                debug!(
                    frame = frame_number,
                    mode = ?mode,
                    width = raster.width(),
                    height = raster.height(),
                    "frame processed"
                );
                self.sink.display(Some(raster));
            }
            Err(err) => {
                warn!(frame = frame_number, error = %err, "frame processing failed, skipping");
                self.sink.display(None);
            }
        }
    }

    /// Decode → bound to the live dimension → mode-dependent enhancement.
    fn process<F: CameraFrame>(&self, frame: &F, mode: ProcessingMode) -> Result<Raster> {
        let raster = scanwerk_image::convert(frame)?;
        let resized = scanwerk_image::resize(raster, self.config.max_dimension);

        let gray = scanwerk_image::desaturate(&resized);
        Ok(match mode {
            ProcessingMode::NormalScan => {
                scanwerk_image::adjust_contrast(&gray, self.config.normal_contrast)
            }
            ProcessingMode::EdgeDetect => {
                let prepared = scanwerk_image::adjust_contrast(&gray, self.config.edge_contrast);
                scanwerk_image::detect_edges(&prepared)
            }
        })
    }
}
