// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanwerk demo CLI.
//
// Generates synthetic 4:2:0 camera frames, feeds them through the live scan
// pipeline, and writes every delivered raster to disk as PNG. Stands in for
// the camera session so the pipeline can be exercised end to end without a
// device.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use scanwerk_core::config::PipelineConfig;
use scanwerk_core::error::Result;
use scanwerk_core::raster::Raster;
use scanwerk_core::types::{FramePlane, OwnedFrame, PixelFormat, ProcessingMode};
use scanwerk_pipeline::ScanPipeline;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "scanwerk", about = "Run synthetic camera frames through the scan pipeline")]
struct Args {
    /// Number of frames to feed the pipeline.
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Synthetic frame width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Synthetic frame height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Start in edge-detect mode instead of normal scan.
    #[arg(long)]
    edge_detect: bool,

    /// Override the sampling interval (process every Nth frame).
    #[arg(long)]
    interval: Option<u32>,

    /// Load pipeline configuration from a JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the processed PNG frames.
    #[arg(long, default_value = "scanwerk-out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(interval) = args.interval {
        config.sample_interval = interval;
        config.validate()?;
    }

    std::fs::create_dir_all(&args.out)?;

    info!(
        frames = args.frames,
        width = args.width,
        height = args.height,
        edge_detect = args.edge_detect,
        "scanwerk starting"
    );

    let out_dir = args.out.clone();
    let saved = Rc::new(RefCell::new(0u32));
    let saved_in_sink = Rc::clone(&saved);

    let mut pipeline = ScanPipeline::new(config, move |raster: Option<Raster>| {
        let Some(raster) = raster else { return };
        let index = {
            let mut count = saved_in_sink.borrow_mut();
            *count += 1;
            *count
        };
        let path = out_dir.join(format!("frame_{index:04}.png"));
        match scanwerk_image::encode::save(&raster, &path) {
            Ok(()) => info!(path = %path.display(), "frame written"),
            Err(err) => warn!(error = %err, "failed to write frame"),
        }
    })?;

    if args.edge_detect {
        pipeline.mode_switch().set(ProcessingMode::EdgeDetect);
    }

    for index in 0..args.frames {
        pipeline.analyze(synthetic_frame(args.width, args.height, index));
    }

    info!(
        fed = args.frames,
        written = *saved.borrow(),
        "scanwerk finished"
    );
    Ok(())
}

/// A drifting diagonal luma gradient with neutral chroma — enough structure
/// for the edge detector to have something to find, and cheap to generate.
fn synthetic_frame(width: u32, height: u32, index: u32) -> OwnedFrame {
    let w = width as usize;
    let h = height as usize;
    let chroma_w = w.div_ceil(2);
    let chroma_h = h.div_ceil(2);

    let mut luma = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            luma[y * w + x] = ((x + y + index as usize * 8) % 256) as u8;
        }
    }

    OwnedFrame::new(
        PixelFormat::Yuv420Planar,
        width,
        height,
        vec![
            FramePlane::new(luma, w, 1),
            FramePlane::new(vec![128; chroma_w * chroma_h], chroma_w, 1),
            FramePlane::new(vec![128; chroma_w * chroma_h], chroma_w, 1),
        ],
    )
}
