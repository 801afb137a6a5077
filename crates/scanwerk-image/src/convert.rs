// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel format conversion — planar 4:2:0 camera frames to packed ARGB rasters.
//
// The conversion runs in two steps: the three capture planes are first
// gathered into one semi-planar buffer (full-resolution luma followed by the
// downsampled chroma), then that buffer is decoded to RGB with the BT.601
// full-range transform. Gathering respects each plane's row stride and
// detects whether the chroma planes arrive interleaved or fully planar.

use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_core::raster::{self, Raster};
use scanwerk_core::types::{CameraFrame, FramePlane, PixelFormat};
use tracing::{debug, instrument};

/// How the chroma samples are laid out after the luma segment of a
/// semi-planar buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChromaLayout {
    /// V and U bytes alternate, 2 bytes per sample pair (NV21-style).
    InterleavedVu,
    /// A contiguous U block followed by a contiguous V block.
    PlanarUv,
}

/// Decode a camera frame into an owned ARGB raster.
///
/// Only [`PixelFormat::Yuv420Planar`] frames are accepted; any other tag
/// fails with [`ScanwerkError::UnsupportedFormat`], which callers treat as
/// skip-this-frame, not as fatal. The returned raster always has the frame's
/// exact dimensions. The input planes are never mutated.
#[instrument(skip(frame), fields(width = frame.width(), height = frame.height()))]
pub fn convert<F: CameraFrame>(frame: &F) -> Result<Raster> {
    if frame.pixel_format() != PixelFormat::Yuv420Planar {
        return Err(ScanwerkError::UnsupportedFormat(frame.pixel_format()));
    }

    let width = frame.width() as usize;
    let height = frame.height() as usize;
    if width == 0 || height == 0 {
        return Err(ScanwerkError::Decode("zero-size frame".into()));
    }

    let planes = frame.planes();
    let [luma, chroma_u, chroma_v] = planes else {
        return Err(ScanwerkError::Decode(format!(
            "expected 3 planes for 4:2:0, got {}",
            planes.len()
        )));
    };

    let (buffer, layout) = gather_semi_planar(luma, chroma_u, chroma_v, width, height)?;
    let raster = decode_semi_planar(&buffer, width, height, layout)?;

    debug!(layout = ?layout, "frame decoded");
    Ok(raster)
}

/// Gather the three capture planes into one tightly-packed semi-planar
/// buffer: `width*height` luma bytes followed by the chroma segment.
///
/// When the chroma planes carry a pixel stride greater than 1 they are
/// interleaved V-then-U at 2 bytes per pair. At pixel stride 1 they are
/// already contiguous and are copied as two blocks instead — a layout
/// detection branch, not a semantic difference; the returned [`ChromaLayout`]
/// tells the decoder which shape it got.
fn gather_semi_planar(
    luma: &FramePlane,
    chroma_u: &FramePlane,
    chroma_v: &FramePlane,
    width: usize,
    height: usize,
) -> Result<(Vec<u8>, ChromaLayout)> {
    let chroma_width = width.div_ceil(2);
    let chroma_height = height.div_ceil(2);
    let chroma_size = chroma_width * chroma_height;

    let mut buffer = Vec::with_capacity(width * height + 2 * chroma_size);

    // Luma rows, verbatim, honouring the row stride.
    for row in 0..height {
        let start = row * luma.row_stride;
        let src = luma
            .data
            .get(start..start + width)
            .ok_or_else(|| ScanwerkError::Decode("luma plane smaller than frame".into()))?;
        buffer.extend_from_slice(src);
    }

    let layout = if chroma_u.pixel_stride == 1 && chroma_v.pixel_stride == 1 {
        // Fully planar chroma: copy U then V as contiguous blocks.
        for plane in [chroma_u, chroma_v] {
            for row in 0..chroma_height {
                let start = row * plane.row_stride;
                let src = plane.data.get(start..start + chroma_width).ok_or_else(|| {
                    ScanwerkError::Decode("chroma plane smaller than frame".into())
                })?;
                buffer.extend_from_slice(src);
            }
        }
        ChromaLayout::PlanarUv
    } else {
        // Interleave V and U at 2 bytes per sample pair.
        for row in 0..chroma_height {
            for col in 0..chroma_width {
                let v_idx = row * chroma_v.row_stride + col * chroma_v.pixel_stride;
                let u_idx = row * chroma_u.row_stride + col * chroma_u.pixel_stride;
                let v = *chroma_v.data.get(v_idx).ok_or_else(|| {
                    ScanwerkError::Decode("V plane smaller than frame".into())
                })?;
                let u = *chroma_u.data.get(u_idx).ok_or_else(|| {
                    ScanwerkError::Decode("U plane smaller than frame".into())
                })?;
                buffer.push(v);
                buffer.push(u);
            }
        }
        ChromaLayout::InterleavedVu
    };

    Ok((buffer, layout))
}

/// Decode a semi-planar buffer into an ARGB raster via the BT.601 full-range
/// transform.
///
/// The original capture stack round-tripped this buffer through a JPEG
/// encoder at quality 100 and decoded the result; the direct transform below
/// yields the same visual output without the lossy detour.
fn decode_semi_planar(
    buffer: &[u8],
    width: usize,
    height: usize,
    layout: ChromaLayout,
) -> Result<Raster> {
    let chroma_width = width.div_ceil(2);
    let chroma_height = height.div_ceil(2);
    let luma_size = width * height;
    let chroma_size = chroma_width * chroma_height;

    let expected = luma_size + 2 * chroma_size;
    if buffer.len() < expected {
        return Err(ScanwerkError::Decode(format!(
            "semi-planar buffer too small: {} bytes, {} expected",
            buffer.len(),
            expected
        )));
    }

    let mut pixels = Vec::with_capacity(luma_size);
    for y in 0..height {
        for x in 0..width {
            let luma = buffer[y * width + x];
            let (u, v) = match layout {
                ChromaLayout::InterleavedVu => {
                    let idx = luma_size + (y / 2) * chroma_width * 2 + (x / 2) * 2;
                    (buffer[idx + 1], buffer[idx])
                }
                ChromaLayout::PlanarUv => {
                    let idx = (y / 2) * chroma_width + x / 2;
                    (buffer[luma_size + idx], buffer[luma_size + chroma_size + idx])
                }
            };
            pixels.push(yuv_to_argb(luma, u, v));
        }
    }

    Raster::from_pixels(width as u32, height as u32, pixels)
}

/// One BT.601 full-range sample: chroma is centred on 128.
#[inline]
fn yuv_to_argb(y: u8, u: u8, v: u8) -> u32 {
    let y = y as f32;
    let u = u as f32 - 128.0;
    let v = v as f32 - 128.0;

    let r = y + 1.402 * v;
    let g = y - 0.344_136 * u - 0.714_136 * v;
    let b = y + 1.772 * u;

    raster::pack(
        255,
        r.round().clamp(0.0, 255.0) as u8,
        g.round().clamp(0.0, 255.0) as u8,
        b.round().clamp(0.0, 255.0) as u8,
    )
}
