/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::yuv_error::{
    check_non_zero, checked_size, invalid_dimensions, DimensionsFault, YuvError,
};

/// Maximum number of planes any supported format has
pub const MAX_PLANES: usize = 3;

/// Declares supported pixel formats
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum PixelFormat {
    /// Semi-planar 4:2:0: full resolution Y plane followed by interleaved V,U pairs
    Nv21,
    /// Planar 4:2:0: Y plane, then U plane, then V plane
    I420,
    /// One plane of 4 bytes per pixel stored as R, G, B, A in memory (libyuv ABGR)
    PackedColor,
}

impl PixelFormat {
    #[inline]
    pub const fn planes_count(&self) -> usize {
        match self {
            PixelFormat::Nv21 => 2,
            PixelFormat::I420 => 3,
            PixelFormat::PackedColor => 1,
        }
    }
}

/// Geometry of a single plane inside a frame buffer
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PlaneDescriptor {
    /// Samples per row
    pub width: usize,
    /// Bytes one sample occupies
    pub bytes_per_sample: usize,
    /// Stride here always means bytes per row.
    pub stride: usize,
    pub rows: usize,
    /// Plane start inside the frame buffer
    pub offset: usize,
    pub size: usize,
}

/// Per-plane layout derived from `(format, width, height)`.
///
/// Planes are stored tightly packed, one after another, in a single buffer.
/// Chroma planes of 4:2:0 formats always use `ceil(width / 2) x ceil(height / 2)`
/// samples, so odd dimensions are handled without losing the last column or row.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PlaneLayout {
    format: PixelFormat,
    width: u32,
    height: u32,
    planes: [PlaneDescriptor; MAX_PLANES],
    total_size: usize,
}

#[inline]
pub const fn chroma_width(width: u32) -> u32 {
    width.div_ceil(2)
}

#[inline]
pub const fn chroma_height(height: u32) -> u32 {
    height.div_ceil(2)
}

impl PlaneLayout {
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Result<PlaneLayout, YuvError> {
        check_non_zero(width, height)?;
        let w = width as usize;
        let h = height as usize;
        let cw = chroma_width(width) as usize;
        let ch = chroma_height(height) as usize;

        let shapes: [(usize, usize, usize); MAX_PLANES] = match format {
            PixelFormat::Nv21 => [(w, h, 1), (cw, ch, 2), (0, 0, 0)],
            PixelFormat::I420 => [(w, h, 1), (cw, ch, 1), (cw, ch, 1)],
            PixelFormat::PackedColor => [(w, h, 4), (0, 0, 0), (0, 0, 0)],
        };

        let mut planes = [PlaneDescriptor::default(); MAX_PLANES];
        let mut offset = 0usize;
        for (plane, &(plane_width, rows, bytes_per_sample)) in planes
            .iter_mut()
            .zip(shapes.iter())
            .take(format.planes_count())
        {
            let stride = checked_size(width, height, &[plane_width, bytes_per_sample])?;
            let size = checked_size(width, height, &[stride, rows])?;
            *plane = PlaneDescriptor {
                width: plane_width,
                bytes_per_sample,
                stride,
                rows,
                offset,
                size,
            };
            offset = offset
                .checked_add(size)
                .ok_or_else(|| invalid_dimensions(width, height, DimensionsFault::Overflow))?;
        }

        Ok(PlaneLayout {
            format,
            width,
            height,
            planes,
            total_size: offset,
        })
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total amount of bytes all planes occupy
    #[inline]
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    #[inline]
    pub fn planes(&self) -> &[PlaneDescriptor] {
        &self.planes[..self.format.planes_count()]
    }

    #[inline]
    pub fn plane(&self, index: usize) -> Option<&PlaneDescriptor> {
        self.planes().get(index)
    }
}

/// Computes the byte size of a whole frame.
pub fn frame_size(format: PixelFormat, width: u32, height: u32) -> Result<usize, YuvError> {
    Ok(PlaneLayout::new(format, width, height)?.total_size())
}
