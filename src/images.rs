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
use crate::plane_layout::{PixelFormat, PlaneDescriptor, PlaneLayout, MAX_PLANES};
use crate::yuv_error::{invalid_dimensions, DimensionsFault, MismatchedSize};
use crate::YuvError;
use tracing::trace;

/// Non-mutable view of a single plane.
///
/// `width` and `height` are measured in samples of this plane, `stride` in bytes.
#[derive(Debug, Copy, Clone)]
pub struct PlaneRef<'a> {
    pub data: &'a [u8],
    /// Stride here always means bytes per row.
    pub stride: usize,
    pub width: usize,
    pub height: usize,
}

/// Mutable view of a single plane
#[derive(Debug)]
pub struct PlaneMut<'a> {
    pub data: &'a mut [u8],
    /// Stride here always means bytes per row.
    pub stride: usize,
    pub width: usize,
    pub height: usize,
}

impl<'a> PlaneRef<'a> {
    fn from_descriptor(data: &'a [u8], descriptor: &PlaneDescriptor) -> Self {
        PlaneRef {
            data: &data[descriptor.offset..descriptor.offset + descriptor.size],
            stride: descriptor.stride,
            width: descriptor.width,
            height: descriptor.rows,
        }
    }

    /// Sub-rectangle of a plane with one byte per sample.
    ///
    /// Returns `None` if the rectangle is empty or leaves the plane.
    pub fn region(&self, x: usize, y: usize, width: usize, height: usize) -> Option<PlaneRef<'a>> {
        if width == 0
            || height == 0
            || x.checked_add(width)? > self.width
            || y.checked_add(height)? > self.height
        {
            return None;
        }
        let start = y * self.stride + x;
        Some(PlaneRef {
            data: self.data.get(start..)?,
            stride: self.stride,
            width,
            height,
        })
    }
}

/// Borrowed frame together with its plane layout
#[derive(Debug, Copy, Clone)]
pub struct ImageView<'a> {
    layout: PlaneLayout,
    data: &'a [u8],
}

impl<'a> ImageView<'a> {
    /// Wraps caller owned bytes, the buffer must have exactly the size of the layout.
    pub fn new(
        format: PixelFormat,
        data: &'a [u8],
        width: u32,
        height: u32,
    ) -> Result<ImageView<'a>, YuvError> {
        let layout = PlaneLayout::new(format, width, height)?;
        check_buffer_length(&layout, data.len())?;
        Ok(ImageView { layout, data })
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.layout.format()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height()
    }

    #[inline]
    pub fn layout(&self) -> &PlaneLayout {
        &self.layout
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn plane(&self, index: usize) -> Option<PlaneRef<'a>> {
        self.layout
            .plane(index)
            .map(|descriptor| PlaneRef::from_descriptor(self.data, descriptor))
    }

    pub fn planes(&self) -> [Option<PlaneRef<'a>>; MAX_PLANES] {
        [self.plane(0), self.plane(1), self.plane(2)]
    }
}

/// Owned frame buffer.
///
/// Every pipeline stage allocates a fresh `Image` for its output; the buffer is
/// released when the image is dropped.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Image {
    layout: PlaneLayout,
    data: Vec<u8>,
}

impl Image {
    /// Allocates zeroed image for the format and dimensions
    pub fn alloc(format: PixelFormat, width: u32, height: u32) -> Result<Image, YuvError> {
        let layout = PlaneLayout::new(format, width, height)?;
        let data = alloc_buffer(layout.total_size())?;
        Ok(Image { layout, data })
    }

    /// Takes ownership of already filled frame bytes
    pub fn from_vec(
        format: PixelFormat,
        data: Vec<u8>,
        width: u32,
        height: u32,
    ) -> Result<Image, YuvError> {
        let layout = PlaneLayout::new(format, width, height)?;
        check_buffer_length(&layout, data.len())?;
        Ok(Image { layout, data })
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.layout.format()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height()
    }

    #[inline]
    pub fn layout(&self) -> &PlaneLayout {
        &self.layout
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            layout: self.layout,
            data: &self.data,
        }
    }

    pub fn plane(&self, index: usize) -> Option<PlaneRef<'_>> {
        self.layout
            .plane(index)
            .map(|descriptor| PlaneRef::from_descriptor(&self.data, descriptor))
    }

    /// Splits the buffer into disjoint mutable planes, absent planes are `None`.
    pub fn planes_mut(&mut self) -> [Option<PlaneMut<'_>>; MAX_PLANES] {
        let mut planes: [Option<PlaneMut<'_>>; MAX_PLANES] = [None, None, None];
        let mut rest: &mut [u8] = &mut self.data;
        for (slot, descriptor) in planes.iter_mut().zip(self.layout.planes()) {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(descriptor.size);
            *slot = Some(PlaneMut {
                data: head,
                stride: descriptor.stride,
                width: descriptor.width,
                height: descriptor.rows,
            });
            rest = tail;
        }
        planes
    }
}

fn check_buffer_length(layout: &PlaneLayout, received: usize) -> Result<(), YuvError> {
    if layout.total_size() != received {
        return Err(invalid_dimensions(
            layout.width(),
            layout.height(),
            DimensionsFault::BufferLength(MismatchedSize {
                expected: layout.total_size(),
                received,
            }),
        ));
    }
    Ok(())
}

pub(crate) fn alloc_buffer(size: usize) -> Result<Vec<u8>, YuvError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| YuvError::AllocationFailure(size))?;
    buffer.resize(size, 0u8);
    trace!(size, "allocated frame buffer");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planes_mut_are_disjoint() {
        let mut image = Image::alloc(PixelFormat::I420, 4, 2).unwrap();
        {
            let [Some(y), Some(u), Some(v)] = image.planes_mut() else {
                panic!("I420 must have three planes");
            };
            y.data.fill(1);
            u.data.fill(2);
            v.data.fill(3);
        }
        assert_eq!(image.data(), &[1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_nv21_planes() {
        let data: Vec<u8> = (0..24).collect();
        let view = ImageView::new(PixelFormat::Nv21, &data, 4, 4).unwrap();
        let [Some(y), Some(vu), None] = view.planes() else {
            panic!("NV21 must have two planes");
        };
        assert_eq!(y.data.len(), 16);
        assert_eq!(vu.data, &data[16..]);
        assert_eq!(vu.width, 2);
        assert_eq!(vu.stride, 4);
    }

    #[test]
    fn test_view_rejects_wrong_length() {
        let data = vec![0u8; 23];
        assert!(matches!(
            ImageView::new(PixelFormat::Nv21, &data, 4, 4),
            Err(YuvError::InvalidDimensions(_))
        ));
        assert!(matches!(
            Image::from_vec(PixelFormat::Nv21, vec![0u8; 25], 4, 4),
            Err(YuvError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_plane_region() {
        let data: Vec<u8> = (0..16).collect();
        let plane = PlaneRef {
            data: &data,
            stride: 4,
            width: 4,
            height: 4,
        };
        let region = plane.region(1, 2, 2, 2).unwrap();
        assert_eq!(region.data[0], 9);
        assert_eq!(region.data[region.stride + 1], 14);
        assert!(plane.region(3, 0, 2, 1).is_none());
        assert!(plane.region(0, 0, 0, 1).is_none());
    }
}
