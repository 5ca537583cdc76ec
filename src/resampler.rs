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
use crate::images::{Image, ImageView};
use crate::kernels::{PixelKernels, ScalarKernels};
use crate::plane_layout::{chroma_height, chroma_width, PixelFormat};
use crate::scaling::FilterMode;
use crate::yuv_error::{
    check_format, check_non_zero, format_mismatch, invalid_dimensions, DimensionsFault,
};
use crate::YuvError;

/// Rectangle of a source frame, in luma samples
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Whole frame of `width x height`
    pub const fn full(width: u32, height: u32) -> Region {
        Region {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Largest centered square of a `width x height` frame.
    ///
    /// Offsets are rounded down to even values so the region starts on the chroma grid.
    pub const fn centered_square(width: u32, height: u32) -> Region {
        let side = if width < height { width } else { height };
        Region {
            x: ((width - side) / 2) & !1,
            y: ((height - side) / 2) & !1,
            width: side,
            height: side,
        }
    }

    fn validate(&self, width: u32, height: u32) -> Result<(), YuvError> {
        check_non_zero(self.width, self.height)?;
        let fits = |offset: u32, len: u32, limit: u32| {
            offset.checked_add(len).is_some_and(|end| end <= limit)
        };
        if !fits(self.x, self.width, width) || !fits(self.y, self.height, height) {
            return Err(invalid_dimensions(
                width,
                height,
                DimensionsFault::RegionOutOfBounds,
            ));
        }
        if self.x % 2 != 0 || self.y % 2 != 0 {
            return Err(invalid_dimensions(
                width,
                height,
                DimensionsFault::UnalignedRegion,
            ));
        }
        Ok(())
    }
}

/// Resamples planar 4:2:0 images to a new resolution.
///
/// Luma is scaled to `target_width x target_height`, both chroma planes to
/// `ceil(target_width / 2) x ceil(target_height / 2)`, each plane independently.
#[derive(Copy, Clone)]
pub struct Resampler<'a> {
    kernels: &'a dyn PixelKernels,
}

impl Default for Resampler<'static> {
    fn default() -> Self {
        Resampler {
            kernels: &ScalarKernels,
        }
    }
}

impl<'a> Resampler<'a> {
    pub fn new(kernels: &'a dyn PixelKernels) -> Self {
        Resampler { kernels }
    }

    /// Scales the whole I420 image to `target_width x target_height`.
    ///
    /// # Arguments
    ///
    /// * `image`: Source I420 image
    /// * `target_width`: Destination width, must not be zero
    /// * `target_height`: Destination height, must not be zero
    /// * `filter`: Refer to [FilterMode] for filter info
    ///
    /// returns: Result<Image, YuvError>
    ///
    pub fn scale(
        &self,
        image: &ImageView<'_>,
        target_width: u32,
        target_height: u32,
        filter: FilterMode,
    ) -> Result<Image, YuvError> {
        self.scale_region(
            image,
            Region::full(image.width(), image.height()),
            target_width,
            target_height,
            filter,
        )
    }

    /// Scales `region` of the I420 image to `target_width x target_height`.
    ///
    /// Region origin must be even so that chroma stays aligned with luma.
    pub fn scale_region(
        &self,
        image: &ImageView<'_>,
        region: Region,
        target_width: u32,
        target_height: u32,
        filter: FilterMode,
    ) -> Result<Image, YuvError> {
        check_format(PixelFormat::I420, image.format())?;
        check_non_zero(target_width, target_height)?;
        region.validate(image.width(), image.height())?;

        let [Some(src_y), Some(src_u), Some(src_v)] = image.planes() else {
            return Err(format_mismatch(PixelFormat::I420, image.format()));
        };
        let out_of_bounds =
            || invalid_dimensions(image.width(), image.height(), DimensionsFault::RegionOutOfBounds);
        let luma = src_y
            .region(
                region.x as usize,
                region.y as usize,
                region.width as usize,
                region.height as usize,
            )
            .ok_or_else(out_of_bounds)?;
        let (cx, cy) = (region.x as usize / 2, region.y as usize / 2);
        let (cw, ch) = (
            chroma_width(region.width) as usize,
            chroma_height(region.height) as usize,
        );
        let u = src_u.region(cx, cy, cw, ch).ok_or_else(out_of_bounds)?;
        let v = src_v.region(cx, cy, cw, ch).ok_or_else(out_of_bounds)?;

        let mut scaled = Image::alloc(PixelFormat::I420, target_width, target_height)?;
        let [Some(dst_y), Some(dst_u), Some(dst_v)] = scaled.planes_mut() else {
            return Err(format_mismatch(PixelFormat::I420, scaled.format()));
        };
        self.kernels.scale_plane(luma, dst_y, filter)?;
        self.kernels.scale_plane(u, dst_u, filter)?;
        self.kernels.scale_plane(v, dst_v, filter)?;
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_i420(width: u32, height: u32) -> Image {
        let size = crate::frame_size(PixelFormat::I420, width, height).unwrap();
        let mut rng = rand::rng();
        let data: Vec<u8> = (0..size).map(|_| rng.random::<u8>()).collect();
        Image::from_vec(PixelFormat::I420, data, width, height).unwrap()
    }

    #[test]
    fn test_same_size_is_identity() {
        let resampler = Resampler::default();
        for (width, height) in [(6u32, 4u32), (7, 3), (1, 1)] {
            let source = random_i420(width, height);
            for filter in [FilterMode::None, FilterMode::Box] {
                let scaled = resampler
                    .scale(&source.view(), width, height, filter)
                    .unwrap();
                assert_eq!(scaled, source);
            }
        }
    }

    #[test]
    fn test_zero_target_rejected() {
        let source = random_i420(4, 4);
        let result = Resampler::default().scale(&source.view(), 0, 4, FilterMode::Box);
        assert!(matches!(
            result,
            Err(YuvError::InvalidDimensions(ref dims)) if dims.fault == DimensionsFault::Zero
        ));
    }

    #[test]
    fn test_box_halves_luma() {
        let size = crate::frame_size(PixelFormat::I420, 4, 2).unwrap();
        let mut data = vec![128u8; size];
        data[..8].copy_from_slice(&[0, 10, 100, 200, 20, 30, 0, 0]);
        let source = Image::from_vec(PixelFormat::I420, data, 4, 2).unwrap();
        let scaled = Resampler::default()
            .scale(&source.view(), 2, 1, FilterMode::Box)
            .unwrap();
        assert_eq!(scaled.plane(0).unwrap().data, &[15, 75]);
        assert_eq!(scaled.plane(1).unwrap().data, &[128]);
    }

    #[test]
    fn test_centered_square() {
        assert_eq!(Region::centered_square(640, 480), Region {
            x: 80,
            y: 0,
            width: 480,
            height: 480,
        });
        // offset 3 is rounded down to stay on the chroma grid
        assert_eq!(Region::centered_square(4, 10).y, 2);
        assert_eq!(Region::centered_square(5, 5), Region::full(5, 5));
    }

    #[test]
    fn test_scale_region_crops() {
        let size = crate::frame_size(PixelFormat::I420, 4, 4).unwrap();
        let mut data = vec![0u8; size];
        for (i, v) in data[..16].iter_mut().enumerate() {
            *v = i as u8;
        }
        // u plane 2x2, v plane 2x2
        data[16..20].copy_from_slice(&[1, 2, 3, 4]);
        data[20..24].copy_from_slice(&[5, 6, 7, 8]);
        let source = Image::from_vec(PixelFormat::I420, data, 4, 4).unwrap();
        let region = Region {
            x: 2,
            y: 2,
            width: 2,
            height: 2,
        };
        let cropped = Resampler::default()
            .scale_region(&source.view(), region, 2, 2, FilterMode::None)
            .unwrap();
        assert_eq!(cropped.plane(0).unwrap().data, &[10, 11, 14, 15]);
        assert_eq!(cropped.plane(1).unwrap().data, &[4]);
        assert_eq!(cropped.plane(2).unwrap().data, &[8]);
    }

    #[test]
    fn test_region_validation() {
        let source = random_i420(8, 8);
        let resampler = Resampler::default();
        let outside = Region {
            x: 4,
            y: 0,
            width: 6,
            height: 4,
        };
        assert!(matches!(
            resampler.scale_region(&source.view(), outside, 2, 2, FilterMode::Box),
            Err(YuvError::InvalidDimensions(ref dims)) if dims.fault == DimensionsFault::RegionOutOfBounds
        ));
        let unaligned = Region {
            x: 1,
            y: 0,
            width: 4,
            height: 4,
        };
        assert!(matches!(
            resampler.scale_region(&source.view(), unaligned, 2, 2, FilterMode::Box),
            Err(YuvError::InvalidDimensions(ref dims)) if dims.fault == DimensionsFault::UnalignedRegion
        ));
    }
}
