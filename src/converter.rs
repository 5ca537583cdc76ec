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
use crate::plane_layout::PixelFormat;
use crate::yuv_error::{check_format, format_mismatch};
use crate::yuv_support::{YuvRange, YuvStandardMatrix};
use crate::YuvError;

/// Range used when rendering planar YUV into packed colour
pub const PACKED_COLOR_RANGE: YuvRange = YuvRange::Limited;
/// Matrix used when rendering planar YUV into packed colour
pub const PACKED_COLOR_MATRIX: YuvStandardMatrix = YuvStandardMatrix::Bt601;

/// Converts between semi-planar, planar and packed representations.
///
/// Input images are only read, every conversion allocates a new [Image].
#[derive(Copy, Clone)]
pub struct FormatConverter<'a> {
    kernels: &'a dyn PixelKernels,
}

impl Default for FormatConverter<'static> {
    fn default() -> Self {
        FormatConverter {
            kernels: &ScalarKernels,
        }
    }
}

impl<'a> FormatConverter<'a> {
    pub fn new(kernels: &'a dyn PixelKernels) -> Self {
        FormatConverter { kernels }
    }

    /// Converts NV21 into I420 by splitting interleaved V,U pairs.
    pub fn semi_planar_to_planar(&self, image: &ImageView<'_>) -> Result<Image, YuvError> {
        check_format(PixelFormat::Nv21, image.format())?;
        let mut planar = Image::alloc(PixelFormat::I420, image.width(), image.height())?;
        let [Some(src_y), Some(src_vu), _] = image.planes() else {
            return Err(format_mismatch(PixelFormat::Nv21, image.format()));
        };
        let [Some(dst_y), Some(dst_u), Some(dst_v)] = planar.planes_mut() else {
            return Err(format_mismatch(PixelFormat::I420, planar.format()));
        };
        self.kernels.copy_plane(src_y, dst_y)?;
        self.kernels.split_vu_plane(src_vu, dst_u, dst_v)?;
        Ok(planar)
    }

    /// Converts I420 into NV21 by interleaving U and V as V,U pairs.
    pub fn planar_to_semi_planar(&self, image: &ImageView<'_>) -> Result<Image, YuvError> {
        check_format(PixelFormat::I420, image.format())?;
        let mut semi_planar = Image::alloc(PixelFormat::Nv21, image.width(), image.height())?;
        let [Some(src_y), Some(src_u), Some(src_v)] = image.planes() else {
            return Err(format_mismatch(PixelFormat::I420, image.format()));
        };
        let [Some(dst_y), Some(dst_vu), _] = semi_planar.planes_mut() else {
            return Err(format_mismatch(PixelFormat::Nv21, semi_planar.format()));
        };
        self.kernels.copy_plane(src_y, dst_y)?;
        self.kernels.merge_vu_plane(src_u, src_v, dst_vu)?;
        Ok(semi_planar)
    }

    /// Renders I420 into packed ABGR using [PACKED_COLOR_RANGE] and [PACKED_COLOR_MATRIX].
    pub fn planar_to_packed(&self, image: &ImageView<'_>) -> Result<Image, YuvError> {
        self.planar_to_packed_with(image, PACKED_COLOR_RANGE, PACKED_COLOR_MATRIX)
    }

    /// Renders I420 into packed ABGR with explicit range and matrix.
    pub fn planar_to_packed_with(
        &self,
        image: &ImageView<'_>,
        range: YuvRange,
        matrix: YuvStandardMatrix,
    ) -> Result<Image, YuvError> {
        check_format(PixelFormat::I420, image.format())?;
        let mut packed = Image::alloc(PixelFormat::PackedColor, image.width(), image.height())?;
        let [Some(src_y), Some(src_u), Some(src_v)] = image.planes() else {
            return Err(format_mismatch(PixelFormat::I420, image.format()));
        };
        let [Some(dst), _, _] = packed.planes_mut() else {
            return Err(format_mismatch(PixelFormat::PackedColor, packed.format()));
        };
        self.kernels
            .i420_to_abgr(src_y, src_u, src_v, dst, range, matrix)?;
        Ok(packed)
    }
}
