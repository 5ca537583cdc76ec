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
use crate::geometry::RotationMode;
use crate::images::{Image, ImageView};
use crate::kernels::{PixelKernels, ScalarKernels};
use crate::mirroring::MirrorMode;
use crate::plane_layout::PixelFormat;
use crate::yuv_error::{check_format, format_mismatch};
use crate::YuvError;

/// Mirrors, flips and rotates planar 4:2:0 images.
///
/// Chroma planes are transformed on their own `ceil(w / 2) x ceil(h / 2)` grid,
/// which is exactly the chroma grid of the transformed image.
#[derive(Copy, Clone)]
pub struct GeometricTransformer<'a> {
    kernels: &'a dyn PixelKernels,
}

impl Default for GeometricTransformer<'static> {
    fn default() -> Self {
        GeometricTransformer {
            kernels: &ScalarKernels,
        }
    }
}

impl<'a> GeometricTransformer<'a> {
    pub fn new(kernels: &'a dyn PixelKernels) -> Self {
        GeometricTransformer { kernels }
    }

    /// Mirrors I420 image left to right
    pub fn mirror(&self, image: &ImageView<'_>) -> Result<Image, YuvError> {
        self.mirror_with(image, MirrorMode::Horizontal)
    }

    /// Mirrors I420 image top to bottom
    pub fn flip(&self, image: &ImageView<'_>) -> Result<Image, YuvError> {
        self.mirror_with(image, MirrorMode::Vertical)
    }

    fn mirror_with(&self, image: &ImageView<'_>, mode: MirrorMode) -> Result<Image, YuvError> {
        check_format(PixelFormat::I420, image.format())?;
        let mut mirrored = Image::alloc(PixelFormat::I420, image.width(), image.height())?;
        let [Some(src_y), Some(src_u), Some(src_v)] = image.planes() else {
            return Err(format_mismatch(PixelFormat::I420, image.format()));
        };
        let [Some(dst_y), Some(dst_u), Some(dst_v)] = mirrored.planes_mut() else {
            return Err(format_mismatch(PixelFormat::I420, mirrored.format()));
        };
        self.kernels.mirror_plane(src_y, dst_y, mode)?;
        self.kernels.mirror_plane(src_u, dst_u, mode)?;
        self.kernels.mirror_plane(src_v, dst_v, mode)?;
        Ok(mirrored)
    }

    /// Rotates I420 image clockwise.
    ///
    /// [RotationMode::Rotate90] and [RotationMode::Rotate270] swap width and height,
    /// [RotationMode::Rotate0] returns a fresh copy.
    pub fn rotate(&self, image: &ImageView<'_>, mode: RotationMode) -> Result<Image, YuvError> {
        check_format(PixelFormat::I420, image.format())?;
        let (width, height) = mode.rotated_dimensions(image.width(), image.height());
        let mut rotated = Image::alloc(PixelFormat::I420, width, height)?;
        let [Some(src_y), Some(src_u), Some(src_v)] = image.planes() else {
            return Err(format_mismatch(PixelFormat::I420, image.format()));
        };
        let [Some(dst_y), Some(dst_u), Some(dst_v)] = rotated.planes_mut() else {
            return Err(format_mismatch(PixelFormat::I420, rotated.format()));
        };
        self.kernels.rotate_plane(src_y, dst_y, mode)?;
        self.kernels.rotate_plane(src_u, dst_u, mode)?;
        self.kernels.rotate_plane(src_v, dst_v, mode)?;
        Ok(rotated)
    }
}
