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
use crate::images::{PlaneMut, PlaneRef};
use crate::kernels::{check_dst, check_src, kernel_error, map_transpose_result, KernelOp};
use crate::nv_planar::copy_plane;
use crate::yuv_error::KernelFailure;
use fast_transpose::{rotate180_plane, transpose_plane, FlipMode, FlopMode};

/// Declares clockwise rotation mode, 0, 90, 180, 270
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RotationMode {
    Rotate0,
    #[default]
    Rotate90,
    Rotate180,
    Rotate270,
}

impl RotationMode {
    /// Whether width and height are exchanged by this rotation
    #[inline]
    pub const fn swaps_dimensions(&self) -> bool {
        matches!(self, RotationMode::Rotate90 | RotationMode::Rotate270)
    }

    /// Dimensions of an image of `width x height` after rotation
    #[inline]
    pub const fn rotated_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// Rotates single byte plane clockwise.
///
/// For a source sample `(x, y)` of a `w x h` plane:
/// * 90: destination is `(h - 1 - y, x)`
/// * 180: destination is `(w - 1 - x, h - 1 - y)`
/// * 270: destination is `(y, w - 1 - x)`
///
/// # Arguments
///
/// * `src`: Source plane
/// * `dst`: Destination plane, dimensions must already be rotated
/// * `mode`: Refer to [RotationMode] for mode info
///
/// returns: Result<(), [KernelFailure]>
///
pub(crate) fn rotate_plane(
    src: PlaneRef<'_>,
    dst: PlaneMut<'_>,
    mode: RotationMode,
) -> Result<(), KernelFailure> {
    const OP: KernelOp = KernelOp::RotatePlane;
    check_src(OP, &src, 1)?;
    check_dst(OP, &dst, 1)?;
    let (expected_width, expected_height) = if mode.swaps_dimensions() {
        (src.height, src.width)
    } else {
        (src.width, src.height)
    };
    if dst.width != expected_width || dst.height != expected_height {
        return Err(kernel_error(OP));
    }

    let rs = match mode {
        RotationMode::Rotate0 => {
            return copy_plane(src, dst).map_err(|failure| KernelFailure { op: OP, ..failure });
        }
        RotationMode::Rotate90 => transpose_plane(
            src.data,
            src.stride,
            dst.data,
            dst.stride,
            src.width,
            src.height,
            FlipMode::NoFlip,
            FlopMode::NoFlop,
        ),
        RotationMode::Rotate180 => rotate180_plane(
            src.data,
            src.stride,
            dst.data,
            dst.stride,
            src.width,
            src.height,
        ),
        RotationMode::Rotate270 => transpose_plane(
            src.data,
            src.stride,
            dst.data,
            dst.stride,
            src.width,
            src.height,
            FlipMode::Flip,
            FlopMode::Flop,
        ),
    };
    map_transpose_result(OP, rs)
}
