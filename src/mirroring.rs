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
use crate::yuv_error::KernelFailure;
use fast_transpose::{flip_plane, flop_plane};

/// Declares mirroring mode: vertical or horizontal
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum MirrorMode {
    /// Top and bottom rows are exchanged
    Vertical,
    /// Every row is reversed left to right
    Horizontal,
}

/// Mirrors single byte plane.
///
/// # Arguments
///
/// * `src`: Source plane
/// * `dst`: Destination plane, must have the same dimensions as the source
/// * `mode`: Refer to [MirrorMode] for mode info
///
/// returns: Result<(), [KernelFailure]>
///
pub(crate) fn mirror_plane(
    src: PlaneRef<'_>,
    dst: PlaneMut<'_>,
    mode: MirrorMode,
) -> Result<(), KernelFailure> {
    const OP: KernelOp = KernelOp::MirrorPlane;
    check_src(OP, &src, 1)?;
    check_dst(OP, &dst, 1)?;
    if src.width != dst.width || src.height != dst.height {
        return Err(kernel_error(OP));
    }

    let rs = match mode {
        MirrorMode::Vertical => flop_plane(
            src.data,
            src.stride,
            dst.data,
            dst.stride,
            src.width,
            src.height,
        ),
        MirrorMode::Horizontal => flip_plane(
            src.data,
            src.stride,
            dst.data,
            dst.stride,
            src.width,
            src.height,
        ),
    };
    map_transpose_result(OP, rs)
}
