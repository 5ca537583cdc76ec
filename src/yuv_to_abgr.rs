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
use crate::kernels::{check_dst, check_src, kernel_error, KernelOp};
use crate::numerics::qrshr;
use crate::yuv_error::KernelFailure;
use crate::yuv_support::{get_inverse_transform, get_yuv_range, YuvRange, YuvStandardMatrix};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Byte offsets of channels inside one packed ABGR pixel (little endian `0xAABBGGRR`)
pub const ABGR_R_OFFSET: usize = 0;
pub const ABGR_G_OFFSET: usize = 1;
pub const ABGR_B_OFFSET: usize = 2;
pub const ABGR_A_OFFSET: usize = 3;
pub const ABGR_CHANNELS: usize = 4;

/// Converts 8 bit 4:2:0 planar YUV into ABGR.
///
/// Chroma is upsampled by taking the nearest sample, alpha is always 255.
pub(crate) fn i420_to_abgr(
    y_plane: PlaneRef<'_>,
    u_plane: PlaneRef<'_>,
    v_plane: PlaneRef<'_>,
    abgr: PlaneMut<'_>,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), KernelFailure> {
    const OP: KernelOp = KernelOp::I420ToAbgr;
    check_src(OP, &y_plane, 1)?;
    check_src(OP, &u_plane, 1)?;
    check_src(OP, &v_plane, 1)?;
    check_dst(OP, &abgr, ABGR_CHANNELS)?;

    let width = y_plane.width;
    let height = y_plane.height;
    let chroma_width = width.div_ceil(2);
    let chroma_height = height.div_ceil(2);
    if abgr.width != width
        || abgr.height != height
        || u_plane.width != chroma_width
        || u_plane.height != chroma_height
        || v_plane.width != chroma_width
        || v_plane.height != chroma_height
    {
        return Err(kernel_error(OP));
    }

    const PRECISION: i32 = 13;
    let chroma_range = get_yuv_range(8, range);
    let kr_kb = matrix.get_kr_kb();
    let transform = get_inverse_transform(
        255,
        chroma_range.range_y,
        chroma_range.range_uv,
        kr_kb.kr,
        kr_kb.kb,
    )
    .ok_or_else(|| kernel_error(OP))?
    .to_integers(PRECISION as u32);

    let y_coef = transform.y_coef;
    let cr_coef = transform.cr_coef;
    let cb_coef = transform.cb_coef;
    let g_coef_1 = transform.g_coeff_1;
    let g_coef_2 = transform.g_coeff_2;
    let bias_y = chroma_range.bias_y as i32;
    let bias_uv = chroma_range.bias_uv as i32;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = abgr.data.par_chunks_mut(abgr.stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = abgr.data.chunks_mut(abgr.stride);
    }

    iter.take(height).enumerate().for_each(|(y, abgr_row)| {
        let y_offset = y * y_plane.stride;
        let u_offset = (y >> 1) * u_plane.stride;
        let v_offset = (y >> 1) * v_plane.stride;
        let y_row = &y_plane.data[y_offset..y_offset + width];
        let u_row = &u_plane.data[u_offset..u_offset + chroma_width];
        let v_row = &v_plane.data[v_offset..v_offset + chroma_width];

        for (x, (dst, &y_src)) in abgr_row[..width * ABGR_CHANNELS]
            .chunks_exact_mut(ABGR_CHANNELS)
            .zip(y_row.iter())
            .enumerate()
        {
            let y_value = (y_src as i32 - bias_y) * y_coef;
            let cb_value = u_row[x >> 1] as i32 - bias_uv;
            let cr_value = v_row[x >> 1] as i32 - bias_uv;

            let r = qrshr::<PRECISION, 8>(y_value + cr_coef * cr_value);
            let b = qrshr::<PRECISION, 8>(y_value + cb_coef * cb_value);
            let g = qrshr::<PRECISION, 8>(y_value - g_coef_1 * cr_value - g_coef_2 * cb_value);

            dst[ABGR_R_OFFSET] = r as u8;
            dst[ABGR_G_OFFSET] = g as u8;
            dst[ABGR_B_OFFSET] = b as u8;
            dst[ABGR_A_OFFSET] = 255;
        }
    });

    Ok(())
}
