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
use crate::yuv_error::KernelFailure;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

pub(crate) fn copy_plane(src: PlaneRef<'_>, dst: PlaneMut<'_>) -> Result<(), KernelFailure> {
    const OP: KernelOp = KernelOp::CopyPlane;
    check_src(OP, &src, 1)?;
    check_dst(OP, &dst, 1)?;
    if src.width != dst.width || src.height != dst.height {
        return Err(kernel_error(OP));
    }

    let width = src.width;
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.data.par_chunks_mut(dst.stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.data.chunks_mut(dst.stride);
    }

    iter.take(dst.height).enumerate().for_each(|(y, dst_row)| {
        let src_offset = y * src.stride;
        dst_row[..width].copy_from_slice(&src.data[src_offset..src_offset + width]);
    });

    Ok(())
}

pub(crate) fn split_vu_plane(
    vu: PlaneRef<'_>,
    u: PlaneMut<'_>,
    v: PlaneMut<'_>,
) -> Result<(), KernelFailure> {
    const OP: KernelOp = KernelOp::SplitVuPlane;
    check_src(OP, &vu, 2)?;
    check_dst(OP, &u, 1)?;
    check_dst(OP, &v, 1)?;
    if vu.width != u.width
        || vu.width != v.width
        || vu.height != u.height
        || vu.height != v.height
    {
        return Err(kernel_error(OP));
    }

    let width = vu.width;
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = u
            .data
            .par_chunks_mut(u.stride)
            .zip(v.data.par_chunks_mut(v.stride));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = u.data.chunks_mut(u.stride).zip(v.data.chunks_mut(v.stride));
    }

    iter.take(vu.height)
        .enumerate()
        .for_each(|(y, (u_row, v_row))| {
            let src_offset = y * vu.stride;
            let vu_row = &vu.data[src_offset..src_offset + width * 2];
            for ((u_dst, v_dst), pair) in u_row[..width]
                .iter_mut()
                .zip(v_row[..width].iter_mut())
                .zip(vu_row.chunks_exact(2))
            {
                *v_dst = pair[0];
                *u_dst = pair[1];
            }
        });

    Ok(())
}

pub(crate) fn merge_vu_plane(
    u: PlaneRef<'_>,
    v: PlaneRef<'_>,
    vu: PlaneMut<'_>,
) -> Result<(), KernelFailure> {
    const OP: KernelOp = KernelOp::MergeVuPlane;
    check_src(OP, &u, 1)?;
    check_src(OP, &v, 1)?;
    check_dst(OP, &vu, 2)?;
    if vu.width != u.width
        || vu.width != v.width
        || vu.height != u.height
        || vu.height != v.height
    {
        return Err(kernel_error(OP));
    }

    let width = vu.width;
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = vu.data.par_chunks_mut(vu.stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = vu.data.chunks_mut(vu.stride);
    }

    iter.take(vu.height).enumerate().for_each(|(y, vu_row)| {
        let u_row = &u.data[y * u.stride..y * u.stride + width];
        let v_row = &v.data[y * v.stride..y * v.stride + width];
        for ((pair, &u_src), &v_src) in vu_row[..width * 2]
            .chunks_exact_mut(2)
            .zip(u_row.iter())
            .zip(v_row.iter())
        {
            pair[0] = v_src;
            pair[1] = u_src;
        }
    });

    Ok(())
}
