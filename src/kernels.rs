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
use crate::geometry::{rotate_plane, RotationMode};
use crate::images::{PlaneMut, PlaneRef};
use crate::mirroring::{mirror_plane, MirrorMode};
use crate::nv_planar::{copy_plane, merge_vu_plane, split_vu_plane};
use crate::scaling::{scale_plane, FilterMode};
use crate::yuv_error::KernelFailure;
use crate::yuv_support::{YuvRange, YuvStandardMatrix};
use crate::yuv_to_abgr::i420_to_abgr;
use fast_transpose::TransposeError;

/// Identifies a primitive pixel operation
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum KernelOp {
    CopyPlane,
    SplitVuPlane,
    MergeVuPlane,
    MirrorPlane,
    RotatePlane,
    ScalePlane,
    I420ToAbgr,
}

/// Status reported by kernels when plane geometry is inconsistent
pub const KERNEL_INVALID_ARGUMENT: i32 = -1;
/// Status reported when source and destination planes disagree on dimensions
pub const KERNEL_DIMENSIONS_MISMATCH: i32 = -2;
/// Status reported when a plane slice is too small for its stride and height
pub const KERNEL_INVALID_ARRAY_SIZE: i32 = -3;

/// Primitive pixel operations the converters are built on.
///
/// Callers compute strides and plane sizes, kernels only move and filter pixels.
/// Every method reports a non-success status as [KernelFailure].
pub trait PixelKernels: Send + Sync {
    /// Copies `src.width x src.height` bytes into `dst`
    fn copy_plane(&self, src: PlaneRef<'_>, dst: PlaneMut<'_>) -> Result<(), KernelFailure>;

    /// Splits an interleaved V,U plane, `vu.width` counts pairs
    fn split_vu_plane(
        &self,
        vu: PlaneRef<'_>,
        u: PlaneMut<'_>,
        v: PlaneMut<'_>,
    ) -> Result<(), KernelFailure>;

    /// Interleaves U and V planes into V,U pairs
    fn merge_vu_plane(
        &self,
        u: PlaneRef<'_>,
        v: PlaneRef<'_>,
        vu: PlaneMut<'_>,
    ) -> Result<(), KernelFailure>;

    fn mirror_plane(
        &self,
        src: PlaneRef<'_>,
        dst: PlaneMut<'_>,
        mode: MirrorMode,
    ) -> Result<(), KernelFailure>;

    /// Rotates clockwise, `dst` must already have rotated dimensions
    fn rotate_plane(
        &self,
        src: PlaneRef<'_>,
        dst: PlaneMut<'_>,
        mode: RotationMode,
    ) -> Result<(), KernelFailure>;

    /// Resamples `src` into the full `dst` plane
    fn scale_plane(
        &self,
        src: PlaneRef<'_>,
        dst: PlaneMut<'_>,
        filter: FilterMode,
    ) -> Result<(), KernelFailure>;

    /// Converts 4:2:0 planar YUV into R, G, B, A bytes
    fn i420_to_abgr(
        &self,
        y: PlaneRef<'_>,
        u: PlaneRef<'_>,
        v: PlaneRef<'_>,
        abgr: PlaneMut<'_>,
        range: YuvRange,
        matrix: YuvStandardMatrix,
    ) -> Result<(), KernelFailure>;
}

/// Portable kernels, row loops run on rayon when the `rayon` feature is enabled
#[derive(Copy, Clone, Debug, Default)]
pub struct ScalarKernels;

impl PixelKernels for ScalarKernels {
    fn copy_plane(&self, src: PlaneRef<'_>, dst: PlaneMut<'_>) -> Result<(), KernelFailure> {
        copy_plane(src, dst)
    }

    fn split_vu_plane(
        &self,
        vu: PlaneRef<'_>,
        u: PlaneMut<'_>,
        v: PlaneMut<'_>,
    ) -> Result<(), KernelFailure> {
        split_vu_plane(vu, u, v)
    }

    fn merge_vu_plane(
        &self,
        u: PlaneRef<'_>,
        v: PlaneRef<'_>,
        vu: PlaneMut<'_>,
    ) -> Result<(), KernelFailure> {
        merge_vu_plane(u, v, vu)
    }

    fn mirror_plane(
        &self,
        src: PlaneRef<'_>,
        dst: PlaneMut<'_>,
        mode: MirrorMode,
    ) -> Result<(), KernelFailure> {
        mirror_plane(src, dst, mode)
    }

    fn rotate_plane(
        &self,
        src: PlaneRef<'_>,
        dst: PlaneMut<'_>,
        mode: RotationMode,
    ) -> Result<(), KernelFailure> {
        rotate_plane(src, dst, mode)
    }

    fn scale_plane(
        &self,
        src: PlaneRef<'_>,
        dst: PlaneMut<'_>,
        filter: FilterMode,
    ) -> Result<(), KernelFailure> {
        scale_plane(src, dst, filter)
    }

    fn i420_to_abgr(
        &self,
        y: PlaneRef<'_>,
        u: PlaneRef<'_>,
        v: PlaneRef<'_>,
        abgr: PlaneMut<'_>,
        range: YuvRange,
        matrix: YuvStandardMatrix,
    ) -> Result<(), KernelFailure> {
        i420_to_abgr(y, u, v, abgr, range, matrix)
    }
}

#[inline]
pub(crate) fn kernel_error(op: KernelOp) -> KernelFailure {
    KernelFailure {
        op,
        status: KERNEL_INVALID_ARGUMENT,
    }
}

#[inline]
pub(crate) fn map_transpose_result(
    op: KernelOp,
    result: Result<(), TransposeError>,
) -> Result<(), KernelFailure> {
    match result {
        Ok(_) => Ok(()),
        Err(err) => match err {
            TransposeError::MismatchDimensions => Err(KernelFailure {
                op,
                status: KERNEL_DIMENSIONS_MISMATCH,
            }),
            TransposeError::InvalidArraySize => Err(KernelFailure {
                op,
                status: KERNEL_INVALID_ARRAY_SIZE,
            }),
        },
    }
}

/// Checks that a plane of `bytes_per_sample` wide samples fits into its slice
#[inline]
pub(crate) fn check_plane(
    op: KernelOp,
    data_len: usize,
    stride: usize,
    width: usize,
    height: usize,
    bytes_per_sample: usize,
) -> Result<(), KernelFailure> {
    if width == 0 || height == 0 {
        return Err(kernel_error(op));
    }
    let row_bytes = width
        .checked_mul(bytes_per_sample)
        .ok_or_else(|| kernel_error(op))?;
    if stride < row_bytes {
        return Err(kernel_error(op));
    }
    let required = stride
        .checked_mul(height - 1)
        .and_then(|v| v.checked_add(row_bytes))
        .ok_or_else(|| kernel_error(op))?;
    if data_len < required {
        return Err(kernel_error(op));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_src(
    op: KernelOp,
    plane: &PlaneRef<'_>,
    bytes_per_sample: usize,
) -> Result<(), KernelFailure> {
    check_plane(
        op,
        plane.data.len(),
        plane.stride,
        plane.width,
        plane.height,
        bytes_per_sample,
    )
}

#[inline]
pub(crate) fn check_dst(
    op: KernelOp,
    plane: &PlaneMut<'_>,
    bytes_per_sample: usize,
) -> Result<(), KernelFailure> {
    check_plane(
        op,
        plane.data.len(),
        plane.stride,
        plane.width,
        plane.height,
        bytes_per_sample,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_plane_accepts_short_last_row() {
        assert!(check_plane(KernelOp::CopyPlane, 10, 4, 2, 3, 1).is_ok());
        assert!(check_plane(KernelOp::CopyPlane, 9, 4, 2, 3, 1).is_err());
    }

    #[test]
    fn test_check_plane_rejects_small_stride() {
        let err = check_plane(KernelOp::MirrorPlane, 64, 3, 2, 2, 2).unwrap_err();
        assert_eq!(err.op, KernelOp::MirrorPlane);
        assert_eq!(err.status, KERNEL_INVALID_ARGUMENT);
    }

    #[test]
    fn test_transpose_errors_keep_operation() {
        let err = map_transpose_result(
            KernelOp::RotatePlane,
            Err(TransposeError::MismatchDimensions),
        )
        .unwrap_err();
        assert_eq!(err.op, KernelOp::RotatePlane);
        assert_eq!(err.status, KERNEL_DIMENSIONS_MISMATCH);
        let err =
            map_transpose_result(KernelOp::MirrorPlane, Err(TransposeError::InvalidArraySize))
                .unwrap_err();
        assert_eq!(err.op, KernelOp::MirrorPlane);
        assert_eq!(err.status, KERNEL_INVALID_ARRAY_SIZE);
        assert!(map_transpose_result(KernelOp::RotatePlane, Ok(())).is_ok());
    }
}
