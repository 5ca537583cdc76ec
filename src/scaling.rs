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

/// Declares resampling filter
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FilterMode {
    /// Point sampling, destination `(dx, dy)` reads source `(dx * sw / dw, dy * sh / dh)`
    None,
    /// Area average when shrinking, point sampling when any axis grows
    #[default]
    Box,
}

/// Source samples one destination sample covers, weights are measured in
/// `1 / dst_len` of a source sample and sum up to `src_len`
#[derive(Debug, Clone)]
struct BoxSpan {
    start: usize,
    weights: Vec<u64>,
}

fn box_spans(src_len: usize, dst_len: usize) -> Vec<BoxSpan> {
    let src_len = src_len as u64;
    let dst_len = dst_len as u64;
    (0..dst_len)
        .map(|d| {
            let lo = d * src_len;
            let hi = lo + src_len;
            let first = lo / dst_len;
            let last = (hi - 1) / dst_len;
            let weights = (first..=last)
                .map(|i| {
                    let cell_lo = i * dst_len;
                    let cell_hi = cell_lo + dst_len;
                    hi.min(cell_hi) - lo.max(cell_lo)
                })
                .collect();
            BoxSpan {
                start: first as usize,
                weights,
            }
        })
        .collect()
}

#[inline]
fn nearest_index(d: usize, src_len: usize, dst_len: usize) -> usize {
    ((d as u64 * src_len as u64) / dst_len as u64) as usize
}

/// Resamples single byte plane into the destination plane.
///
/// `Box` averages the exact source area each destination sample covers, partially
/// covered source samples contribute proportionally to their coverage.
/// It is applied only when no axis grows, otherwise point sampling is used.
///
/// # Arguments
///
/// * `src`: Source plane
/// * `dst`: Destination plane, its dimensions are the target size
/// * `filter`: Refer to [FilterMode] for mode info
///
/// returns: Result<(), [KernelFailure]>
///
pub(crate) fn scale_plane(
    src: PlaneRef<'_>,
    dst: PlaneMut<'_>,
    filter: FilterMode,
) -> Result<(), KernelFailure> {
    const OP: KernelOp = KernelOp::ScalePlane;
    check_src(OP, &src, 1)?;
    check_dst(OP, &dst, 1)?;

    let is_downscale = dst.width <= src.width && dst.height <= src.height;
    if filter == FilterMode::Box && is_downscale {
        scale_plane_box(src, dst)
    } else {
        scale_plane_nearest(src, dst);
        Ok(())
    }
}

fn scale_plane_nearest(src: PlaneRef<'_>, dst: PlaneMut<'_>) {
    let dst_width = dst.width;
    let dst_height = dst.height;
    let x_map: Vec<usize> = (0..dst_width)
        .map(|dx| nearest_index(dx, src.width, dst_width))
        .collect();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.data.par_chunks_mut(dst.stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.data.chunks_mut(dst.stride);
    }

    iter.take(dst_height).enumerate().for_each(|(dy, dst_row)| {
        let sy = nearest_index(dy, src.height, dst_height);
        let src_row = &src.data[sy * src.stride..sy * src.stride + src.width];
        for (dst, &sx) in dst_row[..dst_width].iter_mut().zip(x_map.iter()) {
            *dst = src_row[sx];
        }
    });
}

fn scale_plane_box(src: PlaneRef<'_>, dst: PlaneMut<'_>) -> Result<(), KernelFailure> {
    // Accumulator holds up to 255 * src.width * src.height
    let total = (src.width as u64)
        .checked_mul(src.height as u64)
        .filter(|area| area.checked_mul(u8::MAX as u64).is_some())
        .ok_or_else(|| kernel_error(KernelOp::ScalePlane))?;
    let half = total / 2;

    let dst_width = dst.width;
    let x_spans = box_spans(src.width, dst_width);
    let y_spans = box_spans(src.height, dst.height);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.data.par_chunks_mut(dst.stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.data.chunks_mut(dst.stride);
    }

    iter.take(dst.height).enumerate().for_each(|(dy, dst_row)| {
        let mut accumulator = vec![0u64; dst_width];
        let y_span = &y_spans[dy];
        for (j, &y_weight) in y_span.weights.iter().enumerate() {
            let sy = y_span.start + j;
            let src_row = &src.data[sy * src.stride..sy * src.stride + src.width];
            for (acc, x_span) in accumulator.iter_mut().zip(x_spans.iter()) {
                let row_sum: u64 = src_row[x_span.start..x_span.start + x_span.weights.len()]
                    .iter()
                    .zip(x_span.weights.iter())
                    .map(|(&v, &w)| v as u64 * w)
                    .sum();
                *acc += row_sum * y_weight;
            }
        }
        for (dst, &acc) in dst_row[..dst_width].iter_mut().zip(accumulator.iter()) {
            *dst = ((acc + half) / total) as u8;
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(
        src: &[u8],
        width: usize,
        height: usize,
        dst_width: usize,
        dst_height: usize,
        filter: FilterMode,
    ) -> Vec<u8> {
        let mut dst = vec![0u8; dst_width * dst_height];
        scale_plane(
            PlaneRef {
                data: src,
                stride: width,
                width,
                height,
            },
            PlaneMut {
                data: &mut dst,
                stride: dst_width,
                width: dst_width,
                height: dst_height,
            },
            filter,
        )
        .unwrap();
        dst
    }

    #[test]
    fn test_box_spans_cover_source() {
        for src_len in 1..20usize {
            for dst_len in 1..=src_len {
                let spans = box_spans(src_len, dst_len);
                assert_eq!(spans.len(), dst_len);
                for span in &spans {
                    assert_eq!(span.weights.iter().sum::<u64>(), src_len as u64);
                    assert!(span.start + span.weights.len() <= src_len);
                }
            }
        }
    }

    #[test]
    fn test_box_integral_ratio() {
        #[rustfmt::skip]
        let src = [
            0u8, 10, 100, 100,
            20, 30, 100, 100,
            1, 1, 50, 51,
            1, 1, 52, 53,
        ];
        assert_eq!(scale(&src, 4, 4, 2, 2, FilterMode::Box), [15, 100, 1, 52]);
    }

    #[test]
    fn test_box_fractional_ratio() {
        let src = [0u8, 30, 60];
        // dst0 = (2 * 0 + 1 * 30) / 3, dst1 = (1 * 30 + 2 * 60) / 3
        assert_eq!(scale(&src, 3, 1, 2, 1, FilterMode::Box), [10, 50]);
    }

    #[test]
    fn test_nearest_downscale() {
        let src = [0u8, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(scale(&src, 8, 1, 3, 1, FilterMode::None), [0, 2, 5]);
    }

    #[test]
    fn test_box_upscale_falls_back_to_nearest() {
        let src = [10u8, 20, 30, 40];
        let boxed = scale(&src, 2, 2, 4, 4, FilterMode::Box);
        let nearest = scale(&src, 2, 2, 4, 4, FilterMode::None);
        assert_eq!(boxed, nearest);
        assert_eq!(&boxed[..4], &[10, 10, 20, 20]);
        assert_eq!(&boxed[12..], &[30, 30, 40, 40]);
    }

    #[test]
    fn test_same_size_is_identity() {
        let src: Vec<u8> = (0..35u8).map(|v| v.wrapping_mul(37)).collect();
        assert_eq!(scale(&src, 7, 5, 7, 5, FilterMode::Box), src);
        assert_eq!(scale(&src, 7, 5, 7, 5, FilterMode::None), src);
    }
}
