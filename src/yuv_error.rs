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
use crate::kernels::KernelOp;
use crate::plane_layout::PixelFormat;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Describes why a width/height/stride combination was rejected
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DimensionsFault {
    /// Width or height is zero
    Zero,
    /// Byte count does not fit into `usize`
    Overflow,
    /// Buffer length does not match the size computed from the layout
    BufferLength(MismatchedSize),
    /// Requested region leaves the source frame
    RegionOutOfBounds,
    /// Region origin is not aligned to the chroma grid
    UnalignedRegion,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidDimensions {
    pub width: u32,
    pub height: u32,
    pub fault: DimensionsFault,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FormatMismatch {
    pub expected: PixelFormat,
    pub received: PixelFormat,
}

/// Non-success status reported by a pixel kernel
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KernelFailure {
    pub op: KernelOp,
    pub status: i32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum YuvError {
    InvalidDimensions(InvalidDimensions),
    AllocationFailure(usize),
    KernelFailure(KernelFailure),
    BufferTooSmall(MismatchedSize),
    FormatMismatch(FormatMismatch),
}

impl Display for DimensionsFault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DimensionsFault::Zero => f.write_str("zero sized images are not supported"),
            DimensionsFault::Overflow => f.write_str("image size overflows pointer capabilities"),
            DimensionsFault::BufferLength(size) => f.write_fmt(format_args!(
                "buffer must have size {}, but it was {}",
                size.expected, size.received
            )),
            DimensionsFault::RegionOutOfBounds => f.write_str("region is outside of the image"),
            DimensionsFault::UnalignedRegion => {
                f.write_str("region origin must be aligned to chroma subsampling")
            }
        }
    }
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::InvalidDimensions(dims) => f.write_fmt(format_args!(
                "Invalid dimensions {}x{}: {}",
                dims.width, dims.height, dims.fault
            )),
            YuvError::AllocationFailure(size) => {
                f.write_fmt(format_args!("Failed to allocate buffer of {} bytes", size))
            }
            YuvError::KernelFailure(failure) => f.write_fmt(format_args!(
                "Pixel kernel {:?} failed with status {}",
                failure.op, failure.status
            )),
            YuvError::BufferTooSmall(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::FormatMismatch(mismatch) => f.write_fmt(format_args!(
                "Expected {:?} image, but received {:?}",
                mismatch.expected, mismatch.received
            )),
        }
    }
}

impl Error for YuvError {}

impl From<KernelFailure> for YuvError {
    fn from(value: KernelFailure) -> Self {
        YuvError::KernelFailure(value)
    }
}

#[inline]
pub(crate) fn invalid_dimensions(width: u32, height: u32, fault: DimensionsFault) -> YuvError {
    YuvError::InvalidDimensions(InvalidDimensions {
        width,
        height,
        fault,
    })
}

#[inline]
pub(crate) fn check_non_zero(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(invalid_dimensions(width, height, DimensionsFault::Zero));
    }
    Ok(())
}

#[inline]
pub(crate) fn checked_size(
    width: u32,
    height: u32,
    values: &[usize],
) -> Result<usize, YuvError> {
    values
        .iter()
        .try_fold(1usize, |acc, &v| acc.checked_mul(v))
        .ok_or_else(|| invalid_dimensions(width, height, DimensionsFault::Overflow))
}

#[inline]
pub(crate) fn check_format(expected: PixelFormat, received: PixelFormat) -> Result<(), YuvError> {
    if expected != received {
        return Err(YuvError::FormatMismatch(FormatMismatch { expected, received }));
    }
    Ok(())
}

#[inline]
pub(crate) fn format_mismatch(expected: PixelFormat, received: PixelFormat) -> YuvError {
    YuvError::FormatMismatch(FormatMismatch { expected, received })
}
