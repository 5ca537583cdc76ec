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
//! NV21 camera frame pipeline: decode into planar 4:2:0, mirror, rotate,
//! resample and encode back to NV21, optionally rendering packed colour.
#![forbid(unsafe_code)]
mod converter;
mod geometry;
mod images;
mod kernels;
mod mirroring;
mod numerics;
mod nv_planar;
mod pipeline;
mod plane_layout;
mod resampler;
mod scaling;
mod transformer;
mod yuv_error;
mod yuv_support;
mod yuv_to_abgr;

pub use yuv_support::YuvRange;
pub use yuv_support::YuvStandardMatrix;

pub use yuv_error::DimensionsFault;
pub use yuv_error::FormatMismatch;
pub use yuv_error::InvalidDimensions;
pub use yuv_error::KernelFailure;
pub use yuv_error::MismatchedSize;
pub use yuv_error::YuvError;

pub use plane_layout::chroma_height;
pub use plane_layout::chroma_width;
pub use plane_layout::frame_size;
pub use plane_layout::PixelFormat;
pub use plane_layout::PlaneDescriptor;
pub use plane_layout::PlaneLayout;
pub use plane_layout::MAX_PLANES;

pub use images::Image;
pub use images::ImageView;
pub use images::PlaneMut;
pub use images::PlaneRef;

pub use kernels::KernelOp;
pub use kernels::PixelKernels;
pub use kernels::ScalarKernels;
pub use kernels::KERNEL_DIMENSIONS_MISMATCH;
pub use kernels::KERNEL_INVALID_ARGUMENT;
pub use kernels::KERNEL_INVALID_ARRAY_SIZE;

pub use geometry::RotationMode;
pub use mirroring::MirrorMode;
pub use scaling::FilterMode;

pub use converter::FormatConverter;
pub use converter::PACKED_COLOR_MATRIX;
pub use converter::PACKED_COLOR_RANGE;

pub use transformer::GeometricTransformer;

pub use resampler::Region;
pub use resampler::Resampler;

pub use pipeline::ConversionPipeline;
pub use pipeline::FramePlan;
pub use pipeline::PipelineError;
pub use pipeline::PipelineOptions;
pub use pipeline::PipelineOutput;
pub use pipeline::PipelineStage;
pub use pipeline::ScaleTarget;
pub use pipeline::StageInspector;
