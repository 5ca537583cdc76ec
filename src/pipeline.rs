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
use crate::converter::FormatConverter;
use crate::geometry::RotationMode;
use crate::images::{Image, ImageView};
use crate::kernels::{PixelKernels, ScalarKernels};
use crate::plane_layout::{frame_size, PixelFormat, PlaneLayout};
use crate::resampler::{Region, Resampler};
use crate::scaling::FilterMode;
use crate::transformer::GeometricTransformer;
use crate::yuv_error::{check_non_zero, MismatchedSize};
use crate::YuvError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tracing::{debug, debug_span, warn};

/// Step of [ConversionPipeline] an image was produced by, or an error came from
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum PipelineStage {
    /// NV21 into I420
    Decode,
    /// Horizontal mirror
    Mirror,
    Rotate,
    Scale,
    /// I420 back into NV21
    Encode,
    /// I420 into packed colour
    Render,
    /// Caller provided output buffer
    Output,
}

impl Display for PipelineStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::Decode => f.write_str("decode"),
            PipelineStage::Mirror => f.write_str("mirror"),
            PipelineStage::Rotate => f.write_str("rotate"),
            PipelineStage::Scale => f.write_str("scale"),
            PipelineStage::Encode => f.write_str("encode"),
            PipelineStage::Render => f.write_str("render"),
            PipelineStage::Output => f.write_str("output"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PipelineError {
    pub stage: PipelineStage,
    pub error: YuvError,
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} stage failed: {}", self.stage, self.error))
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

trait AtStage<T> {
    fn at_stage(self, stage: PipelineStage) -> Result<T, PipelineError>;
}

impl<T> AtStage<T> for Result<T, YuvError> {
    fn at_stage(self, stage: PipelineStage) -> Result<T, PipelineError> {
        self.map_err(|error| PipelineError { stage, error })
    }
}

/// Output size of the scale stage
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ScaleTarget {
    /// Centered square of the rotated frame with side `min(width, height)`
    #[default]
    SquareCrop,
    /// Centered square of the rotated frame resampled to `side x side`
    Square(u32),
    /// Whole rotated frame resampled to exactly `width x height`
    Exact { width: u32, height: u32 },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PipelineOptions {
    /// Mirror left to right before rotating
    pub mirror: bool,
    pub rotation: RotationMode,
    pub filter: FilterMode,
    pub target: ScaleTarget,
    /// Also render the scaled image into [PixelFormat::PackedColor]
    pub render_packed: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            mirror: true,
            rotation: RotationMode::Rotate90,
            filter: FilterMode::Box,
            target: ScaleTarget::SquareCrop,
            render_packed: false,
        }
    }
}

/// Frame dimensions after every stage, computed without touching pixels
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FramePlan {
    pub input: (u32, u32),
    pub rotated: (u32, u32),
    /// Part of the rotated frame the scale stage reads
    pub crop: Region,
    pub output: (u32, u32),
    /// Byte size of the NV21 output
    pub output_size: usize,
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub nv21: Image,
    pub packed: Option<Image>,
}

/// Receives every intermediate image right after its stage succeeded
pub trait StageInspector {
    fn inspect(&self, stage: PipelineStage, image: &ImageView<'_>);
}

impl<F> StageInspector for F
where
    F: Fn(PipelineStage, &ImageView<'_>),
{
    fn inspect(&self, stage: PipelineStage, image: &ImageView<'_>) {
        self(stage, image)
    }
}

/// Runs `decode -> mirror -> rotate -> scale -> encode` over an NV21 frame.
///
/// Each stage borrows the previous image and allocates its own output; the
/// previous image is released as soon as the next one exists. When a stage fails
/// nothing after it runs and every intermediate is dropped.
///
/// # Examples
///
/// ```
/// use yuvpipe::{ConversionPipeline, ImageView, PipelineOptions, PixelFormat};
///
/// let frame = vec![0u8; 24];
/// let view = ImageView::new(PixelFormat::Nv21, &frame, 4, 4).unwrap();
/// let output = ConversionPipeline::new(PipelineOptions::default())
///     .run(&view)
///     .unwrap();
/// assert_eq!(output.nv21.data(), &[0u8; 24]);
/// ```
#[derive(Copy, Clone)]
pub struct ConversionPipeline<'a> {
    options: PipelineOptions,
    kernels: &'a dyn PixelKernels,
    inspector: Option<&'a dyn StageInspector>,
}

impl Default for ConversionPipeline<'_> {
    fn default() -> Self {
        ConversionPipeline::new(PipelineOptions::default())
    }
}

impl<'a> ConversionPipeline<'a> {
    pub fn new(options: PipelineOptions) -> Self {
        ConversionPipeline {
            options,
            kernels: &ScalarKernels,
            inspector: None,
        }
    }

    pub fn with_kernels(mut self, kernels: &'a dyn PixelKernels) -> Self {
        self.kernels = kernels;
        self
    }

    pub fn with_inspector(mut self, inspector: &'a dyn StageInspector) -> Self {
        self.inspector = Some(inspector);
        self
    }

    #[inline]
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Computes stage dimensions and output size for a `width x height` input.
    pub fn plan(&self, width: u32, height: u32) -> Result<FramePlan, PipelineError> {
        PlaneLayout::new(PixelFormat::Nv21, width, height).at_stage(PipelineStage::Decode)?;
        let rotated = self.options.rotation.rotated_dimensions(width, height);
        let (crop, output) = match self.options.target {
            ScaleTarget::SquareCrop => {
                let crop = Region::centered_square(rotated.0, rotated.1);
                (crop, (crop.width, crop.height))
            }
            ScaleTarget::Square(side) => {
                check_non_zero(side, side).at_stage(PipelineStage::Scale)?;
                (Region::centered_square(rotated.0, rotated.1), (side, side))
            }
            ScaleTarget::Exact { width, height } => {
                check_non_zero(width, height).at_stage(PipelineStage::Scale)?;
                (Region::full(rotated.0, rotated.1), (width, height))
            }
        };
        let output_size =
            frame_size(PixelFormat::Nv21, output.0, output.1).at_stage(PipelineStage::Encode)?;
        Ok(FramePlan {
            input: (width, height),
            rotated,
            crop,
            output,
            output_size,
        })
    }

    /// Runs every stage over an NV21 frame.
    pub fn run(&self, input: &ImageView<'_>) -> Result<PipelineOutput, PipelineError> {
        let span = debug_span!("pipeline", width = input.width(), height = input.height());
        let _guard = span.enter();

        let plan = self.plan(input.width(), input.height())?;
        let converter = FormatConverter::new(self.kernels);
        let transformer = GeometricTransformer::new(self.kernels);
        let resampler = Resampler::new(self.kernels);

        let planar = self.run_stage(PipelineStage::Decode, || {
            converter.semi_planar_to_planar(input)
        })?;

        let planar = if self.options.mirror {
            let mirrored =
                self.run_stage(PipelineStage::Mirror, || transformer.mirror(&planar.view()))?;
            drop(planar);
            mirrored
        } else {
            planar
        };

        let rotated = self.run_stage(PipelineStage::Rotate, || {
            transformer.rotate(&planar.view(), self.options.rotation)
        })?;
        drop(planar);

        let scaled = self.run_stage(PipelineStage::Scale, || {
            resampler.scale_region(
                &rotated.view(),
                plan.crop,
                plan.output.0,
                plan.output.1,
                self.options.filter,
            )
        })?;
        drop(rotated);

        let nv21 = self.run_stage(PipelineStage::Encode, || {
            converter.planar_to_semi_planar(&scaled.view())
        })?;

        let packed = if self.options.render_packed {
            Some(self.run_stage(PipelineStage::Render, || {
                converter.planar_to_packed(&scaled.view())
            })?)
        } else {
            None
        };

        Ok(PipelineOutput { nv21, packed })
    }

    /// Runs the pipeline over raw NV21 bytes and writes the NV21 result into `output`.
    ///
    /// Output capacity is checked before any stage runs. Only NV21 is written,
    /// so the render stage is skipped regardless of [PipelineOptions::render_packed].
    ///
    /// returns: dimensions of the written frame
    ///
    pub fn convert_into(
        &self,
        input: &[u8],
        width: u32,
        height: u32,
        output: &mut [u8],
    ) -> Result<(u32, u32), PipelineError> {
        let plan = self.plan(width, height)?;
        if output.len() < plan.output_size {
            return Err(YuvError::BufferTooSmall(MismatchedSize {
                expected: plan.output_size,
                received: output.len(),
            }))
            .at_stage(PipelineStage::Output);
        }
        let view =
            ImageView::new(PixelFormat::Nv21, input, width, height).at_stage(PipelineStage::Decode)?;
        let pipeline = ConversionPipeline {
            options: PipelineOptions {
                render_packed: false,
                ..self.options
            },
            ..*self
        };
        let result = pipeline.run(&view)?;
        output[..plan.output_size].copy_from_slice(result.nv21.data());
        Ok(plan.output)
    }

    fn run_stage<F>(&self, stage: PipelineStage, body: F) -> Result<Image, PipelineError>
    where
        F: FnOnce() -> Result<Image, YuvError>,
    {
        match body() {
            Ok(image) => {
                debug!(
                    "{} stage produced {}x{} {:?}",
                    stage,
                    image.width(),
                    image.height(),
                    image.format()
                );
                if let Some(inspector) = self.inspector {
                    inspector.inspect(stage, &image.view());
                }
                Ok(image)
            }
            Err(error) => {
                warn!("{} stage failed: {}", stage, error);
                Err(PipelineError { stage, error })
            }
        }
    }
}
