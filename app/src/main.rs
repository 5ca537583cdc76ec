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
use image::ColorType;
use std::error::Error;
use std::fs;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yuvpipe::{
    frame_size, ConversionPipeline, ImageView, PipelineOptions, PipelineStage, PixelFormat,
};

const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;

/// Horizontal luma ramp with a vertical chroma ramp, easy to follow through rotations
fn gradient_frame(width: u32, height: u32) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut frame = vec![128u8; frame_size(PixelFormat::Nv21, width, height)?];
    let luma_size = width as usize * height as usize;
    for (y, row) in frame[..luma_size].chunks_exact_mut(width as usize).enumerate() {
        for (x, dst) in row.iter_mut().enumerate() {
            *dst = (16 + x * 219 / width as usize + y * 20 / height as usize).min(235) as u8;
        }
    }
    let vu_stride = 2 * width.div_ceil(2) as usize;
    let chroma_rows = height.div_ceil(2) as usize;
    for (y, row) in frame[luma_size..].chunks_exact_mut(vu_stride).enumerate() {
        let v = (64 + y * 128 / chroma_rows) as u8;
        for pair in row.chunks_exact_mut(2) {
            pair[0] = v;
            pair[1] = 255 - v;
        }
    }
    Ok(frame)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // usage: app [input.nv21 width height]
    let args: Vec<String> = std::env::args().collect();
    let (frame, width, height) = if args.len() >= 4 {
        let width: u32 = args[2].parse()?;
        let height: u32 = args[3].parse()?;
        (fs::read(&args[1])?, width, height)
    } else {
        (
            gradient_frame(DEFAULT_WIDTH, DEFAULT_HEIGHT)?,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
        )
    };
    let view = ImageView::new(PixelFormat::Nv21, &frame, width, height)?;

    let dump_stage = |stage: PipelineStage, image: &ImageView<'_>| {
        let path = format!("stage_{}_{}x{}.yuv", stage, image.width(), image.height());
        match fs::write(&path, image.data()) {
            Ok(()) => info!("{} stage written to {}", stage, path),
            Err(e) => tracing::warn!("Failed to write {}: {}", path, e),
        }
    };

    let pipeline = ConversionPipeline::new(PipelineOptions {
        render_packed: true,
        ..PipelineOptions::default()
    })
    .with_inspector(&dump_stage);

    let plan = pipeline.plan(width, height)?;
    info!(
        "{}x{} -> rotated {}x{} -> output {}x{} ({} bytes)",
        width, height, plan.rotated.0, plan.rotated.1, plan.output.0, plan.output.1, plan.output_size
    );

    let start_time = Instant::now();
    let output = pipeline.run(&view)?;
    info!("pipeline time: {:?}", start_time.elapsed());

    fs::write("output.nv21", output.nv21.data())?;
    if let Some(packed) = output.packed {
        image::save_buffer(
            "output.png",
            packed.data(),
            packed.width(),
            packed.height(),
            ColorType::Rgba8,
        )?;
        info!("packed rendering written to output.png");
    }
    Ok(())
}
