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
#![no_main]

use libfuzzer_sys::fuzz_target;
use yuvpipe::{
    frame_size, ConversionPipeline, FilterMode, ImageView, PipelineOptions, PixelFormat,
    RotationMode, ScaleTarget,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    fuzz_pipeline(data.0, data.1, data.2, data.3, data.4, data.5);
});

fn fuzz_pipeline(i_width: u8, i_height: u8, t_width: u8, t_height: u8, value: u8, mode: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let frame = vec![value; frame_size(PixelFormat::Nv21, width, height).unwrap()];
    let view = ImageView::new(PixelFormat::Nv21, &frame, width, height).unwrap();

    let rotation = match mode % 4 {
        0 => RotationMode::Rotate0,
        1 => RotationMode::Rotate90,
        2 => RotationMode::Rotate180,
        _ => RotationMode::Rotate270,
    };
    let target = match (mode / 4) % 3 {
        0 => ScaleTarget::SquareCrop,
        1 => ScaleTarget::Square(t_width as u32),
        _ => ScaleTarget::Exact {
            width: t_width as u32,
            height: t_height as u32,
        },
    };
    let options = PipelineOptions {
        mirror: mode & 0x40 != 0,
        rotation,
        filter: if mode & 0x80 != 0 {
            FilterMode::Box
        } else {
            FilterMode::None
        },
        target,
        render_packed: true,
    };
    let pipeline = ConversionPipeline::new(options);

    match pipeline.run(&view) {
        Ok(output) => {
            let plan = pipeline.plan(width, height).unwrap();
            assert_eq!(output.nv21.data().len(), plan.output_size);
            // uniform frames stay uniform through every stage
            assert!(output.nv21.data().iter().all(|&v| v == value));
            assert!(output.packed.is_some());
        }
        Err(err) => {
            assert!(t_width == 0 || t_height == 0, "unexpected failure {}", err);
        }
    }
}
