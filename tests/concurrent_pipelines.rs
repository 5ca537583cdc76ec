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
use rand::Rng;
use std::thread;
use yuvpipe::{
    frame_size, ConversionPipeline, Image, PipelineOptions, PixelFormat, RotationMode,
    ScaleTarget,
};

fn noise_frame(width: u32, height: u32) -> Image {
    let size = frame_size(PixelFormat::Nv21, width, height).unwrap();
    let mut rng = rand::rng();
    let data: Vec<u8> = (0..size).map(|_| rng.random::<u8>()).collect();
    Image::from_vec(PixelFormat::Nv21, data, width, height).unwrap()
}

#[test]
fn independent_runs_on_separate_threads_match_sequential() {
    let options = [
        PipelineOptions::default(),
        PipelineOptions {
            mirror: false,
            rotation: RotationMode::Rotate270,
            target: ScaleTarget::Exact {
                width: 40,
                height: 30,
            },
            render_packed: true,
            ..PipelineOptions::default()
        },
    ];
    let frames = [noise_frame(96, 64), noise_frame(33, 17)];

    let expected: Vec<_> = frames
        .iter()
        .zip(options.iter())
        .map(|(frame, options)| {
            ConversionPipeline::new(*options)
                .run(&frame.view())
                .unwrap()
                .nv21
        })
        .collect();

    let actual: Vec<Image> = thread::scope(|scope| {
        let handles: Vec<_> = frames
            .iter()
            .zip(options.iter())
            .map(|(frame, options)| {
                scope.spawn(move || {
                    ConversionPipeline::new(*options)
                        .run(&frame.view())
                        .unwrap()
                        .nv21
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(actual, expected);
    assert_eq!((actual[0].width(), actual[0].height()), (64, 64));
    assert_eq!((actual[1].width(), actual[1].height()), (40, 30));
}
