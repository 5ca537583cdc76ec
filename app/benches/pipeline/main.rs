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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuvpipe::{
    frame_size, ConversionPipeline, FilterMode, FormatConverter, GeometricTransformer, Image,
    PipelineOptions, PixelFormat, Resampler, RotationMode,
};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn noise_frame(format: PixelFormat) -> Image {
    let size = frame_size(format, WIDTH, HEIGHT).unwrap();
    let mut rng = rand::rng();
    let data: Vec<u8> = (0..size).map(|_| rng.random::<u8>()).collect();
    Image::from_vec(format, data, WIDTH, HEIGHT).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let nv21 = noise_frame(PixelFormat::Nv21);
    let i420 = noise_frame(PixelFormat::I420);

    c.bench_function("yuvpipe: NV21 -> I420", |b| {
        let converter = FormatConverter::default();
        b.iter(|| converter.semi_planar_to_planar(&nv21.view()).unwrap())
    });

    c.bench_function("yuvpipe: I420 -> ABGR", |b| {
        let converter = FormatConverter::default();
        b.iter(|| converter.planar_to_packed(&i420.view()).unwrap())
    });

    c.bench_function("yuvpipe: Mirror I420", |b| {
        let transformer = GeometricTransformer::default();
        b.iter(|| transformer.mirror(&i420.view()).unwrap())
    });

    c.bench_function("yuvpipe: Rotate 90 I420", |b| {
        let transformer = GeometricTransformer::default();
        b.iter(|| {
            transformer
                .rotate(&i420.view(), RotationMode::Rotate90)
                .unwrap()
        })
    });

    c.bench_function("yuvpipe: Box 1280x720 -> 480x270", |b| {
        let resampler = Resampler::default();
        b.iter(|| {
            resampler
                .scale(&i420.view(), 480, 270, FilterMode::Box)
                .unwrap()
        })
    });

    c.bench_function("yuvpipe: Nearest 1280x720 -> 480x270", |b| {
        let resampler = Resampler::default();
        b.iter(|| {
            resampler
                .scale(&i420.view(), 480, 270, FilterMode::None)
                .unwrap()
        })
    });

    c.bench_function("yuvpipe: Pipeline default", |b| {
        let pipeline = ConversionPipeline::new(PipelineOptions::default());
        b.iter(|| pipeline.run(&nv21.view()).unwrap())
    });

    c.bench_function("yuvpipe: Pipeline with render", |b| {
        let pipeline = ConversionPipeline::new(PipelineOptions {
            render_packed: true,
            ..PipelineOptions::default()
        });
        b.iter(|| pipeline.run(&nv21.view()).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
