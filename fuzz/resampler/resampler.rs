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
use yuvpipe::{FilterMode, Image, PixelFormat, Region, Resampler};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, u8)| {
    fuzz_scale_region(data.0, data.1, data.2, data.3, data.4, data.5, data.6);
});

fn fuzz_scale_region(
    i_width: u8,
    i_height: u8,
    x: u8,
    y: u8,
    t_width: u8,
    t_height: u8,
    value: u8,
) {
    if i_height == 0 || i_width == 0 || t_width == 0 || t_height == 0 {
        return;
    }
    let mut image = Image::alloc(PixelFormat::I420, i_width as u32, i_height as u32).unwrap();
    {
        let [Some(y_plane), Some(u_plane), Some(v_plane)] = image.planes_mut() else {
            unreachable!();
        };
        y_plane.data.fill(value);
        u_plane.data.fill(value);
        v_plane.data.fill(value);
    }

    let x = (x as u32 % i_width as u32) & !1;
    let y = (y as u32 % i_height as u32) & !1;
    let region = Region {
        x,
        y,
        width: i_width as u32 - x,
        height: i_height as u32 - y,
    };

    for filter in [FilterMode::None, FilterMode::Box] {
        let scaled = Resampler::default()
            .scale_region(
                &image.view(),
                region,
                t_width as u32,
                t_height as u32,
                filter,
            )
            .unwrap();
        assert_eq!(scaled.width(), t_width as u32);
        assert!(scaled.data().iter().all(|&v| v == value));
    }
}
