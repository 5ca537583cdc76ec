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
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use yuvpipe::{
    frame_size, ConversionPipeline, FilterMode, Image, ImageView, KernelFailure, KernelOp,
    MirrorMode, PipelineOptions, PipelineStage, PixelFormat, PixelKernels, PlaneMut, PlaneRef,
    Resampler, RotationMode, ScalarKernels, ScaleTarget, YuvError, YuvRange, YuvStandardMatrix,
};

/// Tracks live heap bytes per thread, so parallel tests do not see each other
struct CountingAllocator;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record(delta: isize, is_allocation: bool) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
    if is_allocation {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record(layout.size() as isize, true);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            record(layout.size() as isize, true);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        record(-(layout.size() as isize), false);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            record(new_size as isize - layout.size() as isize, true);
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn live_bytes() -> isize {
    LIVE_BYTES.with(|live| live.get())
}

fn allocations() -> usize {
    ALLOCATIONS.with(|count| count.get())
}

#[derive(Default)]
struct FailingRotate {
    rotate_calls: AtomicUsize,
    scale_calls: AtomicUsize,
    merge_calls: AtomicUsize,
}

impl PixelKernels for FailingRotate {
    fn copy_plane(&self, src: PlaneRef<'_>, dst: PlaneMut<'_>) -> Result<(), KernelFailure> {
        ScalarKernels.copy_plane(src, dst)
    }

    fn split_vu_plane(
        &self,
        vu: PlaneRef<'_>,
        u: PlaneMut<'_>,
        v: PlaneMut<'_>,
    ) -> Result<(), KernelFailure> {
        ScalarKernels.split_vu_plane(vu, u, v)
    }

    fn merge_vu_plane(
        &self,
        u: PlaneRef<'_>,
        v: PlaneRef<'_>,
        vu: PlaneMut<'_>,
    ) -> Result<(), KernelFailure> {
        self.merge_calls.fetch_add(1, Ordering::Relaxed);
        ScalarKernels.merge_vu_plane(u, v, vu)
    }

    fn mirror_plane(
        &self,
        src: PlaneRef<'_>,
        dst: PlaneMut<'_>,
        mode: MirrorMode,
    ) -> Result<(), KernelFailure> {
        ScalarKernels.mirror_plane(src, dst, mode)
    }

    fn rotate_plane(
        &self,
        _: PlaneRef<'_>,
        _: PlaneMut<'_>,
        _: RotationMode,
    ) -> Result<(), KernelFailure> {
        self.rotate_calls.fetch_add(1, Ordering::Relaxed);
        Err(KernelFailure {
            op: KernelOp::RotatePlane,
            status: -1,
        })
    }

    fn scale_plane(
        &self,
        src: PlaneRef<'_>,
        dst: PlaneMut<'_>,
        filter: FilterMode,
    ) -> Result<(), KernelFailure> {
        self.scale_calls.fetch_add(1, Ordering::Relaxed);
        ScalarKernels.scale_plane(src, dst, filter)
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
        ScalarKernels.i420_to_abgr(y, u, v, abgr, range, matrix)
    }
}

#[test]
fn rotate_failure_releases_every_intermediate() {
    let frame = vec![90u8; frame_size(PixelFormat::Nv21, 64, 48).unwrap()];
    let view = ImageView::new(PixelFormat::Nv21, &frame, 64, 48).unwrap();
    let kernels = FailingRotate::default();
    let pipeline = ConversionPipeline::new(PipelineOptions::default()).with_kernels(&kernels);

    // first run registers logging callsites
    assert!(pipeline.run(&view).is_err());
    kernels.rotate_calls.store(0, Ordering::Relaxed);

    let live_before = live_bytes();
    let allocations_before = allocations();
    let err = pipeline.run(&view).unwrap_err();
    assert_eq!(live_bytes(), live_before);
    // decode, mirror and rotate outputs were allocated and released again
    assert!(allocations() >= allocations_before + 3);

    assert_eq!(err.stage, PipelineStage::Rotate);
    assert_eq!(
        err.error,
        YuvError::KernelFailure(KernelFailure {
            op: KernelOp::RotatePlane,
            status: -1
        })
    );
    assert_eq!(kernels.rotate_calls.load(Ordering::Relaxed), 1);
    assert_eq!(kernels.scale_calls.load(Ordering::Relaxed), 0);
    assert_eq!(kernels.merge_calls.load(Ordering::Relaxed), 0);
}

#[test]
fn successful_run_keeps_only_its_output() {
    let frame = vec![16u8; frame_size(PixelFormat::Nv21, 32, 24).unwrap()];
    let view = ImageView::new(PixelFormat::Nv21, &frame, 32, 24).unwrap();
    let pipeline = ConversionPipeline::new(PipelineOptions {
        render_packed: true,
        ..PipelineOptions::default()
    });
    drop(pipeline.run(&view).unwrap());

    let live_before = live_bytes();
    let output = pipeline.run(&view).unwrap();
    let packed_size = output.packed.as_ref().map_or(0, |packed| packed.data().len());
    let retained = output.nv21.data().len() + packed_size;
    assert_eq!(retained, 24 * 24 * 3 / 2 + 24 * 24 * 4);
    assert_eq!(live_bytes() - live_before, retained as isize);
    drop(output);
    assert_eq!(live_bytes(), live_before);
}

#[test]
fn zero_target_fails_without_allocating() {
    let image = Image::alloc(PixelFormat::I420, 8, 8).unwrap();
    let resampler = Resampler::default();

    let allocations_before = allocations();
    let result = resampler.scale(&image.view(), 0, 4, FilterMode::Box);
    assert!(matches!(result, Err(YuvError::InvalidDimensions(_))));
    let result = resampler.scale(&image.view(), 4, 0, FilterMode::None);
    assert!(matches!(result, Err(YuvError::InvalidDimensions(_))));
    assert_eq!(allocations(), allocations_before);
}

#[test]
fn zero_square_target_fails_before_decode() {
    let frame = vec![0u8; frame_size(PixelFormat::Nv21, 8, 8).unwrap()];
    let view = ImageView::new(PixelFormat::Nv21, &frame, 8, 8).unwrap();
    let pipeline = ConversionPipeline::new(PipelineOptions {
        target: ScaleTarget::Square(0),
        ..PipelineOptions::default()
    });
    assert!(pipeline.run(&view).is_err());

    let allocations_before = allocations();
    let err = pipeline.run(&view).unwrap_err();
    assert_eq!(err.stage, PipelineStage::Scale);
    assert_eq!(allocations(), allocations_before);
}
