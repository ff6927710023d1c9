use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use panbrot_core::{iterations, ViewportState};

use crate::palette::Palette;
use crate::raster::RasterTarget;

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Tracks the current render generation for cancellation and progress.
///
/// Incrementing the generation signals all in-flight rows to stop early,
/// so a superseding viewport change can abandon a stale frame. The progress
/// counters let a shell display a progress bar.
#[derive(Debug)]
pub struct RenderCancel {
    generation: AtomicU64,
    progress_done: AtomicUsize,
    progress_total: AtomicUsize,
}

impl RenderCancel {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            progress_done: AtomicUsize::new(0),
            progress_total: AtomicUsize::new(0),
        }
    }

    /// Cancel the current render by advancing the generation.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Read the current generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn reset_progress(&self, total: usize) {
        self.progress_total.store(total, Ordering::Relaxed);
        self.progress_done.store(0, Ordering::Relaxed);
    }

    fn inc_progress(&self) {
        self.progress_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current progress as `(done, total)` rows.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.progress_done.load(Ordering::Relaxed),
            self.progress_total.load(Ordering::Relaxed),
        )
    }
}

impl Default for RenderCancel {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Frame rendering
// ---------------------------------------------------------------------------

/// Statistics from a cancellable render.
#[derive(Debug, Clone)]
pub struct RenderStats {
    /// Rows actually written to the raster.
    pub rows_rendered: usize,
    /// Whether the render was abandoned before completing.
    pub cancelled: bool,
    pub elapsed: Duration,
}

/// Render one full frame, synchronously.
///
/// Scans the raster in row-major order; for each pixel, maps it through the
/// viewport transform, runs the escape-time loop with the palette's
/// iteration bound, and writes the resolved color. Writes each pixel
/// exactly once and touches nothing else. A zero-dimension raster is a
/// no-op, not an error.
pub fn render<R: RasterTarget + ?Sized>(
    raster: &mut R,
    viewport: &ViewportState,
    palette: &Palette,
) {
    let (width, height) = (raster.width(), raster.height());
    if width == 0 || height == 0 {
        return;
    }
    let max_iter = palette.max_iterations();
    debug!(width, height, max_iter, "starting frame render");
    let start = Instant::now();

    for py in 0..height {
        for px in 0..width {
            let point = viewport.pixel_to_point(px, py, width, height);
            let count = iterations(point.x, point.y, max_iter);
            raster.set_pixel(px, py, palette.color_for(count));
        }
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        width, height, "frame render complete"
    );
}

/// Render one frame with row-parallel iteration and cooperative cancellation.
///
/// Iteration counts are computed per row on the Rayon pool; each row checks
/// the cancel generation before starting, so a [`RenderCancel::cancel`] call
/// from another thread abandons the remaining rows. Completed rows are then
/// written to the raster sequentially in row-major order, which keeps the
/// single-threaded [`RasterTarget`] contract and the write order
/// deterministic. Rows skipped by cancellation are left untouched.
///
/// Pixel output for an uncancelled frame is identical to [`render`].
pub fn render_cancellable<R: RasterTarget + ?Sized>(
    raster: &mut R,
    viewport: &ViewportState,
    palette: &Palette,
    cancel: &RenderCancel,
) -> RenderStats {
    let (width, height) = (raster.width(), raster.height());
    let start = Instant::now();
    if width == 0 || height == 0 {
        return RenderStats {
            rows_rendered: 0,
            cancelled: false,
            elapsed: start.elapsed(),
        };
    }

    let max_iter = palette.max_iterations();
    let gen = cancel.generation();
    cancel.reset_progress(height as usize);
    debug!(width, height, max_iter, "starting cancellable render");

    let rows: Vec<Option<Vec<u32>>> = (0..height)
        .into_par_iter()
        .map(|py| {
            if cancel.generation() != gen {
                return None;
            }
            let mut counts = Vec::with_capacity(width as usize);
            for px in 0..width {
                let point = viewport.pixel_to_point(px, py, width, height);
                counts.push(iterations(point.x, point.y, max_iter));
            }
            cancel.inc_progress();
            Some(counts)
        })
        .collect();

    let mut rows_rendered = 0;
    for (py, row) in rows.iter().enumerate() {
        if let Some(counts) = row {
            for (px, &count) in counts.iter().enumerate() {
                raster.set_pixel(px as u32, py as u32, palette.color_for(count));
            }
            rows_rendered += 1;
        }
    }

    let cancelled = cancel.generation() != gen;
    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis() as u64,
        rows_rendered, cancelled, "cancellable render finished"
    );

    RenderStats {
        rows_rendered,
        cancelled,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::palette::generate_gradient;
    use crate::raster::Framebuffer;

    fn small_palette() -> Palette {
        generate_gradient(Color::WHITE, Color::BLACK, 65).unwrap()
    }

    #[test]
    fn zero_dimension_raster_is_a_noop() {
        let palette = small_palette();
        let vp = ViewportState::default();

        let mut empty = Framebuffer::new(0, 16);
        render(&mut empty, &vp, &palette);

        let stats = render_cancellable(&mut empty, &vp, &palette, &RenderCancel::new());
        assert_eq!(stats.rows_rendered, 0);
        assert!(!stats.cancelled);
    }

    #[test]
    fn every_pixel_is_written_exactly_once() {
        struct CountingRaster {
            writes: Vec<u32>,
        }
        impl RasterTarget for CountingRaster {
            fn width(&self) -> u32 {
                8
            }
            fn height(&self) -> u32 {
                6
            }
            fn set_pixel(&mut self, x: u32, y: u32, _color: Color) {
                self.writes[(y * 8 + x) as usize] += 1;
            }
        }

        let mut raster = CountingRaster {
            writes: vec![0; 48],
        };
        render(&mut raster, &ViewportState::default(), &small_palette());
        assert!(raster.writes.iter().all(|&n| n == 1));
    }

    #[test]
    fn cancellable_render_matches_sync_render() {
        let palette = small_palette();
        let vp = ViewportState::default().zoom_at(30, 20, 64, 48, true);

        let mut sync_fb = Framebuffer::new(64, 48);
        render(&mut sync_fb, &vp, &palette);

        let mut par_fb = Framebuffer::new(64, 48);
        let stats = render_cancellable(&mut par_fb, &vp, &palette, &RenderCancel::new());

        assert!(!stats.cancelled);
        assert_eq!(stats.rows_rendered, 48);
        assert_eq!(sync_fb.as_rgba(), par_fb.as_rgba());
    }

    #[test]
    fn render_is_deterministic() {
        let palette = small_palette();
        let vp = ViewportState::default();

        let mut a = Framebuffer::new(40, 30);
        let mut b = Framebuffer::new(40, 30);
        render(&mut a, &vp, &palette);
        render(&mut b, &vp, &palette);
        assert_eq!(a.as_rgba(), b.as_rgba());
    }

    #[test]
    fn cancellation_skips_remaining_rows() {
        // A cancel raced against a heavy render. Cancellation is cooperative,
        // so only assert the invariants when it actually lands in time.
        let palette = generate_gradient(Color::WHITE, Color::BLACK, 50_001).unwrap();
        let cancel = std::sync::Arc::new(RenderCancel::new());
        let mut fb = Framebuffer::new(256, 256);

        let canceller = std::sync::Arc::clone(&cancel);
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(5));
            canceller.cancel();
        });

        let stats = render_cancellable(&mut fb, &ViewportState::default(), &palette, &cancel);
        handle.join().unwrap();

        if stats.cancelled {
            assert!(
                stats.rows_rendered < 256,
                "a cancelled render must leave rows unwritten"
            );
        }
    }

    #[test]
    fn progress_reaches_total_on_completion() {
        let palette = small_palette();
        let cancel = RenderCancel::new();
        let mut fb = Framebuffer::new(32, 24);

        render_cancellable(&mut fb, &ViewportState::default(), &palette, &cancel);
        assert_eq!(cancel.progress(), (24, 24));
    }
}
