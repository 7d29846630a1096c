//! Refresh loop bodies
//!
//! These run on the refresh thread. Each loop checks the run flag once
//! per frame and never interrupts a frame half way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use ledsign_hal::{DeviceError, LedMatrix};
use log::debug;

use crate::config::SignConfig;
use crate::error::SignError;
use crate::framebuffer::FrameBuffer;
use crate::raster::DotArray;

/// Device plus the framebuffer it shows
///
/// Owned by the controller while idle and moved onto the refresh thread
/// while a loop runs.
#[derive(Debug)]
pub struct Surface<D> {
    pub device: D,
    pub frame: FrameBuffer,
}

/// Loop pacing taken from [`SignConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTiming {
    /// Pause after each frame
    pub frame_interval: Duration,
    /// Frames per scroll column step
    pub frames_per_step: u16,
}

impl From<&SignConfig> for RefreshTiming {
    fn from(config: &SignConfig) -> Self {
        Self {
            frame_interval: config.frame_interval(),
            frames_per_step: config.scroll_frames_per_step.max(1),
        }
    }
}

impl RefreshTiming {
    fn pause(&self) {
        if !self.frame_interval.is_zero() {
            thread::sleep(self.frame_interval);
        }
    }
}

/// Push one frame, rows and columns low to high
///
/// The row drivers are switched off first; committing a row lights the
/// panel again.
pub fn commit_frame<D: LedMatrix>(device: &mut D, frame: &FrameBuffer) -> Result<(), DeviceError> {
    device.display_off()?;

    for (y, row) in frame.rows().enumerate() {
        for &color in row {
            device.shift_color(color)?;
        }
        device.commit_row(y)?;
    }
    Ok(())
}

/// Push one frame, rows and columns high to low
///
/// Used while scrolling: column 0, where new data comes in, ends up on
/// the right edge of the panel.
pub fn commit_frame_mirrored<D: LedMatrix>(
    device: &mut D,
    frame: &FrameBuffer,
) -> Result<(), DeviceError> {
    for (y, row) in frame.rows().enumerate().rev() {
        for &color in row.iter().rev() {
            device.shift_color(color)?;
        }
        device.commit_row(y)?;
    }
    Ok(())
}

/// Inject source column `col` at column 0 and show it
///
/// Commits `frames_per_step` mirrored frames, then shifts the buffer so
/// the next column has room. Returns `false` if the run flag cleared
/// mid-step.
pub fn scroll_step<D: LedMatrix>(
    surface: &mut Surface<D>,
    source: &DotArray,
    col: usize,
    timing: &RefreshTiming,
    run: &AtomicBool,
) -> Result<bool, SignError> {
    if let Some(column) = source.column(col) {
        surface.frame.set_column(0, column)?;
    }

    for _ in 0..timing.frames_per_step {
        if !run.load(Ordering::SeqCst) {
            return Ok(false);
        }
        commit_frame_mirrored(&mut surface.device, &surface.frame)?;
        timing.pause();
    }

    surface.frame.shift_left();
    Ok(true)
}

/// Static loop: redraw the framebuffer until told to stop
pub fn run_static<D: LedMatrix>(
    surface: &mut Surface<D>,
    timing: &RefreshTiming,
    run: &AtomicBool,
) -> Result<(), SignError> {
    debug!("static refresh loop running");

    while run.load(Ordering::SeqCst) {
        commit_frame(&mut surface.device, &surface.frame)?;
        timing.pause();
    }

    debug!("static refresh loop exiting");
    Ok(())
}

/// Scrolling loop: cycle through the source columns until told to stop
pub fn run_scrolling<D: LedMatrix>(
    surface: &mut Surface<D>,
    source: &DotArray,
    timing: &RefreshTiming,
    run: &AtomicBool,
) -> Result<(), SignError> {
    debug!("scrolling refresh loop running ({} columns)", source.width());

    surface.frame.clear();
    let mut col = 0;
    while run.load(Ordering::SeqCst) && !source.is_empty() {
        if !scroll_step(surface, source, col, timing, run)? {
            break;
        }
        col = (col + 1) % source.width();
    }

    debug!("scrolling refresh loop exiting");
    Ok(())
}
