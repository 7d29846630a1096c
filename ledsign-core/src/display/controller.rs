//! Display-loop controller
//!
//! Owns the device, the framebuffer and the scroll source, and runs at
//! most one refresh loop on a background thread. While a loop runs the
//! device and framebuffer live on that thread; they come back when the
//! loop is joined.

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use ledsign_hal::{Color, LedMatrix};
use log::{debug, error, info, warn};

use super::refresh::{self, RefreshTiming, Surface};
use super::state::{DisplayMode, DisplayState, Event};
use crate::config::{ConfigError, SignConfig};
use crate::error::SignError;
use crate::font::FontTable;
use crate::framebuffer::FrameBuffer;
use crate::raster::{rasterize, DotArray};

/// How often `stop` checks a bounded join
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// What the sign was last asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentMessage {
    pub text: String,
    pub color: Color,
}

/// `None` if the thread never received the surface
type TaskOutput<D> = Option<(Surface<D>, Result<(), SignError>)>;

/// A running refresh loop
struct RefreshTask<D> {
    mode: DisplayMode,
    run: Arc<AtomicBool>,
    handle: JoinHandle<TaskOutput<D>>,
}

impl<D> RefreshTask<D> {
    /// Wait for the thread, re-raising its panic on this thread
    fn join(self) -> TaskOutput<D> {
        match self.handle.join() {
            Ok(output) => output,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// Check if `stop` or `drop` already asked this loop to exit
    fn stop_requested(&self) -> bool {
        !self.run.load(Ordering::SeqCst)
    }

    /// Poll until the thread exits or `timeout` passes
    fn wait_finished(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while !self.handle.is_finished() {
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(STOP_POLL_INTERVAL);
        }
        true
    }
}

/// Sign controller
pub struct SignController<D>
where
    D: LedMatrix + Send + 'static,
{
    config: SignConfig,
    font: FontTable,
    state: DisplayState,
    /// `None` while a refresh task holds it
    surface: Option<Surface<D>>,
    task: Option<RefreshTask<D>>,
    scroll_source: Option<Arc<DotArray>>,
    message: Option<CurrentMessage>,
}

impl<D> SignController<D>
where
    D: LedMatrix + Send + 'static,
{
    /// Create a controller using the built-in ASCII font
    pub fn new(device: D, config: SignConfig) -> Result<Self, SignError> {
        Self::with_font(device, config, FontTable::ascii())
    }

    /// Create a controller with a custom font
    ///
    /// Validates the configuration, checks the font height against the
    /// display height and initializes the device.
    pub fn with_font(mut device: D, config: SignConfig, font: FontTable) -> Result<Self, SignError> {
        config.validate()?;
        if font.height() != config.height {
            return Err(ConfigError::FontHeight {
                display: config.height,
                font: font.height(),
            }
            .into());
        }

        device.init()?;
        debug!("sign initialized ({}x{})", config.width, config.height);

        let frame = FrameBuffer::new(config.width, config.height);
        Ok(Self {
            config,
            font,
            state: DisplayState::Idle,
            surface: Some(Surface { device, frame }),
            task: None,
            scroll_source: None,
            message: None,
        })
    }

    /// Current state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Last message put on the sign, cleared by `stop`
    pub fn message(&self) -> Option<&CurrentMessage> {
        self.message.as_ref()
    }

    /// The framebuffer, readable only while idle
    pub fn framebuffer(&self) -> Option<&FrameBuffer> {
        self.surface.as_ref().map(|surface| &surface.frame)
    }

    /// Source the scrolling loop walks through
    pub fn scroll_source(&self) -> Option<&DotArray> {
        self.scroll_source.as_deref()
    }

    pub fn config(&self) -> &SignConfig {
        &self.config
    }

    pub fn font(&self) -> &FontTable {
        &self.font
    }

    /// Rasterize `text` and center it in the framebuffer
    ///
    /// Text wider than the display fails with `ContentTooWide` and leaves
    /// the framebuffer alone, but the rendered text is still kept as the
    /// scroll source so the caller can start scrolling it instead.
    pub fn put_static(&mut self, text: &str, color: Color) -> Result<(), SignError> {
        self.reap()?;
        let dots = rasterize(&self.font, text, color)?;
        let surface = self.idle_surface()?;

        let max = surface.frame.width();
        if dots.width() > max {
            let width = dots.width();
            self.scroll_source = Some(Arc::new(dots));
            debug!("static text {} columns wide, kept as scroll source", width);
            return Err(SignError::ContentTooWide { width, max });
        }

        surface.frame.clear();
        let offset = surface.frame.place_centered(&dots)?;
        debug!("static text placed at column {}", offset);

        self.scroll_source = Some(Arc::new(dots));
        self.message = Some(CurrentMessage {
            text: text.to_owned(),
            color,
        });
        Ok(())
    }

    /// Rasterize `text` as the scroll source
    ///
    /// Pads the source with blank space so consecutive passes do not run
    /// into each other, and clears the framebuffer.
    pub fn put_scrolling(&mut self, text: &str, color: Color) -> Result<(), SignError> {
        self.reap()?;
        let mut dots = rasterize(&self.font, text, color)?;

        let space = self.font.space_width().unwrap_or(1);
        dots.pad_right(space * self.config.scroll_padding_chars as usize);

        let surface = self.idle_surface()?;
        surface.frame.clear();

        debug!("scroll source {} columns wide", dots.width());
        self.scroll_source = Some(Arc::new(dots));
        self.message = Some(CurrentMessage {
            text: text.to_owned(),
            color,
        });
        Ok(())
    }

    /// Start a refresh loop
    ///
    /// Starting with nothing to show is not an error: the call is logged
    /// and the controller stays idle.
    pub fn start(&mut self, mode: DisplayMode) -> Result<(), SignError> {
        self.reap()?;
        let next = self.state.transition(Event::Start(mode))?;

        let source = match mode {
            DisplayMode::Static => {
                if self.framebuffer().map_or(true, FrameBuffer::is_blank) {
                    warn!("nothing to show, static loop not started");
                    return Ok(());
                }
                None
            }
            DisplayMode::Scrolling => match &self.scroll_source {
                Some(source) if !source.is_empty() => Some(Arc::clone(source)),
                _ => {
                    warn!("no scroll source, scrolling loop not started");
                    return Ok(());
                }
            },
        };

        let builder = thread::Builder::new().name("ledsign-refresh".into());
        self.launch(mode, next, source, builder)
    }

    /// Spawn the refresh thread and hand it the surface
    ///
    /// The surface is sent over only once the thread exists, so a failed
    /// spawn leaves everything as it was.
    fn launch(
        &mut self,
        mode: DisplayMode,
        next: DisplayState,
        source: Option<Arc<DotArray>>,
        builder: thread::Builder,
    ) -> Result<(), SignError> {
        let surface = self.surface.take().ok_or(SignError::AlreadyRunning)?;
        let run = Arc::new(AtomicBool::new(true));
        let timing = RefreshTiming::from(&self.config);
        let (handoff, inbox) = mpsc::sync_channel::<Surface<D>>(1);

        let flag = Arc::clone(&run);
        let spawned = builder.spawn(move || {
            let mut surface = inbox.recv().ok()?;
            let result = match &source {
                Some(source) => refresh::run_scrolling(&mut surface, source, &timing, &flag),
                None => refresh::run_static(&mut surface, &timing, &flag),
            };
            if let Err(e) = &result {
                error!("refresh loop failed: {}", e);
            }
            Some((surface, result))
        });
        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                error!("cannot spawn refresh thread: {}", e);
                self.surface = Some(surface);
                return Err(SignError::ThreadSpawn);
            }
        };

        if let Err(mpsc::SendError(surface)) = handoff.send(surface) {
            error!("refresh thread exited before taking the surface");
            self.surface = Some(surface);
            let _ = handle.join();
            return Err(SignError::ThreadSpawn);
        }

        self.task = Some(RefreshTask { mode, run, handle });
        self.state = next;
        info!("display started ({:?})", mode);
        Ok(())
    }

    /// Stop the refresh loop and blank the device
    ///
    /// The framebuffer keeps its content; only the hardware is cleared.
    /// With `stop_timeout_ms` configured, a loop that does not exit in
    /// time yields `StopTimeout` and stays in place, still counted as
    /// running, until another `stop` joins it and blanks the device.
    pub fn stop(&mut self) -> Result<(), SignError> {
        self.reap()?;
        let next = self.state.transition(Event::Stop)?;

        let result = match self.task.take() {
            Some(task) => {
                task.run.store(false, Ordering::SeqCst);

                if let Some(timeout) = self.config.stop_timeout() {
                    if !task.wait_finished(timeout) {
                        warn!("refresh loop still running after {:?}", timeout);
                        self.task = Some(task);
                        return Err(SignError::StopTimeout);
                    }
                }

                self.collect(task)
            }
            None => Ok(()),
        };

        self.state = next;
        self.message = None;

        let cleared = match self.surface.as_mut() {
            Some(surface) => surface.device.clear(),
            None => Ok(()),
        };

        result?;
        cleared?;
        info!("display stopped");
        Ok(())
    }

    /// Check on the refresh loop
    ///
    /// If the loop died on a device error, the error is returned once and
    /// the controller is idle again.
    pub fn poll(&mut self) -> Result<DisplayState, SignError> {
        self.reap()?;
        Ok(self.state)
    }

    /// Blank the device while no loop is running
    pub fn clear_hardware(&mut self) -> Result<(), SignError> {
        self.reap()?;
        self.idle_surface()?.device.clear()?;
        Ok(())
    }

    /// Stop any running loop and hand back the device
    pub fn release(mut self) -> Result<D, SignError> {
        if self.state.is_active() {
            self.stop()?;
        }
        let surface = self.surface.take().ok_or(SignError::AlreadyRunning)?;
        Ok(surface.device)
    }

    fn idle_surface(&mut self) -> Result<&mut Surface<D>, SignError> {
        if self.state.is_active() {
            return Err(SignError::AlreadyRunning);
        }
        self.surface.as_mut().ok_or(SignError::AlreadyRunning)
    }

    /// Collect a refresh task that exited without being asked to
    ///
    /// A task whose stop timed out is left for the next `stop`.
    fn reap(&mut self) -> Result<(), SignError> {
        let finished = self
            .task
            .as_ref()
            .is_some_and(|task| !task.stop_requested() && task.handle.is_finished());
        if !finished {
            return Ok(());
        }

        let Some(task) = self.task.take() else {
            return Ok(());
        };
        let mode = task.mode;
        let result = self.collect(task);
        self.state = self.state.transition(Event::TaskExited)?;
        self.message = None;

        debug!("{:?} loop exited on its own", mode);
        result
    }

    /// Join a finished task and take the surface back
    fn collect(&mut self, task: RefreshTask<D>) -> Result<(), SignError> {
        let mode = task.mode;
        match task.join() {
            Some((surface, result)) => {
                self.surface = Some(surface);
                debug!("{:?} loop joined", mode);
                result
            }
            None => Err(SignError::ThreadSpawn),
        }
    }
}

/// Stops the loop and blanks the device
///
/// Waits at most `stop_timeout_ms` when it is set. A loop still running
/// after that is detached: it exits on its own at the end of its frame
/// and the device is dropped without being cleared.
impl<D> Drop for SignController<D>
where
    D: LedMatrix + Send + 'static,
{
    fn drop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        task.run.store(false, Ordering::SeqCst);

        if let Some(timeout) = self.config.stop_timeout() {
            if !task.wait_finished(timeout) {
                warn!("refresh loop still running after {:?}, detaching it", timeout);
                return;
            }
        }
        if let Ok(Some((mut surface, _))) = task.handle.join() {
            let _ = surface.device.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::mock::{MockMatrix, Op};
    use crate::font::Glyph;
    use ledsign_hal::DeviceError;

    const R: Color = Color::Red;
    const B: Color = Color::Blank;

    fn ab_font() -> FontTable {
        FontTable::new(3)
            .unwrap()
            .with_glyph('A', Glyph::new(3, &[0b101, 0b111, 0b101]).unwrap())
            .unwrap()
            .with_glyph('B', Glyph::new(2, &[0b11, 0b10, 0b11]).unwrap())
            .unwrap()
    }

    fn config(width: usize) -> SignConfig {
        SignConfig {
            frame_interval_us: 200,
            ..SignConfig::with_size(width, 3)
        }
    }

    fn controller(device: MockMatrix) -> SignController<MockMatrix> {
        SignController::with_font(device, config(10), ab_font()).unwrap()
    }

    fn poll_until_error(sign: &mut SignController<MockMatrix>) -> SignError {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Err(e) = sign.poll() {
                return e;
            }
            thread::sleep(Duration::from_millis(1));
        }
        panic!("refresh loop never failed");
    }

    #[test]
    fn test_init_called_once() {
        let device = MockMatrix::new();
        let sign = controller(device.clone());

        assert_eq!(device.ops(), [Op::Init]);
        assert_eq!(sign.state(), DisplayState::Idle);
        assert!(sign.message().is_none());
    }

    #[test]
    fn test_font_height_must_match() {
        let result = SignController::with_font(MockMatrix::new(), SignConfig::default(), ab_font());

        assert!(matches!(
            result,
            Err(SignError::Config(ConfigError::FontHeight {
                display: 8,
                font: 3
            }))
        ));
    }

    #[test]
    fn test_builtin_font_matches_default_config() {
        let sign = SignController::new(MockMatrix::new(), SignConfig::default()).unwrap();
        assert_eq!(sign.font().height(), sign.config().height);
    }

    #[test]
    fn test_put_static_centers() {
        let mut sign = controller(MockMatrix::new());

        sign.put_static("AB", R).unwrap();

        let frame = sign.framebuffer().unwrap();
        assert_eq!(frame.row(0).unwrap(), &[B, B, R, B, R, R, R, B, B, B]);
        assert_eq!(
            sign.message(),
            Some(&CurrentMessage {
                text: "AB".into(),
                color: R
            })
        );
        assert_eq!(sign.scroll_source().map(DotArray::width), Some(5));
    }

    #[test]
    fn test_put_static_too_wide_keeps_scroll_source() {
        let mut sign = SignController::with_font(MockMatrix::new(), config(4), ab_font()).unwrap();

        let result = sign.put_static("AB", R);

        assert_eq!(result, Err(SignError::ContentTooWide { width: 5, max: 4 }));
        assert_eq!(sign.scroll_source().map(DotArray::width), Some(5));
        assert!(sign.framebuffer().unwrap().is_blank());
        assert!(sign.message().is_none());
    }

    #[test]
    fn test_put_static_unsupported_character() {
        let mut sign = controller(MockMatrix::new());

        assert_eq!(sign.put_static("ACB", R), Err(SignError::UnsupportedCharacter('C')));
        assert!(sign.framebuffer().unwrap().is_blank());
    }

    #[test]
    fn test_put_scrolling_pads_and_clears() {
        let mut sign = controller(MockMatrix::new());
        sign.put_static("A", R).unwrap();

        sign.put_scrolling("AB", Color::Green).unwrap();

        // No space glyph in this font: one blank column per padding char
        let source = sign.scroll_source().unwrap();
        assert_eq!(source.width(), 5 + 3);
        assert_eq!(&source.row(0).unwrap()[5..], &[B, B, B]);
        assert!(sign.framebuffer().unwrap().is_blank());
        assert_eq!(sign.message().map(|m| m.color), Some(Color::Green));
    }

    #[test]
    fn test_start_static_and_stop() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());
        sign.put_static("AB", R).unwrap();

        sign.start(DisplayMode::Static).unwrap();
        assert_eq!(sign.state(), DisplayState::Static);
        assert!(device.wait_for_commits(6));

        assert_eq!(sign.start(DisplayMode::Scrolling), Err(SignError::AlreadyRunning));
        assert_eq!(sign.put_static("A", R), Err(SignError::AlreadyRunning));
        assert_eq!(sign.clear_hardware(), Err(SignError::AlreadyRunning));
        assert!(sign.framebuffer().is_none());

        sign.stop().unwrap();

        assert_eq!(sign.state(), DisplayState::Idle);
        assert!(sign.message().is_none());
        assert_eq!(device.ops().last(), Some(&Op::Clear));
        // Hardware cleared, framebuffer kept
        assert!(!sign.framebuffer().unwrap().is_blank());
    }

    #[test]
    fn test_second_static_start_rejected() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());
        sign.put_static("AB", Color::Green).unwrap();
        sign.start(DisplayMode::Static).unwrap();
        assert!(device.wait_for_commits(3));

        assert_eq!(sign.start(DisplayMode::Static), Err(SignError::AlreadyRunning));

        assert_eq!(sign.state(), DisplayState::Static);
        assert_eq!(
            sign.message(),
            Some(&CurrentMessage {
                text: "AB".into(),
                color: Color::Green
            })
        );
        assert_eq!(sign.poll(), Ok(DisplayState::Static));
        sign.stop().unwrap();
    }

    #[test]
    fn test_spawn_failure_keeps_surface() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());
        sign.put_static("AB", R).unwrap();
        let oversized = thread::Builder::new().stack_size(usize::MAX / 2);

        let result = sign.launch(DisplayMode::Static, DisplayState::Static, None, oversized);

        assert_eq!(result, Err(SignError::ThreadSpawn));
        assert!(!SignError::ThreadSpawn.is_recoverable());
        assert_eq!(sign.state(), DisplayState::Idle);
        assert!(!sign.framebuffer().unwrap().is_blank());
        assert_eq!(device.ops(), [Op::Init]);

        // Still usable with a normal thread
        sign.start(DisplayMode::Static).unwrap();
        assert!(device.wait_for_commits(3));
        sign.stop().unwrap();
        assert_eq!(device.ops().last(), Some(&Op::Clear));
    }

    #[test]
    fn test_static_loop_commits_framebuffer() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());
        sign.put_static("AB", R).unwrap();

        sign.start(DisplayMode::Static).unwrap();
        assert!(device.wait_for_commits(3));
        sign.stop().unwrap();

        let rows = device.committed_rows();
        assert_eq!(rows[0], (0, vec![B, B, R, B, R, R, R, B, B, B]));
        assert_eq!(rows[1].0, 1);
        assert_eq!(rows[2].0, 2);
        assert_eq!(device.ops()[1], Op::Off);
    }

    #[test]
    fn test_stop_when_idle() {
        let mut sign = controller(MockMatrix::new());
        assert_eq!(sign.stop(), Err(SignError::NotRunning));
    }

    #[test]
    fn test_start_static_blank_is_noop() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());

        sign.start(DisplayMode::Static).unwrap();

        assert_eq!(sign.state(), DisplayState::Idle);
        assert_eq!(device.ops(), [Op::Init]);
    }

    #[test]
    fn test_start_scrolling_without_source_is_noop() {
        let mut sign = controller(MockMatrix::new());

        sign.start(DisplayMode::Scrolling).unwrap();

        assert_eq!(sign.state(), DisplayState::Idle);
        assert_eq!(sign.stop(), Err(SignError::NotRunning));
    }

    #[test]
    fn test_scrolling_period_shows_message() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());
        sign.put_scrolling("AB", R).unwrap();
        let source = sign.scroll_source().unwrap().clone();

        sign.start(DisplayMode::Scrolling).unwrap();
        assert_eq!(sign.state(), DisplayState::Scrolling);
        assert!(device.wait_for_commits(source.width() * 3));
        sign.stop().unwrap();

        // Mirrored commits shift column 0 last
        let mut injected = vec![Vec::new(); 3];
        for (row, shifted) in device.committed_rows().iter().take(source.width() * 3) {
            injected[*row].push(*shifted.last().unwrap());
        }
        for (row, cells) in injected.iter().enumerate() {
            assert_eq!(cells.as_slice(), source.row(row).unwrap());
        }
        assert!(!device.ops().contains(&Op::Off));
    }

    #[test]
    fn test_device_failure_returns_to_idle() {
        let device = MockMatrix::failing_after(2);
        let mut sign = controller(device.clone());
        sign.put_static("AB", R).unwrap();
        sign.start(DisplayMode::Static).unwrap();

        let err = poll_until_error(&mut sign);

        assert_eq!(err, SignError::Device(DeviceError::Disconnected));
        assert!(!err.is_recoverable());
        assert_eq!(sign.state(), DisplayState::Idle);
        assert!(sign.message().is_none());
        // Reported once
        assert_eq!(sign.poll(), Ok(DisplayState::Idle));
        assert_eq!(sign.stop(), Err(SignError::NotRunning));
    }

    #[test]
    fn test_stop_timeout_then_retry() {
        let device = MockMatrix::new();
        let config = SignConfig {
            frame_interval_us: 200_000,
            stop_timeout_ms: Some(10),
            ..SignConfig::with_size(10, 3)
        };
        let mut sign = SignController::with_font(device.clone(), config, ab_font()).unwrap();
        sign.put_static("AB", R).unwrap();
        sign.start(DisplayMode::Static).unwrap();
        assert!(device.wait_for_commits(3));

        assert_eq!(sign.stop(), Err(SignError::StopTimeout));
        assert_eq!(sign.state(), DisplayState::Static);
        assert_eq!(sign.start(DisplayMode::Static), Err(SignError::AlreadyRunning));

        // Let the loop finish its frame pause and exit
        thread::sleep(Duration::from_millis(400));
        assert_eq!(sign.poll(), Ok(DisplayState::Static));

        assert_eq!(sign.stop(), Ok(()));
        assert_eq!(sign.state(), DisplayState::Idle);
        assert!(sign.message().is_none());
        assert_eq!(device.ops().last(), Some(&Op::Clear));
        assert!(!sign.framebuffer().unwrap().is_blank());
    }

    #[test]
    fn test_stop_retry_while_loop_still_running() {
        let device = MockMatrix::new();
        let config = SignConfig {
            frame_interval_us: 100_000,
            stop_timeout_ms: Some(5),
            ..SignConfig::with_size(10, 3)
        };
        let mut sign = SignController::with_font(device.clone(), config, ab_font()).unwrap();
        sign.put_static("AB", R).unwrap();
        sign.start(DisplayMode::Static).unwrap();
        assert!(device.wait_for_commits(3));

        let result = loop {
            match sign.stop() {
                Err(SignError::StopTimeout) => thread::sleep(Duration::from_millis(5)),
                other => break other,
            }
        };

        assert_eq!(result, Ok(()));
        assert_eq!(sign.state(), DisplayState::Idle);
        assert_eq!(device.ops().last(), Some(&Op::Clear));
    }

    #[test]
    fn test_clear_hardware_when_idle() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());

        sign.clear_hardware().unwrap();

        assert_eq!(device.ops(), [Op::Init, Op::Clear]);
    }

    #[test]
    fn test_release_stops_loop() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());
        sign.put_static("AB", R).unwrap();
        sign.start(DisplayMode::Static).unwrap();
        assert!(device.wait_for_commits(3));

        let released = sign.release().unwrap();

        let commits = released.commits();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(device.commits(), commits);
    }

    #[test]
    fn test_drop_joins_refresh_thread() {
        let device = MockMatrix::new();
        let mut sign = controller(device.clone());
        sign.put_static("AB", R).unwrap();
        sign.start(DisplayMode::Static).unwrap();
        assert!(device.wait_for_commits(3));

        drop(sign);

        let commits = device.commits();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(device.commits(), commits);
        assert_eq!(device.ops().last(), Some(&Op::Clear));
    }

    #[test]
    fn test_drop_honours_stop_timeout() {
        let device = MockMatrix::new();
        let config = SignConfig {
            frame_interval_us: 500_000,
            stop_timeout_ms: Some(5),
            ..SignConfig::with_size(10, 3)
        };
        let mut sign = SignController::with_font(device.clone(), config, ab_font()).unwrap();
        sign.put_static("AB", R).unwrap();
        sign.start(DisplayMode::Static).unwrap();
        assert!(device.wait_for_commits(3));

        let started = Instant::now();
        drop(sign);

        assert!(started.elapsed() < Duration::from_millis(250));
        // Detached loop exits after its pause without clearing
        thread::sleep(Duration::from_millis(700));
        assert_ne!(device.ops().last(), Some(&Op::Clear));
        let commits = device.commits();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(device.commits(), commits);
    }

    struct PanickingMatrix;

    impl LedMatrix for PanickingMatrix {
        fn init(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        fn display_on(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        fn display_off(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        fn clear(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        fn shift_color(&mut self, _color: Color) -> Result<(), DeviceError> {
            Ok(())
        }
        fn commit_row(&mut self, _row: usize) -> Result<(), DeviceError> {
            panic!("row strobe jammed");
        }
    }

    #[test]
    #[should_panic(expected = "row strobe jammed")]
    fn test_refresh_panic_reraised() {
        let mut sign = SignController::with_font(PanickingMatrix, config(10), ab_font()).unwrap();
        sign.put_static("AB", R).unwrap();
        sign.start(DisplayMode::Static).unwrap();

        let _ = sign.stop();
    }
}
