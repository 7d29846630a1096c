//! Recording matrix device for display-loop tests

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use ledsign_hal::{Color, DeviceError, LedMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Init,
    On,
    Off,
    Clear,
    Shift(Color),
    Commit(usize),
}

/// Mock matrix that records every call
///
/// Clones share the same log, so a test can keep one handle while the
/// controller owns the other.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockMatrix {
    log: Arc<Mutex<Vec<Op>>>,
    /// Fail `commit_row` once this many rows have been committed
    fail_after_commits: Option<usize>,
}

impl MockMatrix {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_after(commits: usize) -> Self {
        Self {
            fail_after_commits: Some(commits),
            ..Self::default()
        }
    }

    fn record(&self, op: Op) {
        self.log.lock().unwrap().push(op);
    }

    pub(crate) fn ops(&self) -> Vec<Op> {
        self.log.lock().unwrap().clone()
    }

    pub(crate) fn commits(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, Op::Commit(_)))
            .count()
    }

    /// Wait until at least `n` rows were committed
    pub(crate) fn wait_for_commits(&self, n: usize) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if self.commits() >= n {
                return true;
            }
            thread::sleep(Duration::from_millis(1));
        }
        false
    }

    /// Committed rows in order: (row index, colors in shift order)
    pub(crate) fn committed_rows(&self) -> Vec<(usize, Vec<Color>)> {
        let mut rows = Vec::new();
        let mut latch = Vec::new();
        for op in self.ops() {
            match op {
                Op::Shift(color) => latch.push(color),
                Op::Commit(row) => rows.push((row, std::mem::take(&mut latch))),
                _ => {}
            }
        }
        rows
    }
}

impl LedMatrix for MockMatrix {
    fn init(&mut self) -> Result<(), DeviceError> {
        self.record(Op::Init);
        Ok(())
    }

    fn display_on(&mut self) -> Result<(), DeviceError> {
        self.record(Op::On);
        Ok(())
    }

    fn display_off(&mut self) -> Result<(), DeviceError> {
        self.record(Op::Off);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DeviceError> {
        self.record(Op::Clear);
        Ok(())
    }

    fn shift_color(&mut self, color: Color) -> Result<(), DeviceError> {
        self.record(Op::Shift(color));
        Ok(())
    }

    fn commit_row(&mut self, row: usize) -> Result<(), DeviceError> {
        if let Some(limit) = self.fail_after_commits {
            if self.commits() >= limit {
                return Err(DeviceError::Disconnected);
            }
        }
        self.record(Op::Commit(row));
        Ok(())
    }
}
