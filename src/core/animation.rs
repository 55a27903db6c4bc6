/// Run state of an animation-frame loop: whether it may schedule more frames
/// and the id of the frame currently requested from the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopState {
    running: bool,
    pending: Option<i32>,
}

/// Result of [`LoopState::stop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopOutcome {
    /// This call stopped the loop; `cancel` is the frame request to withdraw.
    Stopped { cancel: Option<i32> },
    AlreadyStopped,
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopState {
    pub fn new() -> Self {
        Self {
            running: true,
            pending: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Record a frame request. Ignored once stopped.
    pub fn scheduled(&mut self, id: i32) {
        if self.running {
            self.pending = Some(id);
        }
    }

    /// A requested frame fired. Returns whether it should run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    pub fn stop(&mut self) -> StopOutcome {
        if !self.running {
            return StopOutcome::AlreadyStopped;
        }
        self.running = false;
        StopOutcome::Stopped {
            cancel: self.pending.take(),
        }
    }
}
