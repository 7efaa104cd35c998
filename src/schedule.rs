// Render-loop lifecycle: Idle until the first schedule, Running while the
// frame callback keeps rescheduling itself, Stopped once the page tears
// down. Stopped is terminal.
//
// `LoopControl` is the owned cancellation handle: the frame callback asks
// it whether to proceed each cycle instead of relying on implicit
// environment cleanup. It also tallies ticks and renders so the
// tick-before-render ordering stays checkable.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct LoopControl {
    state: LoopState,
    ticks: u64,
    renders: u64,
}

impl LoopControl {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            ticks: 0,
            renders: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Idle -> Running. Returns whether the transition happened; a second
    /// call (or a call after `stop`) does nothing.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            true
        } else {
            false
        }
    }

    /// Gate for one frame cycle. Counts the tick and reports whether the
    /// frame should run; false once stopped, so the callback simply does
    /// not reschedule.
    pub fn begin_tick(&mut self) -> bool {
        if self.state == LoopState::Running {
            self.ticks += 1;
            true
        } else {
            false
        }
    }

    /// Record the render that follows a tick. Renders never outnumber
    /// ticks: a stray call without a preceding tick is ignored.
    pub fn end_render(&mut self) {
        if self.renders < self.ticks {
            self.renders += 1;
        }
    }

    /// Running|Idle -> Stopped, terminal. The next `begin_tick` returns
    /// false and the loop winds down.
    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl Default for LoopControl {
    fn default() -> Self {
        Self::new()
    }
}
