use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the first tick.
    pub elapsed: f32,
    /// Seconds since the previous tick; 0 on the first.
    pub dt: f32,
}

/// Render-loop clock. Starts `Idle`, becomes `Running` on the first tick
/// and stays there; there is no stop state.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Option<Instant>,
    last: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: None,
            last: None,
        }
    }

    pub fn state(&self) -> LoopState {
        if self.start.is_some() {
            LoopState::Running
        } else {
            LoopState::Idle
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let start = *self.start.get_or_insert(now);
        let dt = self
            .last
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        FrameTime {
            elapsed: (now - start).as_secs_f32(),
            dt,
        }
    }
}
