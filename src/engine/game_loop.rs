/// Game loop timing and control
///
/// Fixed timestep loop: the character logic always sees the same elapsed
/// time per update, while frames are presented as fast as the window allows.
use std::time::{Duration, Instant};

/// Duration of one fixed update (~1/60 second)
pub const FIXED_TIMESTEP: Duration = Duration::from_micros(16_667);

/// Maximum number of updates per frame to prevent spiral of death
const MAX_UPDATES_PER_FRAME: u32 = 5;

/// Timing handed to each fixed update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTime {
    /// Time covered by this update
    pub elapsed: Duration,
    /// Simulated time since the loop started
    pub total: Duration,
}

impl GameTime {
    pub fn new(elapsed: Duration, total: Duration) -> Self {
        Self { elapsed, total }
    }

    /// A single update of `elapsed` with no history, handy for driving logic by hand
    #[allow(dead_code)]
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self::new(elapsed, elapsed)
    }
}

/// Game loop timing state
#[derive(Debug)]
pub struct GameLoop {
    /// Real time not yet consumed by fixed updates
    accumulator: Duration,

    last_frame_time: Instant,

    paused: bool,

    frame_count: u64,

    update_count: u64,

    /// Sum of every fixed update handed out so far
    simulated: Duration,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            update_count: 0,
            simulated: Duration::ZERO,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulate(frame_time)
    }

    fn accumulate(&mut self, frame_time: Duration) -> u32 {
        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP && updates < MAX_UPDATES_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP;
            updates += 1;
        }

        // Drop the backlog we refused to simulate
        if updates == MAX_UPDATES_PER_FRAME && self.accumulator >= FIXED_TIMESTEP {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        updates
    }

    /// Advance the simulated clock and return the timing for one fixed update
    pub fn next_update(&mut self) -> GameTime {
        self.update_count += 1;
        self.simulated += FIXED_TIMESTEP;
        GameTime::new(FIXED_TIMESTEP, self.simulated)
    }

    #[allow(dead_code)]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[allow(dead_code)]
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
