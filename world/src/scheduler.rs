/// Pursuer speed curve mapping the difficulty level to moves per second.
///
/// The table is monotonically non-decreasing; levels beyond the last entry
/// clamp to it, so the pursuer's pace tops out rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedCurve {
    moves_per_second: [f32; 16],
}

impl SpeedCurve {
    /// Creates a speed curve from an explicit moves-per-second table.
    #[must_use]
    pub const fn new(moves_per_second: [f32; 16]) -> Self {
        Self { moves_per_second }
    }

    /// Moves per second granted to the pursuer at the provided level.
    #[must_use]
    pub fn moves_per_second(&self, level: u32) -> f32 {
        let last = self.moves_per_second.len() - 1;
        let index = (level as usize).min(last);
        self.moves_per_second[index]
    }
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self::new([
            1.0, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 7.0, 9.0, 10.0, 11.0, 12.0, 14.0, 17.0, 20.0, 30.0,
        ])
    }
}

/// Tick counters gating player movement, pursuer movement, and level-ups.
///
/// All cadence state lives here as plain data: the scheduler counts ticks,
/// answers "is this move due", and never touches a wall clock. Real-time
/// pacing belongs to whoever calls [`crate::Game::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scheduler {
    player_timer: u32,
    pursuer_timer: u32,
    level_timer: u32,
    level: u32,
}

impl Scheduler {
    /// Creates a scheduler with all timers at zero and level zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current difficulty level.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Reports whether a periodic player move is due this tick.
    #[must_use]
    pub const fn player_due(&self, player_moving_rate: u32) -> bool {
        self.player_timer > player_moving_rate
    }

    /// Reports whether a pursuer move is due this tick.
    ///
    /// The pursuer is due once its timer exceeds `frame_rate` divided by the
    /// curve's moves-per-second entry for the current level.
    #[must_use]
    pub fn pursuer_due(&self, curve: &SpeedCurve, frame_rate: u32) -> bool {
        self.pursuer_timer as f32 > frame_rate as f32 / curve.moves_per_second(self.level)
    }

    /// Zeroes the player timer after a move fires or a key-down edge.
    pub fn reset_player_timer(&mut self) {
        self.player_timer = 0;
    }

    /// Zeroes the pursuer timer after a pursuer move fires.
    pub fn reset_pursuer_timer(&mut self) {
        self.pursuer_timer = 0;
    }

    /// Advances all timers by one tick and resolves a pending level-up.
    ///
    /// Counters saturate: a timer left unreset for the full `u32` range
    /// stays due instead of wrapping back below its gate.
    pub fn advance(&mut self, ghost_level_rate: u32) {
        self.player_timer = self.player_timer.saturating_add(1);
        self.pursuer_timer = self.pursuer_timer.saturating_add(1);
        self.level_timer = self.level_timer.saturating_add(1);
        if self.level_timer > ghost_level_rate {
            self.level_timer = 0;
            self.level = self.level.saturating_add(1);
        }
    }
}
