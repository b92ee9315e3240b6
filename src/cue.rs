//! Audio cues played on phase transitions.
//!
//! Playback is an injected capability: the widget calls [`CuePlayer::play`]
//! on phase entry and never looks at the result, so hosts can route cues to
//! a sound file, a desktop notification, or nothing at all.
//!
//! ```rust
//! use bubbletea_pomodoro::{Cue, CuePlayer};
//!
//! struct Desktop;
//!
//! impl CuePlayer for Desktop {
//!     fn play(&self, cue: Cue) {
//!         let _ = cue; // hand off to a notification daemon, a sampler, ...
//!     }
//! }
//! ```

use std::io::{self, Write};

/// The two cues the timer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A work phase has begun.
    Start,
    /// A work phase has finished; a rest has begun.
    Finish,
}

/// A fire-and-forget sink for phase-transition cues.
///
/// Implementations must be cheap and non-blocking; `play` is called from the
/// widget's update path.
pub trait CuePlayer: Send + Sync {
    /// Plays the given cue. Failures are the player's problem, not the
    /// timer's.
    fn play(&self, cue: Cue);
}

/// The default player: rings the terminal bell.
///
/// Write errors are swallowed; a timer that cannot beep still keeps time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl CuePlayer for TerminalBell {
    fn play(&self, _cue: Cue) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// A player that does nothing, for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&self, _cue: Cue) {}
}
