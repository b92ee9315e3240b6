#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pomodoro/")]

//! # bubbletea-pomodoro
//!
//! A Pomodoro timer widget for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The widget follows the Elm Architecture pattern with `update()` and
//! `view()` methods: embed it in your model, forward messages to it, and
//! print what it renders. It cycles between working and resting phases on
//! its own (a configurable number of work phases, each followed by a short
//! rest, then a long rest, repeating indefinitely) while the host stays in
//! control through three key-driven operations: start work, start a rest,
//! and pause/resume.
//!
//! ## Features
//!
//! - **Self-driving cycle** with a one-second tick loop that survives
//!   pauses and manual phase changes without double-counting
//! - **Audio cues** on phase entry through an injected [`CuePlayer`], with a
//!   terminal-bell default and a silent player for tests and headless hosts
//! - **Statistics** for display: completed cycles, completed work phases,
//!   and total time worked
//! - **Type-safe key bindings** with help text, customizable per instance
//! - **Theming support** through lipgloss styles with light/dark adaptive
//!   defaults
//!
//! ## Quick Start
//!
//! Add the crate to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bubbletea-pomodoro = "0.1"
//! bubbletea-rs = "0.0.7"
//! ```
//!
//! Then embed the widget in a bubbletea-rs model:
//!
//! ```rust
//! use bubbletea_pomodoro::{Config, Pomodoro};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     pomodoro: Pomodoro,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         // 25 minutes work, 5/15 minute rests, long rest every 4th cycle.
//!         let mut pomodoro = Pomodoro::new(Config::default());
//!         let cmd = pomodoro.start_work();
//!         (Self { pomodoro }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.pomodoro.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.pomodoro.view()
//!     }
//! }
//! ```
//!
//! ## Key Bindings
//!
//! The default bindings are:
//!
//! - `w`: start (or restart) a work phase
//! - `r`: start a short rest
//! - space: pause/resume (hidden and inert until the first phase begins)
//!
//! Assign a new [`PomodoroKeyMap`] to [`Pomodoro::keymap`] to rebind them.
//!
//! ## Configuration
//!
//! The four timing parameters are validated when a [`Config`] is built, so
//! an invalid setup (a zero duration, a zero cycle count) is rejected before
//! a widget ever exists:
//!
//! ```rust
//! use bubbletea_pomodoro::Config;
//!
//! let custom = Config::new(50 * 60, 10 * 60, 30 * 60, 3);
//! assert!(custom.is_ok());
//! assert!(Config::new(0, 300, 900, 4).is_err());
//! ```
//!
//! With the optional `serde` cargo feature, `Config` and `Phase` can be
//! (de)serialized; deserialized values pass through the same validation.

pub mod config;
pub mod cue;
pub mod key;
pub mod pomodoro;

pub use config::{Config, ConfigError};
pub use cue::{Cue, CuePlayer, Silent, TerminalBell};
pub use pomodoro::{
    format_hms, Model as Pomodoro, Phase, PomodoroKeyMap, Styles, TickMsg as PomodoroTickMsg,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pomodoro::prelude::*;
///
/// let timer = Pomodoro::new(Config::default()).with_player(Silent);
/// assert_eq!(timer.phase(), Phase::Idle);
/// ```
pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::cue::{Cue, CuePlayer, Silent, TerminalBell};
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::pomodoro::{
        format_hms, Model as Pomodoro, Phase, PomodoroKeyMap, Styles,
        TickMsg as PomodoroTickMsg,
    };
}
