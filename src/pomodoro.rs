//! A Pomodoro timer widget for bubbletea-rs applications.
//!
//! The widget cycles between working and resting phases: a fixed number of
//! work phases, each followed by a short rest, then a long rest, forever.
//! It keeps the countdown for the current phase, plays an audio cue on every
//! phase entry, and tracks statistics (completed cycles, completed work
//! phases, total seconds worked) for display.
//!
//! Ticking follows the usual bubbletea pattern: the widget schedules a
//! [`TickMsg`] one second ahead whenever it is running, and each accepted
//! tick schedules the next. Messages carry the widget's instance id and a
//! monotonically increasing tag, so stale ticks left over from a pause or a
//! manual phase change are rejected instead of double-counting.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pomodoro::{Config, Phase, Pomodoro, Silent};
//!
//! let mut timer = Pomodoro::new(Config::default()).with_player(Silent);
//! assert_eq!(timer.phase(), Phase::Idle);
//!
//! // The "Work" button: enters the Working phase and starts the countdown.
//! let _cmd = timer.start_work();
//! assert_eq!(timer.phase(), Phase::Working);
//! assert_eq!(timer.remaining_secs(), 25 * 60);
//! ```
//!
//! # bubbletea-rs Integration
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
//!         let mut pomodoro = Pomodoro::new(Config::default());
//!         let cmd = pomodoro.start_work();
//!         (Self { pomodoro }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Forwards ticks and the w/r/space key bindings.
//!         self.pomodoro.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.pomodoro.view()
//!     }
//! }
//! ```

use crate::config::Config;
use crate::cue::{Cue, CuePlayer, TerminalBell};
use crate::key::{self, KeyMap};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Internal ID management for widget instances.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// How often the countdown advances. One tick is one second of phase time.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Formats a second count as `HH:MM:SS`.
///
/// Hours are not capped, so long totals such as an accumulated worked time
/// stay readable.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pomodoro::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(1500), "00:25:00");
/// assert_eq!(format_hms(3661), "01:01:01");
/// ```
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// The timer's current mode.
///
/// Exactly one phase holds at any time. `Idle` is the state before the first
/// work phase; the tick-driven cycle never returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Waiting for the first "work" action; the countdown is not running.
    #[default]
    Idle,
    /// Counting down a work phase.
    Working,
    /// Counting down a short rest between work phases.
    ShortRest,
    /// Counting down the long rest that ends a full cycle.
    LongRest,
}

impl Phase {
    /// Returns true for both rest phases.
    pub fn is_rest(&self) -> bool {
        matches!(self, Phase::ShortRest | Phase::LongRest)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Working => write!(f, "working"),
            Phase::ShortRest => write!(f, "short rest"),
            Phase::LongRest => write!(f, "long rest"),
        }
    }
}

/// Message sent once per second while the timer is running.
///
/// Ticks are filtered by `id` so several widgets can coexist, and by an
/// internal `tag` so ticks scheduled before a pause, resume, or manual phase
/// change cannot advance the countdown twice.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The instance the tick was scheduled for.
    pub id: i64,
    /// Scheduling generation; stale generations are rejected.
    tag: i64,
}

/// Key bindings for the widget's three controls.
///
/// The bindings stand in for the Work / Rest / Pause-Play buttons of a
/// graphical pomodoro: `w` forces a work phase, `r` forces a short rest, and
/// space pauses or resumes. The toggle binding starts out disabled and is
/// enabled on the first phase entry, mirroring a pause button that is hidden
/// until there is something to pause.
#[derive(Debug, Clone)]
pub struct PomodoroKeyMap {
    /// Starts (or restarts) a work phase. Default: `w`.
    pub work: key::Binding,
    /// Starts a short rest. Default: `r`.
    pub rest: key::Binding,
    /// Pauses or resumes the countdown. Default: space. Disabled while Idle.
    pub toggle: key::Binding,
}

impl Default for PomodoroKeyMap {
    fn default() -> Self {
        let mut toggle =
            key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "pause/resume");
        // Nothing to pause before the first work phase.
        toggle.set_enabled(false);
        Self {
            work: key::Binding::new(vec![KeyCode::Char('w')]).with_help("w", "work"),
            rest: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "rest"),
            toggle,
        }
    }
}

impl KeyMap for PomodoroKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.work, &self.rest, &self.toggle]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.work, &self.rest], vec![&self.toggle]]
    }
}

/// Lipgloss styles for the widget's view.
///
/// Every element of the rendered output has its own style so hosts can
/// re-theme the widget by assigning to [`Model::styles`].
#[derive(Debug, Clone)]
pub struct Styles {
    /// The status line while working.
    pub status_working: Style,
    /// The status line while resting.
    pub status_resting: Style,
    /// The status line while idle.
    pub status_idle: Style,
    /// The countdown display.
    pub time: Style,
    /// The statistics line.
    pub stats: Style,
    /// Key names in the help line.
    pub help_key: Style,
    /// Key descriptions in the help line.
    pub help_desc: Style,
    /// The separator between help entries.
    pub help_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });

        Self {
            status_working: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#C1330E",
                    Dark: "#FF6347",
                })
                .bold(true),
            status_resting: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1C7C2D",
                    Dark: "#43BF6D",
                })
                .bold(true),
            status_idle: key_style.clone(),
            time: Style::new().bold(true),
            stats: desc_style.clone(),
            help_key: key_style,
            help_desc: desc_style.clone(),
            help_separator: desc_style,
        }
    }
}

/// The pomodoro timer widget.
///
/// Owns all timer state and mutates it only through the three control
/// operations ([`start_work`](Model::start_work),
/// [`start_rest`](Model::start_rest), [`toggle_running`](Model::toggle_running))
/// and the tick handler, so every transition is a single atomic step.
///
/// The cycle the tick handler produces is
/// `Work → (ShortRest → Work) × (cycles−1) → LongRest → Work → …`, repeating
/// until the widget is dropped. The manual operations may force any phase at
/// any time, restarting that phase's countdown.
#[derive(Clone)]
pub struct Model {
    /// Key bindings for the three controls. Replaceable by the host.
    pub keymap: PomodoroKeyMap,
    /// Styles for the rendered view. Replaceable by the host.
    pub styles: Styles,

    config: Config,
    phase: Phase,
    remaining_secs: u64,
    running: bool,
    short_rests_left: u32,
    completed_long_cycles: u32,
    completed_work_phases: u32,
    total_worked_secs: u64,
    player: Arc<dyn CuePlayer>,
    id: i64,
    tag: i64,
}

impl Model {
    /// Creates an idle widget with the given configuration.
    ///
    /// The countdown does not run until [`start_work`](Model::start_work) or
    /// [`start_rest`](Model::start_rest) is called. Cues go to the
    /// [`TerminalBell`] player unless replaced with
    /// [`with_player`](Model::with_player).
    pub fn new(config: Config) -> Self {
        Self {
            keymap: PomodoroKeyMap::default(),
            styles: Styles::default(),
            config,
            phase: Phase::Idle,
            remaining_secs: 0,
            running: false,
            short_rests_left: config.cycles_before_long_rest() - 1,
            completed_long_cycles: 0,
            completed_work_phases: 0,
            total_worked_secs: 0,
            player: Arc::new(TerminalBell),
            id: next_id(),
            tag: 0,
        }
    }

    /// Replaces the cue player (builder pattern).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pomodoro::{Config, Pomodoro, Silent};
    ///
    /// let timer = Pomodoro::new(Config::default()).with_player(Silent);
    /// ```
    pub fn with_player<P: CuePlayer + 'static>(mut self, player: P) -> Self {
        self.player = Arc::new(player);
        self
    }

    /// Returns the widget's unique instance id, used to route tick messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The configuration supplied at construction.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the countdown is currently advancing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left in the current phase.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Number of long rests entered so far.
    pub fn completed_long_cycles(&self) -> u32 {
        self.completed_long_cycles
    }

    /// Number of work phases completed so far.
    pub fn completed_work_phases(&self) -> u32 {
        self.completed_work_phases
    }

    /// Total seconds spent working while the countdown was running.
    pub fn total_worked_secs(&self) -> u64 {
        self.total_worked_secs
    }

    /// Enters the Working phase and starts the countdown.
    ///
    /// Callable in any phase; an in-progress phase is abandoned and its
    /// countdown restarted from the full work duration. Plays the start cue
    /// and returns the command scheduling the next tick.
    pub fn start_work(&mut self) -> Cmd {
        self.enter_work();
        self.tick()
    }

    /// Enters a rest phase and starts the countdown.
    ///
    /// A long rest also closes out the current cycle: the short-rest budget
    /// is refilled and the completed-cycle counter advances. Plays the
    /// finish cue and returns the command scheduling the next tick.
    pub fn start_rest(&mut self, long: bool) -> Cmd {
        self.enter_rest(long);
        self.tick()
    }

    /// Pauses or resumes the countdown.
    ///
    /// Does nothing while Idle, where there is nothing to pause. Resuming
    /// returns a fresh tick command; pausing returns `None` and lets the
    /// in-flight tick be rejected, which stops the tick loop.
    pub fn toggle_running(&mut self) -> Option<Cmd> {
        if self.phase == Phase::Idle {
            return None;
        }
        self.running = !self.running;
        if self.running {
            // Invalidate any tick scheduled before the pause; a stale one
            // arriving after resume would advance the countdown twice.
            self.tag += 1;
            Some(self.tick())
        } else {
            None
        }
    }

    fn enter_work(&mut self) {
        self.phase = Phase::Working;
        self.remaining_secs = self.config.work_secs();
        self.running = true;
        self.tag += 1;
        self.keymap.toggle.set_enabled(true);
        self.player.play(Cue::Start);
    }

    fn enter_rest(&mut self, long: bool) {
        self.phase = if long { Phase::LongRest } else { Phase::ShortRest };
        self.remaining_secs = if long {
            self.config.long_rest_secs()
        } else {
            self.config.short_rest_secs()
        };
        self.running = true;
        self.tag += 1;
        self.keymap.toggle.set_enabled(true);
        if long {
            self.short_rests_left = self.config.cycles_before_long_rest() - 1;
            self.completed_long_cycles += 1;
        }
        self.player.play(Cue::Finish);
    }

    /// Advances the countdown by one second and runs the transition rule
    /// when the current phase reaches zero.
    fn advance(&mut self) {
        if self.phase == Phase::Working {
            self.total_worked_secs += 1;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.tag += 1;
        if self.remaining_secs > 0 {
            return;
        }
        match self.phase {
            Phase::Working => {
                self.completed_work_phases += 1;
                if self.short_rests_left > 0 {
                    self.short_rests_left -= 1;
                    self.enter_rest(false);
                } else {
                    self.enter_rest(true);
                }
            }
            Phase::ShortRest | Phase::LongRest => self.enter_work(),
            // Unreachable through the message path: ticks are only accepted
            // while running, and Idle never runs.
            Phase::Idle => {}
        }
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Processes messages and updates the widget state.
    ///
    /// Handles two kinds of message:
    ///
    /// - [`KeyMsg`]: runs the matching control operation from
    ///   [`Model::keymap`].
    /// - [`TickMsg`]: advances the countdown and schedules the next tick.
    ///   Ticks for another instance, ticks with a stale tag, and ticks
    ///   arriving while paused are ignored.
    ///
    /// Everything else is ignored and returns `None`.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.work.matches(key_msg) {
                return Some(self.start_work());
            }
            if self.keymap.rest.matches(key_msg) {
                return Some(self.start_rest(false));
            }
            if self.keymap.toggle.matches(key_msg) {
                return self.toggle_running();
            }
            return None;
        }

        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if !self.running || tick_msg.id != self.id {
                return None;
            }
            // A stale tag means the tick was scheduled before a pause,
            // resume, or manual phase change. Rejecting it keeps the
            // countdown at one tick per second.
            if tick_msg.tag != self.tag {
                return None;
            }
            self.advance();
            return Some(self.tick());
        }

        None
    }

    /// Renders the widget: status line, countdown, statistics, and the help
    /// line for the active key bindings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pomodoro::{Config, Pomodoro, Silent};
    ///
    /// let mut timer = Pomodoro::new(Config::default()).with_player(Silent);
    /// timer.start_work();
    /// let view = timer.view();
    /// assert!(view.contains("00:25:00"));
    /// ```
    pub fn view(&self) -> String {
        let status = match self.phase {
            Phase::Idle => self.styles.status_idle.render("Ready to work"),
            Phase::Working => self.styles.status_working.render("You are working"),
            Phase::ShortRest | Phase::LongRest => {
                self.styles.status_resting.render("You are resting")
            }
        };
        let time = self.styles.time.render(&format_hms(self.remaining_secs));
        let stats = self.styles.stats.render(&format!(
            "cycles {}  worked {}  pomodoros {}",
            self.completed_long_cycles,
            format_hms(self.total_worked_secs),
            self.completed_work_phases,
        ));
        format!("{}\n{}\n{}\n{}", status, time, stats, self.help_view())
    }

    fn help_view(&self) -> String {
        let separator = self.styles.help_separator.render(" • ");
        let mut out = String::new();
        for binding in self.keymap.short_help() {
            if !binding.enabled() {
                continue;
            }
            if !out.is_empty() {
                out.push_str(&separator);
            }
            out.push_str(&self.styles.help_key.render(&binding.help().key));
            out.push(' ');
            out.push_str(&self.styles.help_desc.render(&binding.help().desc));
        }
        out
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("remaining_secs", &self.remaining_secs)
            .field("running", &self.running)
            .field("short_rests_left", &self.short_rests_left)
            .field("completed_long_cycles", &self.completed_long_cycles)
            .field("completed_work_phases", &self.completed_work_phases)
            .field("total_worked_secs", &self.total_worked_secs)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl BubbleTeaModel for Model {
    /// Creates an idle widget with the classic configuration for standalone
    /// use. No command is returned; the countdown starts on the first
    /// control operation.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Config::default()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::Silent;
    use crossterm::event::KeyModifiers;
    use lipgloss_extras::lipgloss::strip_ansi;
    use std::sync::Mutex;

    /// Records every cue it is asked to play.
    #[derive(Default)]
    struct Recorder(Mutex<Vec<Cue>>);

    impl CuePlayer for Recorder {
        fn play(&self, cue: Cue) {
            self.0.lock().unwrap().push(cue);
        }
    }

    fn test_config() -> Config {
        Config::new(1500, 300, 900, 4).unwrap()
    }

    fn silent_model(config: Config) -> Model {
        Model::new(config).with_player(Silent)
    }

    /// Delivers one valid tick, the way the runtime would.
    fn deliver_tick(model: &mut Model) {
        let msg = TickMsg {
            id: model.id,
            tag: model.tag,
        };
        model.update(Box::new(msg));
    }

    fn deliver_ticks(model: &mut Model, n: u64) {
        for _ in 0..n {
            deliver_tick(model);
        }
    }

    fn press(model: &mut Model, c: char) -> Option<Cmd> {
        model.update(Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn new_model_is_idle() {
        let model = silent_model(test_config());
        assert_eq!(model.phase(), Phase::Idle);
        assert!(!model.is_running());
        assert_eq!(model.remaining_secs(), 0);
        assert_eq!(model.completed_work_phases(), 0);
        assert_eq!(model.completed_long_cycles(), 0);
        assert_eq!(model.total_worked_secs(), 0);
    }

    #[test]
    fn start_work_enters_working_at_full_duration() {
        let mut model = silent_model(test_config());
        let _cmd = model.start_work();
        assert_eq!(model.phase(), Phase::Working);
        assert_eq!(model.remaining_secs(), 1500);
        assert!(model.is_running());
    }

    #[test]
    fn full_cycle_scenario() {
        let mut model = silent_model(test_config());
        model.start_work();

        // First work phase runs down into a short rest.
        deliver_ticks(&mut model, 1500);
        assert_eq!(model.phase(), Phase::ShortRest);
        assert_eq!(model.remaining_secs(), 300);
        assert_eq!(model.completed_work_phases(), 1);
        assert_eq!(model.short_rests_left, 2);

        // Rest runs down back into work.
        deliver_ticks(&mut model, 300);
        assert_eq!(model.phase(), Phase::Working);
        assert_eq!(model.remaining_secs(), 1500);

        // Second and third work phases also end in short rests.
        for expected_left in [1, 0] {
            deliver_ticks(&mut model, 1500);
            assert_eq!(model.phase(), Phase::ShortRest);
            assert_eq!(model.short_rests_left, expected_left);
            deliver_ticks(&mut model, 300);
            assert_eq!(model.phase(), Phase::Working);
        }

        // The fourth work phase ends the cycle with a long rest.
        deliver_ticks(&mut model, 1500);
        assert_eq!(model.phase(), Phase::LongRest);
        assert_eq!(model.remaining_secs(), 900);
        assert_eq!(model.completed_work_phases(), 4);
        assert_eq!(model.completed_long_cycles(), 1);
        assert_eq!(model.short_rests_left, 3);

        // And the long rest starts the next cycle's work phase.
        deliver_ticks(&mut model, 900);
        assert_eq!(model.phase(), Phase::Working);
        assert_eq!(model.remaining_secs(), 1500);
        assert_eq!(model.total_worked_secs(), 4 * 1500);
    }

    #[test]
    fn worked_seconds_accrue_only_while_working_and_running() {
        let mut model = silent_model(test_config());
        model.start_work();
        deliver_ticks(&mut model, 10);
        assert_eq!(model.total_worked_secs(), 10);

        // Paused: the pending tick is rejected and nothing accrues.
        model.toggle_running();
        let stale = TickMsg {
            id: model.id,
            tag: model.tag,
        };
        model.update(Box::new(stale));
        assert_eq!(model.total_worked_secs(), 10);
        assert_eq!(model.remaining_secs(), 1490);

        model.toggle_running();
        deliver_tick(&mut model);
        assert_eq!(model.total_worked_secs(), 11);

        // Resting ticks do not count as work.
        model.start_rest(false);
        deliver_ticks(&mut model, 50);
        assert_eq!(model.total_worked_secs(), 11);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut model = silent_model(test_config());
        model.start_work();
        deliver_ticks(&mut model, 7);

        let before = (
            model.phase(),
            model.remaining_secs(),
            model.total_worked_secs(),
            model.completed_work_phases(),
        );
        model.toggle_running();
        assert!(!model.is_running());
        model.toggle_running();
        assert!(model.is_running());
        let after = (
            model.phase(),
            model.remaining_secs(),
            model.total_worked_secs(),
            model.completed_work_phases(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_while_idle_is_a_noop() {
        let mut model = silent_model(test_config());
        assert!(model.toggle_running().is_none());
        assert_eq!(model.phase(), Phase::Idle);
        assert!(!model.is_running());
        assert_eq!(model.remaining_secs(), 0);
    }

    #[test]
    fn manual_long_rest_closes_the_cycle() {
        let mut model = silent_model(test_config());
        model.start_work();
        deliver_ticks(&mut model, 1500); // into the first short rest
        assert_eq!(model.short_rests_left, 2);

        model.start_rest(true);
        assert_eq!(model.phase(), Phase::LongRest);
        assert_eq!(model.remaining_secs(), 900);
        assert_eq!(model.completed_long_cycles(), 1);
        assert_eq!(model.short_rests_left, 3);
    }

    #[test]
    fn manual_start_work_forces_a_restart() {
        let mut model = silent_model(test_config());
        model.start_work();
        deliver_ticks(&mut model, 1500); // into the first short rest
        assert_eq!(model.phase(), Phase::ShortRest);

        model.start_work();
        assert_eq!(model.phase(), Phase::Working);
        assert_eq!(model.remaining_secs(), 1500);
        // The abandoned rest does not count as a completed work phase.
        assert_eq!(model.completed_work_phases(), 1);
    }

    #[test]
    fn foreign_and_stale_ticks_are_rejected() {
        let mut model = silent_model(test_config());
        model.start_work();

        let foreign = TickMsg {
            id: model.id + 999,
            tag: model.tag,
        };
        assert!(model.update(Box::new(foreign)).is_none());
        assert_eq!(model.remaining_secs(), 1500);

        let stale = TickMsg {
            id: model.id,
            tag: model.tag,
        };
        model.toggle_running();
        model.toggle_running(); // pause + resume bumps the tag
        assert!(model.update(Box::new(stale)).is_none());
        assert_eq!(model.remaining_secs(), 1500);

        deliver_tick(&mut model);
        assert_eq!(model.remaining_secs(), 1499);
    }

    #[test]
    fn cues_follow_phase_entries() {
        let recorder = Arc::new(Recorder::default());
        let mut model = Model::new(Config::new(2, 1, 1, 2).unwrap());
        model.player = recorder.clone();

        model.start_work();
        deliver_ticks(&mut model, 2); // work ends, short rest begins
        deliver_ticks(&mut model, 1); // rest ends, work begins

        let cues = recorder.0.lock().unwrap().clone();
        assert_eq!(cues, vec![Cue::Start, Cue::Finish, Cue::Start]);
    }

    #[test]
    fn keymap_drives_the_three_operations() {
        let mut model = silent_model(test_config());

        assert!(press(&mut model, 'w').is_some());
        assert_eq!(model.phase(), Phase::Working);

        assert!(press(&mut model, ' ').is_none());
        assert!(!model.is_running());
        assert!(press(&mut model, ' ').is_some());
        assert!(model.is_running());

        assert!(press(&mut model, 'r').is_some());
        assert_eq!(model.phase(), Phase::ShortRest);

        // Unbound keys are ignored.
        assert!(press(&mut model, 'x').is_none());
        assert_eq!(model.phase(), Phase::ShortRest);
    }

    #[test]
    fn toggle_key_is_dead_while_idle() {
        let mut model = silent_model(test_config());
        assert!(press(&mut model, ' ').is_none());
        assert_eq!(model.phase(), Phase::Idle);
        assert!(!model.is_running());
    }

    #[test]
    fn view_shows_countdown_stats_and_help() {
        let mut model = silent_model(test_config());

        // Idle: the pause binding is hidden.
        let idle_view = strip_ansi(&model.view());
        assert!(idle_view.contains("Ready to work"));
        assert!(!idle_view.contains("pause/resume"));

        model.start_work();
        deliver_ticks(&mut model, 60);
        let view = strip_ansi(&model.view());
        assert!(view.contains("You are working"));
        assert!(view.contains("00:24:00"));
        assert!(view.contains("worked 00:01:00"));
        assert!(view.contains("pomodoros 0"));
        assert!(view.contains("pause/resume"));

        model.start_rest(false);
        let view = strip_ansi(&model.view());
        assert!(view.contains("You are resting"));
        assert!(view.contains("00:05:00"));
    }

    #[test]
    fn remaining_is_reset_on_every_phase_entry() {
        let mut model = silent_model(Config::new(3, 2, 4, 2).unwrap());
        model.start_work();
        assert_eq!(model.remaining_secs(), 3);
        deliver_ticks(&mut model, 3);
        assert_eq!((model.phase(), model.remaining_secs()), (Phase::ShortRest, 2));
        deliver_ticks(&mut model, 2);
        assert_eq!((model.phase(), model.remaining_secs()), (Phase::Working, 3));
        deliver_ticks(&mut model, 3);
        assert_eq!((model.phase(), model.remaining_secs()), (Phase::LongRest, 4));
    }

    #[test]
    fn single_cycle_config_always_rests_long() {
        let mut model = silent_model(Config::new(5, 1, 2, 1).unwrap());
        model.start_work();
        deliver_ticks(&mut model, 5);
        assert_eq!(model.phase(), Phase::LongRest);
        assert_eq!(model.completed_long_cycles(), 1);
        assert_eq!(model.short_rests_left, 0);
    }

    #[test]
    fn phase_display_names() {
        assert_eq!(Phase::Idle.to_string(), "idle");
        assert_eq!(Phase::Working.to_string(), "working");
        assert_eq!(Phase::ShortRest.to_string(), "short rest");
        assert_eq!(Phase::LongRest.to_string(), "long rest");
        assert!(Phase::ShortRest.is_rest());
        assert!(Phase::LongRest.is_rest());
        assert!(!Phase::Working.is_rest());
    }

    #[test]
    fn format_hms_pads_and_rolls_over() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(60), "00:01:00");
        assert_eq!(format_hms(3599), "00:59:59");
        assert_eq!(format_hms(3600), "01:00:00");
        assert_eq!(format_hms(90061), "25:01:01");
    }
}
