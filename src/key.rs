//! Type-safe key bindings for the widget's controls.
//!
//! A [`Binding`] pairs one or more key presses with the help text shown for
//! them, and can be disabled so that it neither matches input nor appears in
//! help output. The [`KeyMap`] trait is implemented by keymap structs to
//! expose their bindings to help rendering.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifier keys that must be held along with the code.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text associated with a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short representation of the keys, e.g. `"space"` or `"w"`.
    pub key: String,
    /// What the binding does, e.g. `"pause/resume"`.
    pub desc: String,
}

/// A key binding: the key presses that trigger it, its help text, and an
/// enabled flag.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pomodoro::key::Binding;
/// use crossterm::event::KeyCode;
///
/// let work = Binding::new(vec![KeyCode::Char('w')]).with_help("w", "work");
/// assert_eq!(work.help().key, "w");
/// assert!(work.enabled());
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key presses.
    ///
    /// Accepts anything convertible to [`KeyPress`], so a plain list of
    /// [`KeyCode`]s works for unmodified keys:
    ///
    /// ```rust
    /// use bubbletea_pomodoro::key::Binding;
    /// use crossterm::event::KeyCode;
    ///
    /// let rest = Binding::new(vec![KeyCode::Char('r')]);
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns whether the binding is enabled.
    ///
    /// Disabled bindings never match input and are skipped by help views.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the key message matches one of this binding's presses.
    ///
    /// Always false while the binding is disabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pomodoro::key::Binding;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let toggle = Binding::new(vec![KeyCode::Char(' ')]);
    /// let space = KeyMsg {
    ///     key: KeyCode::Char(' '),
    ///     modifiers: KeyModifiers::NONE,
    /// };
    /// assert!(toggle.matches(&space));
    /// ```
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.disabled {
            return false;
        }
        self.keys
            .iter()
            .any(|press| press.code == msg.key && press.mods == msg.modifiers)
    }
}

/// A trait for keymaps that expose their bindings to help rendering.
///
/// `short_help` returns the essential bindings for a single-line help view;
/// `full_help` groups all bindings into columns for an expanded view.
pub trait KeyMap {
    /// Returns the bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Returns the bindings for the expanded help view, one inner vector per
    /// column of related bindings.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
