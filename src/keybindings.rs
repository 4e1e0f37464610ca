use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;

/// A key plus the exact modifier set that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn of(key: &KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl"),
            (KeyModifiers::ALT, "Alt"),
            (KeyModifiers::SHIFT, "Shift"),
        ] {
            if self.mods.contains(flag) {
                write!(f, "{name}+")?;
            }
        }
        match self.code {
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            KeyCode::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Key-to-action table for the host.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    by_key: HashMap<KeyCombo, Action>,
    // insertion order, for listings
    order: Vec<(KeyCombo, Action)>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock desktop bindings.
    pub fn desktop() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.bind(KeyCombo::ctrl('q'), Quit);
        kb.bind(KeyCombo::alt(KeyCode::Tab), CycleNextWindow);
        // Shift+Tab is normalized to BackTab; some terminals keep the shift bit
        kb.bind(KeyCombo::alt(KeyCode::BackTab), CyclePrevWindow);
        kb.bind(
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::ALT | KeyModifiers::SHIFT),
            CyclePrevWindow,
        );
        kb.bind(KeyCombo::alt(KeyCode::Enter), LaunchTerminal);
        kb.bind(KeyCombo::alt(KeyCode::Left), WorkspacePrev);
        kb.bind(KeyCombo::alt(KeyCode::Right), WorkspaceNext);
        kb.bind(KeyCombo::ctrl('w'), CloseWindow);
        kb.bind(KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE), CloseWindow);
        kb.bind(KeyCombo::alt(KeyCode::Char('m')), ToggleMaximize);
        kb.bind(KeyCombo::alt(KeyCode::Char('n')), MinimizeWindow);
        kb.bind(KeyCombo::alt(KeyCode::Char('t')), ToggleTheme);
        for (index, digit) in ('1'..='9').enumerate() {
            kb.bind(KeyCombo::alt(KeyCode::Char(digit)), SwitchWorkspace(index));
        }
        kb
    }

    /// Bind `combo` to `action`, replacing whatever it was bound to before.
    pub fn bind(&mut self, combo: KeyCombo, action: Action) {
        if let Some(previous) = self.by_key.insert(combo, action) {
            tracing::debug!(%combo, %previous, %action, "key rebound");
            self.order.retain(|(c, _)| *c != combo);
        }
        self.order.push((combo, action));
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        self.by_key.get(&KeyCombo::of(key)).copied()
    }

    /// Display strings for every combo bound to `action`, in binding order.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.order
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(combo, _)| combo.to_string())
            .collect()
    }
}
