//! Smooths over differences in how terminals report keys.
//!
//! Shift+Tab becomes `BackTab` (keeping any other modifier such as Alt),
//! release events are dropped everywhere, and on Windows auto-repeat is
//! dropped as well so holding a shortcut does not fire it repeatedly.
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardNormalizer {
    drop_repeats: bool,
}

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self {
            drop_repeats: cfg!(windows),
        }
    }

    pub fn normalize(&self, evt: Event) -> Option<Event> {
        let Event::Key(mut key) = evt else {
            return Some(evt);
        };
        match key.kind {
            KeyEventKind::Release => return None,
            KeyEventKind::Repeat if self.drop_repeats => return None,
            _ => {}
        }
        if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
            key.code = KeyCode::BackTab;
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
        Some(Event::Key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn alt_shift_tab_becomes_alt_backtab() {
        let norm = KeyboardNormalizer::new();
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT | KeyModifiers::ALT);
        let Some(Event::Key(k)) = norm.normalize(Event::Key(key)) else {
            panic!("expected key event");
        };
        assert_eq!(k.code, KeyCode::BackTab);
        assert_eq!(k.modifiers, KeyModifiers::ALT);
    }

    #[test]
    fn release_is_dropped() {
        let norm = KeyboardNormalizer::new();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(norm.normalize(Event::Key(key)).is_none());
    }

    #[test]
    fn repeat_kept_when_not_filtering() {
        let norm = KeyboardNormalizer::default();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Repeat;
        assert!(norm.normalize(Event::Key(key)).is_some());
        assert!(norm.normalize(Event::Resize(10, 20)).is_some());
    }
}
