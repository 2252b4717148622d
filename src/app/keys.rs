//! Keyboard mapping from Zellij key events to application events.
//!
//! The input box is always focused, so every printable character is text.
//! Commands therefore live on keys that never produce text:
//!
//! - `Enter`: analyze
//! - `Alt+Enter`: newline
//! - `Ctrl+u`: clear input
//! - `Backspace`: delete last character
//! - `Up` / `Down`: scroll the result card
//! - `Esc`: hide the plugin

use super::handler::Event;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an [`Event`], or `None` when the key is unbound.
#[must_use]
pub fn map_key(key: &KeyWithModifier) -> Option<Event> {
    let alt = key.has_modifiers(&[KeyModifier::Alt]);
    let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
    let chorded = alt || ctrl || key.has_modifiers(&[KeyModifier::Super]);

    tracing::trace!(bare_key = ?key.bare_key, alt, ctrl, "key event");

    Some(match key.bare_key {
        BareKey::Enter if alt => Event::Newline,
        BareKey::Enter if !chorded => Event::Analyze,
        BareKey::Char('u') if ctrl => Event::ClearInput,
        BareKey::Char(c) if !chorded => Event::Char(c),
        BareKey::Backspace => Event::Backspace,
        BareKey::Up => Event::ScrollUp,
        BareKey::Down => Event::ScrollDown,
        BareKey::Esc => Event::CloseFocus,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn key(bare_key: BareKey, modifiers: &[KeyModifier]) -> KeyWithModifier {
        KeyWithModifier {
            bare_key,
            key_modifiers: modifiers.iter().cloned().collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn enter_analyzes_and_alt_enter_breaks_line() {
        assert_eq!(map_key(&key(BareKey::Enter, &[])), Some(Event::Analyze));
        assert_eq!(
            map_key(&key(BareKey::Enter, &[KeyModifier::Alt])),
            Some(Event::Newline)
        );
        assert_eq!(map_key(&key(BareKey::Enter, &[KeyModifier::Ctrl])), None);
    }

    #[test]
    fn printable_characters_are_text() {
        assert_eq!(map_key(&key(BareKey::Char('q'), &[])), Some(Event::Char('q')));
        assert_eq!(map_key(&key(BareKey::Char('機'), &[])), Some(Event::Char('機')));
        assert_eq!(
            map_key(&key(BareKey::Char('A'), &[KeyModifier::Shift])),
            Some(Event::Char('A'))
        );
    }

    #[test]
    fn control_chords_are_commands() {
        assert_eq!(
            map_key(&key(BareKey::Char('u'), &[KeyModifier::Ctrl])),
            Some(Event::ClearInput)
        );
        assert_eq!(map_key(&key(BareKey::Char('x'), &[KeyModifier::Ctrl])), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(map_key(&key(BareKey::Backspace, &[])), Some(Event::Backspace));
        assert_eq!(map_key(&key(BareKey::Up, &[])), Some(Event::ScrollUp));
        assert_eq!(map_key(&key(BareKey::Down, &[])), Some(Event::ScrollDown));
        assert_eq!(map_key(&key(BareKey::Esc, &[])), Some(Event::CloseFocus));
        assert_eq!(map_key(&key(BareKey::Tab, &[])), None);
    }
}
