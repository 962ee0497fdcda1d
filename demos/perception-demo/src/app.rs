//! Demo application state
//!
//! Explicit state driving a pure render function. All key handling
//! mutates this struct and nothing else; age clamping goes through
//! `Age::saturating_from` in exactly one place.

use aion_core::{Age, Model};
use aion_locale::Locale;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Everything the demo knows between two frames.
pub struct App {
    pub age: Age,
    pub model: Model,
    pub locale: Locale,
    /// Digits typed so far for direct age entry, committed on Enter.
    pub entry: Option<u32>,
    pub show_about: bool,
    pub quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            age: Age::saturating_from(25),
            model: Model::SubjectiveTime,
            locale: Locale::En,
            entry: None,
            show_about: false,
            quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Left => self.age = self.age.saturating_sub(1),
            KeyCode::Right => self.age = self.age.saturating_add(1),
            KeyCode::PageDown => self.age = self.age.saturating_sub(10),
            KeyCode::PageUp => self.age = self.age.saturating_add(10),
            KeyCode::Char(c @ '0'..='9') => self.push_digit(c),
            KeyCode::Enter => self.commit_entry(),
            KeyCode::Esc => self.entry = None,
            KeyCode::Tab | KeyCode::Char('m') => self.model = self.model.toggled(),
            KeyCode::Char('l') => self.locale = self.locale.toggled(),
            KeyCode::Char('a') => self.show_about = !self.show_about,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Append one typed digit. The buffer stops growing at three digits,
    /// which already covers every value the clamp can distinguish.
    fn push_digit(&mut self, digit: char) {
        let d = digit as u32 - '0' as u32;
        self.entry = Some(match self.entry {
            Some(n) if n < 100 => n * 10 + d,
            Some(n) => n,
            None => d,
        });
    }

    /// Commit the typed buffer, clamped into the age domain.
    /// An empty buffer leaves the age untouched.
    fn commit_entry(&mut self) {
        if let Some(n) = self.entry.take() {
            self.age = Age::saturating_from(n as i64);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_steppers_clamp_at_bounds() {
        let mut app = App::new();
        app.age = Age::MAX;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.age, Age::MAX);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.age, Age::MAX);

        app.age = Age::MIN;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.age, Age::MIN);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.age, Age::MIN);
    }

    #[test]
    fn test_numeric_entry_commits_clamped() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Char('9')); // ignored, buffer is full
        assert_eq!(app.entry, Some(999));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.age, Age::MAX);
        assert_eq!(app.entry, None);

        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.age, Age::MIN);
    }

    #[test]
    fn test_escape_cancels_entry() {
        let mut app = App::new();
        let before = app.age;
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.age, before);
    }

    #[test]
    fn test_toggles() {
        let mut app = App::new();
        assert_eq!(app.model, Model::SubjectiveTime);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.model, Model::RealTime);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.model, Model::SubjectiveTime);

        assert_eq!(app.locale, Locale::En);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.locale, Locale::Es);

        assert!(!app.show_about);
        press(&mut app, KeyCode::Char('a'));
        assert!(app.show_about);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.quit);
    }
}
