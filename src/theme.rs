//! Light/dark theme flag, its palettes, and change notification.

use crate::surface::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the field for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub dot: Color,
    pub edge: Color,
}

const LIGHT: Palette = Palette {
    background: Color::rgb(248, 250, 252),
    dot: Color::rgb(2, 132, 199),
    edge: Color::rgb(2, 132, 199),
};

const DARK: Palette = Palette {
    background: Color::rgb(15, 23, 42),
    dot: Color::rgb(56, 189, 248),
    edge: Color::rgb(56, 189, 248),
};

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The persisted preference value.
    pub fn as_flag(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

type Listener = Box<dyn FnMut(Theme)>;

/// Owns the current theme and pushes every change to its subscribers.
#[derive(Default)]
pub struct ThemeSwitch {
    current: Theme,
    listeners: Vec<Listener>,
}

impl ThemeSwitch {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: initial,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Registers a listener. It is not called for the current theme, only
    /// for later changes.
    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns whether the theme changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        if theme == self.current {
            return false;
        }
        self.current = theme;
        log::info!("theme switched to {}", theme.as_flag());
        for listener in &mut self.listeners {
            listener(theme);
        }
        true
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::{cell::RefCell, rc::Rc};

    #[rstest]
    #[case(Theme::Light, "light")]
    #[case(Theme::Dark, "dark")]
    fn test_flag_round_trip(#[case] theme: Theme, #[case] flag: &str) {
        assert_eq!(theme.as_flag(), flag);
        assert_eq!(Theme::from_flag(flag), Some(theme));
    }

    #[rstest]
    #[case("")]
    #[case("Dark")]
    #[case("sepia")]
    fn test_unknown_flags_are_rejected(#[case] flag: &str) {
        assert_eq!(Theme::from_flag(flag), None);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette().dot, Theme::Dark.palette().dot);
        assert_ne!(Theme::Light.palette().edge, Theme::Dark.palette().edge);
    }

    #[test]
    fn test_listeners_see_each_change_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut switch = ThemeSwitch::new(Theme::Light);
        let sink = Rc::clone(&seen);
        switch.subscribe(move |theme| sink.borrow_mut().push(theme));

        assert!(!switch.set(Theme::Light));
        assert_eq!(switch.toggle(), Theme::Dark);
        assert!(!switch.set(Theme::Dark));
        assert!(switch.set(Theme::Light));

        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
        assert_eq!(switch.current(), Theme::Light);
    }
}
