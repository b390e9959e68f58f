//! Shell chrome state: sidebar, theme and country picker.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Whether to draw dark, given the host preference.
    pub fn is_dark(self, host_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => host_prefers_dark,
        }
    }

    /// Light to dark to system and back.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" | "auto" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    expanded: BTreeSet<String>,
}

impl SidebarState {
    pub fn new(collapsed: bool) -> Self {
        Self {
            collapsed,
            expanded: BTreeSet::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Open or close a navigation group. Returns the new open state.
    pub fn toggle_group(&mut self, group: &str) -> bool {
        if self.expanded.remove(group) {
            false
        } else {
            self.expanded.insert(group.to_string());
            true
        }
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded.contains(group)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

/// Country picked in the header selector, stored as an ISO 3166 alpha-2 code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySelection {
    code: Option<String>,
}

impl CountrySelection {
    pub fn new(code: Option<&str>) -> Self {
        let mut selection = Self::default();
        if let Some(code) = code {
            selection.select(code);
        }
        selection
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Codes are stored upper-case; blank input clears the selection.
    pub fn select(&mut self, code: &str) {
        let code = code.trim();
        self.code = (!code.is_empty()).then(|| code.to_ascii_uppercase());
    }

    pub fn clear(&mut self) {
        self.code = None;
    }
}
