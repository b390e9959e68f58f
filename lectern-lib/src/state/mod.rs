//! Application state shared by the dashboard shell.
//!
//! There is no global store: [`AppState::init`] builds the state from
//! configuration at startup and the owner passes it by reference.

mod auth;
mod ui;

pub use auth::{AuthState, User};
pub use ui::{CountrySelection, SidebarState, ThemeMode};

use log::{debug, info};

use crate::config::LecternConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthState,
    pub sidebar: SidebarState,
    pub theme: ThemeMode,
    pub country: CountrySelection,
}

impl AppState {
    pub fn init(config: &LecternConfig) -> Self {
        debug!(
            "initializing app state: theme={} sidebar_collapsed={}",
            config.theme, config.sidebar_collapsed
        );
        Self {
            auth: AuthState::default(),
            sidebar: SidebarState::new(config.sidebar_collapsed),
            theme: config.theme,
            country: CountrySelection::new(config.default_country.as_deref()),
        }
    }

    /// Sign in, replacing any previous session.
    pub fn sign_in(&mut self, user: User) {
        info!("signed in as {} ({})", user.name, user.id);
        self.auth.sign_in(user);
    }

    /// Clear session-scoped state on logout.
    ///
    /// The theme survives; it is a preference, not session data.
    pub fn teardown(&mut self) {
        if let Some(user) = self.auth.sign_out() {
            info!("signed out {} ({})", user.name, user.id);
        }
        self.sidebar.collapse_all();
        self.country.clear();
    }
}
