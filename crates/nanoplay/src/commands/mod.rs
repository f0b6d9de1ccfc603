pub mod init;
pub mod list;
pub mod resize;
pub mod session;

use nanoplay_core::config::{self, Config};
use nanoplay_core::{APP_TITLE, Desktop, Language, Session, WindowFilter, log};

use crate::platform::{self, PlatformDesktop};

/// Settings shared by every command that touches windows.
pub struct Context {
    pub config: Config,
    pub language: Language,
}

impl Context {
    /// Loads the config file, starts logging, and resolves the language.
    pub fn load(lang_override: Option<String>) -> Self {
        let config = config::load();
        log::init(&config.logging);
        let language = Language::resolve(lang_override.as_deref(), &config.language);
        Self { config, language }
    }

    /// The enumeration filter, which always hides NanoPlay itself.
    pub fn filter(&self) -> WindowFilter {
        WindowFilter::from_config(&self.config.filter).excluding_own_title(APP_TITLE)
    }

    /// Opens a session on the real desktop and fills the window list.
    ///
    /// Exits the process if the platform is unsupported or the OS
    /// refuses to enumerate windows. The console title is left alone;
    /// only the interactive session renames its own window.
    pub fn open_session(&self) -> Session<PlatformDesktop> {
        let desktop = platform::require_desktop();
        let mut session = Session::new(desktop, self.filter(), &self.config.resize);
        refresh_or_exit(&mut session);
        session
    }
}

fn refresh_or_exit<D: Desktop>(session: &mut Session<D>) {
    if let Err(e) = session.refresh() {
        nanoplay_core::log_error!("enumeration failed: {e}");
        eprintln!("Error: could not enumerate windows: {e}");
        std::process::exit(1);
    }
}
