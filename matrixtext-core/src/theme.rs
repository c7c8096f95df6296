//! Boot-time theme initialisation.
//!
//! The host UI runtime is passed in explicitly rather than discovered through
//! a global, so the step runs only when a caller asks for it.

use tracing::{debug, instrument};

/// UI runtime handle able to toggle dark mode.
pub trait ThemeHost {
    /// Enables dark mode when `dark` is `true`, light mode otherwise.
    fn set_dark(&mut self, dark: bool);
}

/// Forces the host UI into light mode.
///
/// Returns `true` when a host was present and updated, `false` when no host
/// is available (for example when running headless).
///
/// # Examples
/// ```
/// use matrixtext_core::theme::{ThemeHost, force_light_mode};
///
/// struct Ui { dark: bool }
///
/// impl ThemeHost for Ui {
///     fn set_dark(&mut self, dark: bool) { self.dark = dark; }
/// }
///
/// let mut ui = Ui { dark: true };
/// assert!(force_light_mode(Some(&mut ui)));
/// assert!(!ui.dark);
/// assert!(!force_light_mode(None));
/// ```
#[instrument(name = "core.force_light_mode", skip(host), fields(host_present = host.is_some()))]
pub fn force_light_mode(host: Option<&mut dyn ThemeHost>) -> bool {
    let Some(host) = host else {
        debug!("no UI host present, skipping theme initialisation");
        return false;
    };
    host.set_dark(false);
    true
}
