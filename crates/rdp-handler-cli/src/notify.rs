//! User-facing notifications.
//!
//! When the handler is started by a link click there is usually nobody
//! watching a console, so on Windows messages are also shown as dialogs
//! unless `--no-dialog` is given.

const DIALOG_TITLE: &str = "Remote Desktop Protocol Handler";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    dialogs: bool,
}

impl Notifier {
    pub fn new(dialogs_requested: bool) -> Self {
        Self {
            dialogs: dialogs_requested && cfg!(target_os = "windows"),
        }
    }

    pub fn info(&self, message: &str) {
        println!("{message}");
        self.show(message, Level::Info);
    }

    pub fn warning(&self, message: &str) {
        eprintln!("Warning: {message}");
        self.show(message, Level::Warning);
    }

    /// Show an error dialog. The console message is left to the caller's
    /// error return.
    pub fn error(&self, message: &str) {
        self.show(message, Level::Error);
    }

    fn show(&self, message: &str, level: Level) {
        if self.dialogs {
            show_dialog(message, level);
        }
    }
}

#[cfg(target_os = "windows")]
fn show_dialog(message: &str, level: Level) {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        MB_ICONERROR, MB_ICONINFORMATION, MB_ICONWARNING, MB_OK, MessageBoxW,
    };
    use windows::core::HSTRING;

    let icon = match level {
        Level::Info => MB_ICONINFORMATION,
        Level::Warning => MB_ICONWARNING,
        Level::Error => MB_ICONERROR,
    };
    let text = HSTRING::from(message);
    let caption = HSTRING::from(DIALOG_TITLE);
    // SAFETY: MessageBoxW blocks until dismissed; both strings outlive the call.
    unsafe {
        MessageBoxW(HWND::default(), &text, &caption, MB_OK | icon);
    }
}

#[cfg(not(target_os = "windows"))]
fn show_dialog(message: &str, level: Level) {
    tracing::debug!(?level, message, title = DIALOG_TITLE, "Dialogs unavailable");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogs_disabled_on_request() {
        assert!(!Notifier::new(false).dialogs);
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_dialogs_never_enabled_off_windows() {
        assert!(!Notifier::new(true).dialogs);
    }
}
