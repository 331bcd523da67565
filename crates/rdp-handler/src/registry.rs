//! `rdp://` scheme registration in the per-user Windows registry.
//!
//! Writes `HKCU\Software\Classes\rdp` so that the OS launches
//! `"<exe>" "%1"` when an `rdp://` link is activated.

use std::path::Path;

use crate::config::scheme;
#[cfg(not(target_os = "windows"))]
use crate::error::Error;
use crate::error::Result;

const CLASSES_KEY: &str = r"Software\Classes";

/// Registry path (under HKCU) of the scheme's class key.
pub fn scheme_key_path() -> String {
    format!(r"{CLASSES_KEY}\{}", scheme::NAME)
}

/// Registry path (under HKCU) of the key holding the open command.
pub fn command_key_path() -> String {
    format!(r"{}\shell\open\command", scheme_key_path())
}

/// Command line the OS runs on activation; `%1` is replaced by the URI.
pub fn handler_command_line(exe_path: &Path) -> String {
    format!("\"{}\" \"%1\"", exe_path.display())
}

#[cfg(target_os = "windows")]
mod win {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;

    use windows::Win32::Foundation::ERROR_FILE_NOT_FOUND;
    use windows::Win32::System::Registry::{
        HKEY, HKEY_CURRENT_USER, KEY_WRITE, REG_OPTION_NON_VOLATILE, REG_SZ, RRF_RT_REG_SZ,
        RegCloseKey, RegCreateKeyExW, RegDeleteTreeW, RegGetValueW, RegSetValueExW,
    };
    use windows::core::{HSTRING, PCWSTR};

    use crate::error::{Error, Result};

    /// An open registry key, closed on drop.
    pub struct Key(HKEY);

    impl Key {
        /// Create or open `subkey` under HKCU for writing.
        pub fn create(subkey: &str) -> Result<Self> {
            let hkey_subkey = HSTRING::from(subkey);
            let mut key = HKEY::default();
            // SAFETY: RegCreateKeyExW creates or opens a registry key.
            unsafe {
                RegCreateKeyExW(
                    HKEY_CURRENT_USER,
                    &hkey_subkey,
                    0,
                    None,
                    REG_OPTION_NON_VOLATILE,
                    KEY_WRITE,
                    None,
                    &mut key,
                    None,
                )
                .ok()
                .map_err(|e| {
                    Error::Registry(format!("Failed to create registry key '{subkey}': {e}"))
                })?;
            }
            Ok(Self(key))
        }

        /// Set a REG_SZ value; `None` writes the key's default value.
        pub fn set_string(&self, name: Option<&str>, value: &str) -> Result<()> {
            let wide: Vec<u16> = OsStr::new(value)
                .encode_wide()
                .chain(std::iter::once(0))
                .collect();
            let name_wide: Vec<u16>;
            let pcwstr_name = if let Some(n) = name {
                name_wide = OsStr::new(n)
                    .encode_wide()
                    .chain(std::iter::once(0))
                    .collect();
                PCWSTR::from_raw(name_wide.as_ptr())
            } else {
                PCWSTR::null()
            };
            // SAFETY: RegSetValueExW writes a REG_SZ value. The PCWSTR pointers remain valid
            // for the duration of the call because `name_wide` and `wide` are alive.
            unsafe {
                RegSetValueExW(
                    self.0,
                    pcwstr_name,
                    0,
                    REG_SZ,
                    Some(std::slice::from_raw_parts(
                        wide.as_ptr().cast::<u8>(),
                        wide.len() * 2,
                    )),
                )
                .ok()
                .map_err(|e| Error::Registry(format!("Failed to set registry value: {e}")))?;
            }
            Ok(())
        }
    }

    impl Drop for Key {
        fn drop(&mut self) {
            // SAFETY: RegCloseKey closes the handle opened in `create`.
            unsafe {
                let _ = RegCloseKey(self.0);
            }
        }
    }

    /// Read the default REG_SZ value of `subkey` under HKCU.
    pub fn read_default_string(subkey: &str) -> Result<Option<String>> {
        let subkey_w = HSTRING::from(subkey);

        let mut size: u32 = 0;
        // SAFETY: RegGetValueW with null buffer queries the required size.
        let status = unsafe {
            RegGetValueW(
                HKEY_CURRENT_USER,
                &subkey_w,
                PCWSTR::null(),
                RRF_RT_REG_SZ,
                None,
                None,
                Some(&mut size),
            )
        };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        status
            .ok()
            .map_err(|e| Error::Registry(format!("Failed to query registry value size: {e}")))?;

        let mut buffer = vec![0u16; (size as usize) / 2];
        // SAFETY: RegGetValueW reads the registry value into the provided buffer.
        unsafe {
            RegGetValueW(
                HKEY_CURRENT_USER,
                &subkey_w,
                PCWSTR::null(),
                RRF_RT_REG_SZ,
                None,
                Some(buffer.as_mut_ptr().cast()),
                Some(&mut size),
            )
            .ok()
            .map_err(|e| Error::Registry(format!("Failed to read registry value: {e}")))?;
        }

        // Trim null terminators
        while buffer.last() == Some(&0) {
            buffer.pop();
        }

        String::from_utf16(&buffer)
            .map(Some)
            .map_err(|e| Error::Registry(format!("Invalid UTF-16 in registry value: {e}")))
    }

    /// Delete `subkey` and everything below it. Returns false if it was absent.
    pub fn delete_tree(subkey: &str) -> Result<bool> {
        let subkey_w = HSTRING::from(subkey);
        // SAFETY: RegDeleteTreeW removes the named key under HKCU.
        let status = unsafe { RegDeleteTreeW(HKEY_CURRENT_USER, &subkey_w) };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(false);
        }
        status
            .ok()
            .map_err(|e| Error::Registry(format!("Failed to delete registry key '{subkey}': {e}")))?;
        Ok(true)
    }
}

/// Associate the `rdp` scheme with `exe_path` for the current user.
#[cfg(target_os = "windows")]
pub fn register_uri_scheme(exe_path: &Path) -> Result<()> {
    let root_key = win::Key::create(&scheme_key_path())?;
    root_key.set_string(None, scheme::DISPLAY_NAME)?;
    root_key.set_string(Some("URL Protocol"), "")?;

    let cmd_key = win::Key::create(&command_key_path())?;
    cmd_key.set_string(None, &handler_command_line(exe_path))?;

    tracing::info!(exe = %exe_path.display(), "Registered {} scheme", scheme::NAME);
    Ok(())
}

#[cfg(not(target_os = "windows"))]
pub fn register_uri_scheme(_exe_path: &Path) -> Result<()> {
    Err(Error::Unsupported("URI scheme registration"))
}

/// Remove the `rdp` scheme association. Returns whether one existed.
#[cfg(target_os = "windows")]
pub fn unregister_uri_scheme() -> Result<bool> {
    let existed = win::delete_tree(&scheme_key_path())?;
    tracing::info!(existed, "Unregistered {} scheme", scheme::NAME);
    Ok(existed)
}

#[cfg(not(target_os = "windows"))]
pub fn unregister_uri_scheme() -> Result<bool> {
    Err(Error::Unsupported("URI scheme registration"))
}

/// Command currently registered for the scheme, if any.
#[cfg(target_os = "windows")]
pub fn registered_command() -> Result<Option<String>> {
    win::read_default_string(&command_key_path())
}

#[cfg(not(target_os = "windows"))]
pub fn registered_command() -> Result<Option<String>> {
    Err(Error::Unsupported("URI scheme registration"))
}
