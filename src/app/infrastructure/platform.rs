use crate::app::services::theme::SystemPreference;

/// Ask the OS whether it prefers a dark color scheme.
///
/// `None` means no probe could answer on this system.
pub fn detect_system_dark_mode() -> Option<bool> {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return Some(value == 0);
            }
        }
    }

    // Linux: GNOME color-scheme first, then the theme name
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            if output.status.success() {
                let scheme = String::from_utf8_lossy(&output.stdout);
                if scheme.contains("prefer-dark") {
                    return Some(true);
                }
                if scheme.contains("prefer-light") {
                    return Some(false);
                }
            }
        }

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            if output.status.success() {
                let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
                return Some(theme.contains("dark"));
            }
        }
    }

    // macOS: AppleInterfaceStyle is only set in dark mode
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
            return Some(output.status.success() && style.contains("dark"));
        }
    }

    None
}

/// Reads the real OS setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformPreference;

impl SystemPreference for PlatformPreference {
    fn prefers_dark(&self) -> Option<bool> {
        let detected = detect_system_dark_mode();
        tracing::debug!(?detected, "system color scheme");
        detected
    }
}

/// For environments without any color-scheme query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSystemPreference;

impl SystemPreference for NoSystemPreference {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}
