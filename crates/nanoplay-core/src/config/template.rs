/// Generates the default `config.toml` contents with explanatory comments.
///
/// Written by `nanoplay init` so users start from a file that already
/// lists every option.
pub fn generate_config() -> String {
    r##"# NanoPlay configuration
# Location: ~/.config/nanoplay/config.toml

# Message language: "en", "zh", "es", or "pt".
# Leave empty to follow the system locale.
language = ""

[filter]
# Windows with exactly one of these titles are never listed.
reserved_titles = ["Program Manager"]
# Windows of these classes are never listed (shell tray, buttons,
# tooltips, and the IME helper). Matching is exact and case-sensitive.
denied_classes = ["Shell_TrayWnd", "Button", "tooltips_class32", "MSCTFIME UI"]

[resize]
# Size pre-filled in the width and height inputs, in pixels.
width = 320
height = 240

[logging]
# Enable file logging to ~/.config/nanoplay/logs/nanoplay.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
