//! User-facing message text in the four supported languages.

use crate::resize::{ResizeError, Resized};

/// A supported message language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
    Spanish,
    Portuguese,
}

/// A fixed piece of UI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Title,
    Width,
    Height,
    Resize,
    Refresh,
    SelectWindow,
    InvalidValues,
    PositiveValues,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Chinese,
        Language::Spanish,
        Language::Portuguese,
    ];

    /// Two-letter ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
            Self::Spanish => "es",
            Self::Portuguese => "pt",
        }
    }

    /// Name shown in the language picker.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "中文 (Simplified Chinese)",
            Self::Spanish => "Español",
            Self::Portuguese => "Português",
        }
    }

    /// Matches a locale tag such as `pt`, `pt-BR`, or `zh_CN` by its
    /// language subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_', '.']).next()?;
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }

    /// Language of the current user's system locale, English if unknown.
    pub fn detect() -> Self {
        sys_locale::get_locale()
            .and_then(|tag| Self::from_tag(&tag))
            .unwrap_or_default()
    }

    /// Picks the first usable choice: explicit override, configured code,
    /// then the system locale.
    pub fn resolve(override_tag: Option<&str>, configured: &str) -> Self {
        override_tag
            .and_then(Self::from_tag)
            .or_else(|| Self::from_tag(configured))
            .unwrap_or_else(Self::detect)
    }

    pub fn text(self, message: Message) -> &'static str {
        use Language::*;
        use Message::*;

        match (self, message) {
            (_, Title) => crate::APP_TITLE,

            (English, Width) => "Width:",
            (English, Height) => "Height:",
            (English, Resize) => "Resize",
            (English, Refresh) => "Refresh",
            (English, SelectWindow) => "Select a window first!",
            (English, InvalidValues) => "Enter valid numeric values!",
            (English, PositiveValues) => "Width and height must be greater than zero!",

            (Chinese, Width) => "宽度:",
            (Chinese, Height) => "高度:",
            (Chinese, Resize) => "调整大小",
            (Chinese, Refresh) => "刷新",
            (Chinese, SelectWindow) => "请先选择一个窗口！",
            (Chinese, InvalidValues) => "请输入有效的数值！",
            (Chinese, PositiveValues) => "宽度和高度必须大于零！",

            (Spanish, Width) => "Ancho:",
            (Spanish, Height) => "Alto:",
            (Spanish, Resize) => "Redimensionar",
            (Spanish, Refresh) => "Actualizar",
            (Spanish, SelectWindow) => "¡Selecciona una ventana primero!",
            (Spanish, InvalidValues) => "¡Ingresa valores numéricos válidos!",
            (Spanish, PositiveValues) => "¡El ancho y la altura deben ser mayores que cero!",

            (Portuguese, Width) => "Largura:",
            (Portuguese, Height) => "Altura:",
            (Portuguese, Resize) => "Redimensionar",
            (Portuguese, Refresh) => "Atualizar",
            (Portuguese, SelectWindow) => "Selecione uma janela primeiro!",
            (Portuguese, InvalidValues) => "Digite valores numéricos válidos!",
            (Portuguese, PositiveValues) => "Largura e altura devem ser maiores que zero!",
        }
    }

    /// Message shown when a resize request is refused.
    pub fn error_text(self, error: ResizeError) -> &'static str {
        self.text(match error {
            ResizeError::NoSelection => Message::SelectWindow,
            ResizeError::InvalidNumericInput => Message::InvalidValues,
            ResizeError::NonPositiveDimension => Message::PositiveValues,
        })
    }

    /// Confirmation shown after a resize.
    pub fn resized_text(self, resized: &Resized) -> String {
        let Resized {
            title,
            width,
            height,
        } = resized;
        match self {
            Self::English => format!("Window '{title}' resized to {width}x{height}!"),
            Self::Chinese => format!("窗口 '{title}' 已调整为 {width}x{height}！"),
            Self::Spanish => format!("¡Ventana '{title}' redimensionada a {width}x{height}!"),
            Self::Portuguese => format!("Janela '{title}' redimensionada para {width}x{height}!"),
        }
    }
}
