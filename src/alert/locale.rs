//! Localized alert strings.
//!
//! Four hardcoded locales. Lookups by language code fall back to English.

use std::str::FromStr;

/// Supported alert locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    Arabic,
    Spanish,
    Japanese,
    #[default]
    English,
}

/// Returned when a language code has no string table.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("no alert strings for language code {0:?}")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 4] = [
        Locale::Arabic,
        Locale::Spanish,
        Locale::Japanese,
        Locale::English,
    ];

    /// ISO 639-1 language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Arabic => "ar",
            Locale::Spanish => "es",
            Locale::Japanese => "ja",
            Locale::English => "en",
        }
    }

    /// Name shown in the language selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::Arabic => "العربية",
            Locale::Spanish => "Español",
            Locale::Japanese => "日本語",
            Locale::English => "English",
        }
    }

    pub fn text(self) -> &'static AlertText {
        match self {
            Locale::Arabic => &ARABIC,
            Locale::Spanish => &SPANISH,
            Locale::Japanese => &JAPANESE,
            Locale::English => &ENGLISH,
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Exact, case-sensitive code match.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| UnknownLocale(code.to_string()))
    }
}

/// Display strings for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct AlertText {
    pub title: &'static str,
    pub warning: &'static str,
    pub evacuation: &'static str,
    pub time_remaining: &'static str,
    pub affected_population: &'static str,
    pub evacuation_route: &'static str,
    pub stay_calm: &'static str,
    pub flag: &'static str,
}

/// Strings for `code`, or the English record when the code is unsupported.
pub fn alert_text(code: &str) -> &'static AlertText {
    code.parse::<Locale>().unwrap_or_default().text()
}

pub static ARABIC: AlertText = AlertText {
    title: "تحذير اصطدام كويكب",
    warning: "كويكب متجه نحو القاهرة",
    evacuation: "غادر المنطقة فوراً",
    time_remaining: "الوقت المتبقي",
    affected_population: "السكان المعرضون للخطر",
    evacuation_route: "اتبع طرق الإخلاء المحددة",
    stay_calm: "ابق هادئاً واتبع التعليمات",
    flag: "🇪🇬",
};

pub static SPANISH: AlertText = AlertText {
    title: "Alerta de Impacto de Asteroide",
    warning: "Asteroide dirigiéndose hacia Ciudad de México",
    evacuation: "Evacúe la zona inmediatamente",
    time_remaining: "Tiempo restante",
    affected_population: "Población en riesgo",
    evacuation_route: "Siga las rutas de evacuación designadas",
    stay_calm: "Mantenga la calma y siga las instrucciones",
    flag: "🇲🇽",
};

pub static JAPANESE: AlertText = AlertText {
    title: "小惑星衝突警報",
    warning: "小惑星が東京に向かっています",
    evacuation: "直ちに避難してください",
    time_remaining: "残り時間",
    affected_population: "危険にさらされている人口",
    evacuation_route: "指定された避難ルートに従ってください",
    stay_calm: "冷静になって指示に従ってください",
    flag: "🇯🇵",
};

pub static ENGLISH: AlertText = AlertText {
    title: "Asteroid Impact Alert",
    warning: "Asteroid heading toward New York",
    evacuation: "Evacuate area immediately",
    time_remaining: "Time remaining",
    affected_population: "Population at risk",
    evacuation_route: "Follow designated evacuation routes",
    stay_calm: "Stay calm and follow instructions",
    flag: "🇺🇸",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_code_match() {
        assert_eq!(alert_text("ar"), &ARABIC);
        assert_eq!(alert_text("es"), &SPANISH);
        assert_eq!(alert_text("ja"), &JAPANESE);
        assert_eq!(alert_text("en"), &ENGLISH);
    }

    #[test]
    fn test_unsupported_code_falls_back_to_english() {
        assert_eq!(alert_text("de"), &ENGLISH);
        assert_eq!(alert_text(""), &ENGLISH);
        // Matching is exact, not case-insensitive or prefix-based.
        assert_eq!(alert_text("AR"), &ENGLISH);
        assert_eq!(alert_text("ja-JP"), &ENGLISH);
    }

    #[test]
    fn test_parse_error_carries_code() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert_eq!(err, UnknownLocale("de".to_string()));
        assert!(err.to_string().contains("\"de\""));
    }

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
        }
    }
}
