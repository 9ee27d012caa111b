use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{CHAOTIC_TEMPERATURE, DEFAULT_TEMPERATURE};

/// The four ways Crushor can read a message
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Direct and realistic about their intentions
    #[default]
    Honest,
    /// Roasts their texting habits
    Savage,
    /// The most optimistic reading possible
    Soft,
    /// Wild, unpredictable interpretations
    Chaotic,
}

impl TranslationMode {
    /// All modes in display order
    pub const ALL: [TranslationMode; 4] = [Self::Honest, Self::Savage, Self::Soft, Self::Chaotic];

    /// System prompt sent ahead of the user's message
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Honest => {
                "You are a brutally honest AI that translates what people really mean when they text. \
                 Be direct and realistic about their intentions."
            }
            Self::Savage => {
                "You are a savage AI that roasts people's texting habits. \
                 Be brutally honest and a bit mean about what they really meant."
            }
            Self::Soft => {
                "You are a gentle AI that gives the most optimistic interpretation of what someone meant in their text. \
                 Be kind and hopeful."
            }
            Self::Chaotic => {
                "You are a chaotic AI that gives wild, unpredictable interpretations of what someone meant. \
                 Be random and funny."
            }
        }
    }

    /// Sampling temperature; chaotic runs hotter than the rest
    pub fn temperature(&self) -> f64 {
        match self {
            Self::Chaotic => CHAOTIC_TEMPERATURE,
            Self::Honest | Self::Savage | Self::Soft => DEFAULT_TEMPERATURE,
        }
    }

    /// Glyph shown on mode buttons and result cards
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Honest => "🧠",
            Self::Savage => "💀",
            Self::Soft => "🌸",
            Self::Chaotic => "👻",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Honest => "honest",
            Self::Savage => "savage",
            Self::Soft => "soft",
            Self::Chaotic => "chaotic",
        }
    }

    /// Capitalized name for headings
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Honest => "Honest",
            Self::Savage => "Savage",
            Self::Soft => "Soft",
            Self::Chaotic => "Chaotic",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Honest => Color::LightMagenta,
            Self::Savage => Color::Gray,
            Self::Soft => Color::LightGreen,
            Self::Chaotic => Color::Magenta,
        }
    }

    /// Cycle to the next mode in the sequence
    pub fn cycle(&self) -> Self {
        match self {
            Self::Honest => Self::Savage,
            Self::Savage => Self::Soft,
            Self::Soft => Self::Chaotic,
            Self::Chaotic => Self::Honest,
        }
    }

    /// Cycle to the previous mode in the sequence
    pub fn cycle_reverse(&self) -> Self {
        match self {
            Self::Honest => Self::Chaotic,
            Self::Chaotic => Self::Soft,
            Self::Soft => Self::Savage,
            Self::Savage => Self::Honest,
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "honest" => Ok(Self::Honest),
            "savage" => Ok(Self::Savage),
            "soft" => Ok(Self::Soft),
            "chaotic" => Ok(Self::Chaotic),
            other => Err(format!(
                "Unknown mode '{}'. Expected one of: honest, savage, soft, chaotic",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_policy() {
        assert_eq!(TranslationMode::Chaotic.temperature(), 1.2);
        for mode in [
            TranslationMode::Honest,
            TranslationMode::Savage,
            TranslationMode::Soft,
        ] {
            assert_eq!(mode.temperature(), 0.8, "mode {}", mode);
        }
    }

    #[test]
    fn test_every_mode_has_an_entry() {
        for mode in TranslationMode::ALL {
            assert!(!mode.system_prompt().is_empty());
            assert!(!mode.glyph().is_empty());
        }
        assert_eq!(TranslationMode::Soft.glyph(), "🌸");
        assert!(TranslationMode::Savage.system_prompt().contains("roasts"));
    }

    #[test]
    fn test_mode_cycling() {
        let mut mode = TranslationMode::default();
        assert_eq!(mode, TranslationMode::Honest);

        mode = mode.cycle();
        assert_eq!(mode, TranslationMode::Savage);

        mode = mode.cycle();
        assert_eq!(mode, TranslationMode::Soft);

        mode = mode.cycle();
        assert_eq!(mode, TranslationMode::Chaotic);

        mode = mode.cycle();
        assert_eq!(mode, TranslationMode::Honest);
    }

    #[test]
    fn test_mode_cycling_reverse() {
        for mode in TranslationMode::ALL {
            assert_eq!(mode.cycle().cycle_reverse(), mode);
        }
        assert_eq!(
            TranslationMode::Honest.cycle_reverse(),
            TranslationMode::Chaotic
        );
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("soft".parse::<TranslationMode>(), Ok(TranslationMode::Soft));
        assert_eq!(" CHAOTIC ".parse::<TranslationMode>(), Ok(TranslationMode::Chaotic));
        assert!("sarcastic".parse::<TranslationMode>().is_err());
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&TranslationMode::Savage).unwrap();
        assert_eq!(json, "\"savage\"");

        let mode: TranslationMode = serde_json::from_str("\"honest\"").unwrap();
        assert_eq!(mode, TranslationMode::Honest);
    }
}
