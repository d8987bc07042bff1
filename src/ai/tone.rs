//! Tones and the instruction phrase each one maps to

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Casual,
    Custom,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
            Tone::Custom => "custom",
        }
    }

    pub fn instructions(self) -> &'static str {
        instructions(self)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            "casual" => Ok(Tone::Casual),
            "custom" => Ok(Tone::Custom),
            other => Err(Error::InvalidRequest(format!("unknown tone: {other}"))),
        }
    }
}

pub fn instructions(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "Write in a formal, business-appropriate tone using professional language and proper etiquette."
        }
        Tone::Friendly => "Write in a warm and personable tone while maintaining professionalism.",
        Tone::Casual => "Write in a relaxed and informal tone, as if speaking to a friend.",
        Tone::Custom => "Write in the user's preferred style based on the context.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_instructions() {
        assert!(instructions(Tone::Professional).contains("formal, business-appropriate"));
        assert!(instructions(Tone::Friendly).contains("warm and personable"));
        assert!(instructions(Tone::Casual).contains("relaxed and informal"));
        assert!(instructions(Tone::Custom).contains("preferred style"));
    }

    #[test]
    fn test_each_tone_has_distinct_instructions() {
        let all = [Tone::Professional, Tone::Friendly, Tone::Casual, Tone::Custom];
        for (i, a) in all.iter().enumerate() {
            assert!(!a.instructions().is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a.instructions(), b.instructions());
            }
        }
    }

    #[test]
    fn test_unknown_tone_name_is_rejected() {
        let err = "sarcastic".parse::<Tone>().unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "unknown tone: sarcastic");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(" CASUAL ".parse::<Tone>().unwrap(), Tone::Casual);
        assert!("loud".parse::<Tone>().is_err());
        assert_eq!(Tone::default(), Tone::Professional);
        assert_eq!(Tone::Custom.to_string(), "custom");
    }

    #[test]
    fn test_serde_lowercase() {
        let tone: Tone = serde_json::from_str("\"friendly\"").unwrap();
        assert_eq!(tone, Tone::Friendly);
        assert_eq!(serde_json::to_string(&Tone::Casual).unwrap(), "\"casual\"");
    }
}
