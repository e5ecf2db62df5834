use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A support persona selectable in the chat widget.
///
/// The genre decides the system prompt sent with every completion request
/// and the display metadata the page renders. Switching genre takes effect
/// on the next request; it never rewrites stored history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    #[default]
    MentalHealth,
    Medical,
    Financial,
    Tech,
}

impl Genre {
    pub const ALL: [Self; 4] = [Self::MentalHealth, Self::Medical, Self::Financial, Self::Tech];

    /// Kebab-case identifier used in markup and serialized state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MentalHealth => "mental-health",
            Self::Medical => "medical",
            Self::Financial => "financial",
            Self::Tech => "tech",
        }
    }

    /// Heading shown above the conversation.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::MentalHealth => "Mental Health Support",
            Self::Medical => "Medical Guidance",
            Self::Financial => "Financial Guidance",
            Self::Tech => "Tech Support",
        }
    }

    /// Font Awesome icon class for the widget header.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::MentalHealth => "fa-heart",
            Self::Medical => "fa-stethoscope",
            Self::Financial => "fa-coins",
            Self::Tech => "fa-laptop-code",
        }
    }

    /// Accent color for the persona's message bubbles.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Self::MentalHealth => "#8b5cf6",
            Self::Medical => "#ef4444",
            Self::Financial => "#f59e0b",
            Self::Tech => "#3b82f6",
        }
    }

    /// System prompt steering the completion service toward this persona.
    #[must_use]
    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::MentalHealth => {
                "You are a supportive, caring friend having a conversation with someone who may \
                 be feeling down or stressed. Be empathetic and understanding, ask follow-up \
                 questions to show you care, and provide emotional support and encouragement. \
                 Keep responses conversational and natural, warm and genuine. Don't give medical \
                 advice, just emotional support. Respond like a real person having a conversation."
            }
            Self::Medical => {
                "You are a calm, knowledgeable wellness companion talking with someone who has \
                 general health questions. Explain everyday health and wellness topics in plain, \
                 reassuring language and suggest sensible self-care habits. Never diagnose, never \
                 recommend medication, and always encourage seeing a qualified professional for \
                 anything specific or serious. Keep responses conversational and kind."
            }
            Self::Financial => {
                "You are a level-headed, encouraging personal finance coach. Help with everyday \
                 money topics like budgeting, saving, and managing debt, in plain language and \
                 small practical steps. Don't recommend specific investments or products, and \
                 remind the user that big decisions deserve a licensed advisor. Keep responses \
                 conversational and judgment-free."
            }
            Self::Tech => {
                "You are a friendly, patient tech support helper talking with someone who is \
                 frustrated with a device or app. Walk through fixes one small step at a time, \
                 in plain language without jargon, and check in before moving on. Celebrate \
                 progress and never make the user feel at fault. Keep responses conversational."
            }
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown genre: {0}")]
pub struct ParseGenreError(String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| ParseGenreError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mental_health() {
        assert_eq!(Genre::default(), Genre::MentalHealth);
    }

    #[test]
    fn identifiers_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);

            let json = serde_json::to_string(&genre).unwrap();
            assert_eq!(json, format!("\"{genre}\""));
        }
        assert!("astrology".parse::<Genre>().is_err());
    }

    #[test]
    fn prompts_are_distinct() {
        for genre in Genre::ALL {
            for other in Genre::ALL {
                if genre != other {
                    assert_ne!(genre.system_prompt(), other.system_prompt());
                }
            }
        }
    }
}
