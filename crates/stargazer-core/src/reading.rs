//! Personality reading composed from a zodiac sign and birth details.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::birth::BirthDetails;
use crate::zodiac::{self, ZodiacSign};

/// Trait sentence for each sign.
pub const SIGN_TRAITS: [(ZodiacSign, &str); 12] = [
    (ZodiacSign::Aries, "Energetic, bold, and ambitious."),
    (ZodiacSign::Taurus, "Stable, reliable, and loves comfort."),
    (ZodiacSign::Gemini, "Curious, adaptable, and expressive."),
    (ZodiacSign::Cancer, "Emotional, nurturing, and intuitive."),
    (ZodiacSign::Leo, "Confident, creative, and loves attention."),
    (ZodiacSign::Virgo, "Analytical, detail-oriented, and practical."),
    (ZodiacSign::Libra, "Balanced, social, and values harmony."),
    (ZodiacSign::Scorpio, "Passionate, determined, and mysterious."),
    (ZodiacSign::Sagittarius, "Adventurous, optimistic, and freedom-loving."),
    (ZodiacSign::Capricorn, "Disciplined, responsible, and ambitious."),
    (ZodiacSign::Aquarius, "Innovative, independent, and humanitarian."),
    (ZodiacSign::Pisces, "Compassionate, artistic, and dreamy."),
];

/// Used when a sign has no entry in [`SIGN_TRAITS`].
pub const GENERIC_TRAITS: &str = "Unique and special personality.";

/// Looks up the trait sentence for a sign.
pub fn traits_for(sign: ZodiacSign) -> &'static str {
    SIGN_TRAITS
        .iter()
        .find(|(candidate, _)| *candidate == sign)
        .map(|(_, traits)| *traits)
        .unwrap_or(GENERIC_TRAITS)
}

/// A rendered personality reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub greeting: String,
    pub sign: ZodiacSign,
    pub traits: String,
    /// Full multi-line text shown to the user.
    pub text: String,
}

impl Reading {
    /// Composes a reading. Inputs are embedded as-is, without escaping.
    pub fn compose(name: &str, sign: ZodiacSign, time_of_birth: NaiveTime, place: &str) -> Self {
        let greeting = format!("Hello {name},");
        let traits = traits_for(sign).to_string();
        let text = format!(
            "{greeting}\n\
             Based on your birth date, your zodiac sign is {sign}.\n\
             Traits: {traits}\n\
             Your birth time ({time_of_birth}) and place ({place}) suggest a unique destiny, \
             deeply connected to the cosmos."
        );

        Self {
            greeting,
            sign,
            traits,
            text,
        }
    }

    /// Resolves the sign from the birth date and composes the reading.
    pub fn for_birth(details: &BirthDetails) -> Self {
        let sign = zodiac::resolve_date(details.date_of_birth());
        Self::compose(
            details.name(),
            sign,
            details.time_of_birth(),
            details.place_of_birth(),
        )
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
