use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Awareness,
    Consideration,
    Sales,
    Loyalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    None,
    General,
    Genz,
    Millennials,
    Parents,
    B2b,
    Smb,
    Custom,
}

impl Audience {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None / Not Specified",
            Self::General => "General Consumers (B2C)",
            Self::Genz => "Gen Z / Young Adults",
            Self::Millennials => "Millennials",
            Self::Parents => "Parents / Families",
            Self::B2b => "B2B Professionals / Decision Makers",
            Self::Smb => "Small Business Owners",
            Self::Custom => "Custom...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandTone {
    #[default]
    None,
    Professional,
    Friendly,
    Humorous,
    Empathetic,
    Inspirational,
    Urgent,
    Custom,
}

impl BrandTone {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None / Not Specified",
            Self::Professional => "Professional / Authoritative",
            Self::Friendly => "Friendly / Conversational",
            Self::Humorous => "Humorous / Witty",
            Self::Empathetic => "Empathetic / Caring",
            Self::Inspirational => "Inspirational / Aspirational",
            Self::Urgent => "Direct / Urgent",
            Self::Custom => "Custom...",
        }
    }
}

/// Optional campaign context.
///
/// Custom text is only retained while the matching selection is `Custom`;
/// every way of changing a selection goes through a setter that clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignGoalDetails {
    target_audience: Audience,
    custom_target_audience: Option<String>,
    brand_tone: BrandTone,
    custom_brand_tone: Option<String>,
    key_message: Option<String>,
}

impl CampaignGoalDetails {
    pub fn with_target_audience(mut self, audience: Audience) -> Self {
        self.target_audience = audience;
        if audience != Audience::Custom {
            self.custom_target_audience = None;
        }
        self
    }

    /// Ignored unless the audience selection is `Custom`.
    pub fn with_custom_target_audience(mut self, text: impl Into<String>) -> Self {
        if self.target_audience == Audience::Custom {
            self.custom_target_audience = Some(text.into());
        }
        self
    }

    pub fn with_brand_tone(mut self, tone: BrandTone) -> Self {
        self.brand_tone = tone;
        if tone != BrandTone::Custom {
            self.custom_brand_tone = None;
        }
        self
    }

    /// Ignored unless the tone selection is `Custom`.
    pub fn with_custom_brand_tone(mut self, text: impl Into<String>) -> Self {
        if self.brand_tone == BrandTone::Custom {
            self.custom_brand_tone = Some(text.into());
        }
        self
    }

    pub fn with_key_message(mut self, text: impl Into<String>) -> Self {
        self.key_message = Some(text.into());
        self
    }

    pub fn target_audience(&self) -> Audience {
        self.target_audience
    }

    pub fn custom_target_audience(&self) -> Option<&str> {
        self.custom_target_audience.as_deref()
    }

    pub fn brand_tone(&self) -> BrandTone {
        self.brand_tone
    }

    pub fn custom_brand_tone(&self) -> Option<&str> {
        self.custom_brand_tone.as_deref()
    }

    pub fn key_message(&self) -> Option<&str> {
        self.key_message.as_deref()
    }
}
