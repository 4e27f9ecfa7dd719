//! Wire-level audience filter types, shared between the form layer, the
//! backend payloads, and the query compiler.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Selects the feed table an audience is built against and which
/// entity-specific rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudienceKind {
    /// Registered nurses (`liveramp_rn_feed`).
    Rn,
    /// Healthcare providers (`liveramp_md_feed`).
    Hcp,
}

impl AudienceKind {
    /// The backend feed table queried for this kind of audience.
    pub fn feed_table(&self) -> &'static str {
        match self {
            AudienceKind::Rn => "liveramp_rn_feed",
            AudienceKind::Hcp => "liveramp_md_feed",
        }
    }

    /// The REST endpoint audiences of this kind are persisted under.
    pub fn endpoint(&self) -> &'static str {
        match self {
            AudienceKind::Rn => "/user_audiences",
            AudienceKind::Hcp => "/user_hcp_audiences",
        }
    }

    /// Only RN audiences carry an experience clause.
    pub fn has_experience_filter(&self) -> bool {
        matches!(self, AudienceKind::Rn)
    }
}

impl FromStr for AudienceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rn" => Ok(AudienceKind::Rn),
            "hcp" => Ok(AudienceKind::Hcp),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for AudienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudienceKind::Rn => write!(f, "rn"),
            AudienceKind::Hcp => write!(f, "hcp"),
        }
    }
}

/// Combinator applied between the state condition and the zip-region
/// condition when both are present. The form submits the raw keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoLogic {
    #[serde(rename = "AND")]
    And,
    #[default]
    #[serde(rename = "OR")]
    Or,
}

/// A labeled circle around a center zip code.
///
/// Every field takes a serde default so a malformed wire entry deserializes
/// to an invalid region that the compiler skips, rather than failing the
/// whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZipRegion {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub zip: String,
    /// Radius in miles.
    #[serde(default)]
    pub radius: f64,
}

impl ZipRegion {
    /// A region participates in the query only when both the center zip and
    /// the radius are set.
    pub fn is_valid(&self) -> bool {
        !self.zip.is_empty() && self.radius != 0.0
    }
}

/// Years/months experience bounds, RN audiences only. Zero means "no bound".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceFilter {
    #[serde(default)]
    pub min_years: u32,
    #[serde(default)]
    pub max_years: u32,
    #[serde(default)]
    pub min_months: u32,
    #[serde(default)]
    pub max_months: u32,
}

impl ExperienceFilter {
    pub fn is_active(&self) -> bool {
        self.min_years > 0 || self.max_years > 0 || self.min_months > 0 || self.max_months > 0
    }
}

/// The audience selection criteria assembled by the form layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceFilters {
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub zip_regions: Vec<ZipRegion>,
    #[serde(default)]
    pub geo_logic: GeoLogic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_filter: Option<ExperienceFilter>,
}

impl AudienceFilters {
    /// Regions that survive the validity check, in input order.
    pub fn valid_zip_regions(&self) -> impl Iterator<Item = &ZipRegion> {
        self.zip_regions.iter().filter(|r| r.is_valid())
    }
}
