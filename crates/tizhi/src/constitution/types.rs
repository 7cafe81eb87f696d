use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The nine standardized TCM body constitutions.
///
/// Variant order is significant: it is the questionnaire block order and the iteration order of
/// every score map, which the classification tie-breaks depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstitutionType {
    Peace,
    QiDeficiency,
    YangDeficiency,
    YinDeficiency,
    PhlegmDamp,
    DampHeat,
    BloodStasis,
    QiDepression,
    Special,
}

impl ConstitutionType {
    pub const ALL: [ConstitutionType; 9] = [
        ConstitutionType::Peace,
        ConstitutionType::QiDeficiency,
        ConstitutionType::YangDeficiency,
        ConstitutionType::YinDeficiency,
        ConstitutionType::PhlegmDamp,
        ConstitutionType::DampHeat,
        ConstitutionType::BloodStasis,
        ConstitutionType::QiDepression,
        ConstitutionType::Special,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ConstitutionType::Peace => "peace",
            ConstitutionType::QiDeficiency => "qi_deficiency",
            ConstitutionType::YangDeficiency => "yang_deficiency",
            ConstitutionType::YinDeficiency => "yin_deficiency",
            ConstitutionType::PhlegmDamp => "phlegm_damp",
            ConstitutionType::DampHeat => "damp_heat",
            ConstitutionType::BloodStasis => "blood_stasis",
            ConstitutionType::QiDepression => "qi_depression",
            ConstitutionType::Special => "special",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ConstitutionType::Peace => "平和质",
            ConstitutionType::QiDeficiency => "气虚质",
            ConstitutionType::YangDeficiency => "阳虚质",
            ConstitutionType::YinDeficiency => "阴虚质",
            ConstitutionType::PhlegmDamp => "痰湿质",
            ConstitutionType::DampHeat => "湿热质",
            ConstitutionType::BloodStasis => "血瘀质",
            ConstitutionType::QiDepression => "气郁质",
            ConstitutionType::Special => "特禀质",
        }
    }

    /// Number of questionnaire items assigned to this constitution.
    pub fn question_count(self) -> usize {
        match self {
            ConstitutionType::Peace
            | ConstitutionType::QiDeficiency
            | ConstitutionType::YangDeficiency
            | ConstitutionType::YinDeficiency => 4,
            ConstitutionType::PhlegmDamp
            | ConstitutionType::DampHeat
            | ConstitutionType::BloodStasis
            | ConstitutionType::QiDepression => 3,
            ConstitutionType::Special => 2,
        }
    }
}

impl fmt::Display for ConstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ConstitutionType {
    type Err = UnknownConstitution;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        ConstitutionType::ALL
            .into_iter()
            .find(|kind| kind.code() == normalized)
            .ok_or_else(|| UnknownConstitution(raw.trim().to_string()))
    }
}

/// Raised when a constitution code does not name one of the nine types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown constitution type '{0}'")]
pub struct UnknownConstitution(pub String);
