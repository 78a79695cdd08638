use std::fmt::Display;
use std::str::FromStr;

use crate::config::SurveyErrors;

/// The six ordinal answers of the questionnaire, from the most positive to the most negative.
///
/// The labels follow the Indonesian convention used in the survey sheets:
/// `SS` (sangat setuju), `S` (setuju), `CS` (cukup setuju), `CTS` (cukup tidak setuju),
/// `TS` (tidak setuju) and `STS` (sangat tidak setuju).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum ScaleLevel {
    StronglyAgree,
    Agree,
    SomewhatAgree,
    SomewhatDisagree,
    Disagree,
    StronglyDisagree,
}

/// Grouping of the scale levels into three sentiments.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl ScaleLevel {
    /// All the levels, in registry order (highest score first).
    pub const ALL: [ScaleLevel; 6] = [
        ScaleLevel::StronglyAgree,
        ScaleLevel::Agree,
        ScaleLevel::SomewhatAgree,
        ScaleLevel::SomewhatDisagree,
        ScaleLevel::Disagree,
        ScaleLevel::StronglyDisagree,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScaleLevel::StronglyAgree => "SS",
            ScaleLevel::Agree => "S",
            ScaleLevel::SomewhatAgree => "CS",
            ScaleLevel::SomewhatDisagree => "CTS",
            ScaleLevel::Disagree => "TS",
            ScaleLevel::StronglyDisagree => "STS",
        }
    }

    /// The numeric score, from 6 (SS) down to 1 (STS).
    pub fn score(&self) -> u32 {
        6 - self.index() as u32
    }

    pub fn category(&self) -> Category {
        match self {
            ScaleLevel::StronglyAgree | ScaleLevel::Agree => Category::Positive,
            ScaleLevel::SomewhatAgree => Category::Neutral,
            ScaleLevel::SomewhatDisagree | ScaleLevel::Disagree | ScaleLevel::StronglyDisagree => {
                Category::Negative
            }
        }
    }

    /// Position in the registry order.
    pub fn index(&self) -> usize {
        match self {
            ScaleLevel::StronglyAgree => 0,
            ScaleLevel::Agree => 1,
            ScaleLevel::SomewhatAgree => 2,
            ScaleLevel::SomewhatDisagree => 3,
            ScaleLevel::Disagree => 4,
            ScaleLevel::StronglyDisagree => 5,
        }
    }

    /// Looks up a label. The match is exact and case-sensitive.
    pub fn from_label(label: &str) -> Result<ScaleLevel, SurveyErrors> {
        ScaleLevel::ALL
            .iter()
            .find(|sl| sl.label() == label)
            .cloned()
            .ok_or_else(|| SurveyErrors::UnknownScale(label.to_string()))
    }
}

impl FromStr for ScaleLevel {
    type Err = SurveyErrors;
    fn from_str(s: &str) -> Result<ScaleLevel, SurveyErrors> {
        ScaleLevel::from_label(s)
    }
}

impl Display for ScaleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Positive, Category::Neutral, Category::Negative];

    /// The name used in the reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Positive => "positif",
            Category::Neutral => "netral",
            Category::Negative => "negatif",
        }
    }

    /// The levels belonging to this category, in registry order.
    pub fn levels(&self) -> Vec<ScaleLevel> {
        ScaleLevel::ALL
            .iter()
            .filter(|sl| sl.category() == *self)
            .cloned()
            .collect()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
