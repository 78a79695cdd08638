// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

use crate::scale::{Category, ScaleLevel};

/// The number of questions in the standard questionnaire.
pub const NUM_QUESTIONS: usize = 17;

/// The standard question identifiers, `Q1` to `Q17`.
pub fn default_questions() -> Vec<String> {
    (1..=NUM_QUESTIONS).map(|i| format!("Q{}", i)).collect()
}

/// One respondent.
///
/// The answers are aligned with the questions of the table they belong to. A `None` is a
/// missing cell. A `Some` is kept verbatim, even if it is not a recognized scale label.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Response {
    pub id: Option<String>,
    pub answers: Vec<Option<String>>,
}

/// The raw survey data, as loaded.
///
/// It is built once (see [crate::builder::SurveyBuilder]) and never modified afterwards.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResponseTable {
    pub(crate) questions: Vec<String>,
    pub(crate) responses: Vec<Response>,
}

impl ResponseTable {
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn num_rows(&self) -> usize {
        self.responses.len()
    }

    /// The cell for a response and a question index. Short rows read as missing cells.
    pub fn cell(&self, response: &Response, question_idx: usize) -> Option<ScaleLevel> {
        response
            .answers
            .get(question_idx)
            .and_then(|c| c.as_deref())
            .and_then(|s| ScaleLevel::from_label(s).ok())
    }
}

/// What to do with a cell that does not hold one of the six labels.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum LabelPolicy {
    /// The cell is left out of all the counts and means.
    Exclude,
    /// The table is refused.
    Reject,
}

// ******** Output data structures *********

/// The count of one level and its share of the total.
#[derive(PartialEq, Debug, Clone)]
pub struct ScaleTally {
    pub scale: ScaleLevel,
    pub count: u64,
    /// Percentage, rounded to 2 decimals.
    pub percentage: f64,
}

/// Counts and percentages for all the levels, in registry order.
/// Levels that were never chosen are present with a count of 0.
#[derive(PartialEq, Debug, Clone)]
pub struct Distribution {
    pub tally: Vec<ScaleTally>,
    /// The number of recognized answers.
    pub total: u64,
}

impl Distribution {
    pub fn count(&self, scale: ScaleLevel) -> u64 {
        self.tally
            .iter()
            .find(|st| st.scale == scale)
            .map(|st| st.count)
            .unwrap_or(0)
    }

    pub fn percentage(&self, scale: ScaleLevel) -> f64 {
        self.tally
            .iter()
            .find(|st| st.scale == scale)
            .map(|st| st.percentage)
            .unwrap_or(0.0)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct QuestionDistribution {
    pub question: String,
    pub distribution: Distribution,
    /// Cells of this column that were missing or not recognized.
    pub excluded: u64,
}

#[derive(PartialEq, Debug, Clone)]
pub struct MeanScore {
    pub question: String,
    /// Not rounded. `None` when the column has no recognized answer.
    pub mean: Option<f64>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct CategoryTally {
    pub category: Category,
    pub count: u64,
    pub percentage: f64,
}

#[derive(PartialEq, Debug, Clone)]
pub struct CategoryDistribution {
    pub tally: Vec<CategoryTally>,
    pub total: u64,
}

/// All the aggregates of a survey, computed in one pass by [crate::summarize].
#[derive(PartialEq, Debug, Clone)]
pub struct SurveySummary {
    pub questions: Vec<String>,
    pub rows: u64,
    /// Total number of cells left out of the counts.
    pub excluded: u64,
    pub overall: Distribution,
    pub per_question: Vec<QuestionDistribution>,
    pub mean_scores: Vec<MeanScore>,
    /// Mean of every recognized score in the table.
    pub grand_mean: Option<f64>,
    pub categories: CategoryDistribution,
}

/// Errors raised by the survey tabulation.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SurveyErrors {
    /// A label outside of the six scale levels.
    UnknownScale(String),
    /// A query code outside of q1..q13.
    UnknownQueryCode(String),
    DuplicateQuestion(String),
    /// A response with more answers than there are questions.
    RowTooLong { row: usize, width: usize },
}

impl Error for SurveyErrors {}

impl Display for SurveyErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyErrors::UnknownScale(s) => write!(f, "unknown scale label {:?}", s),
            SurveyErrors::UnknownQueryCode(s) => write!(f, "unknown query code {:?}", s),
            SurveyErrors::DuplicateQuestion(s) => write!(f, "question {} is declared twice", s),
            SurveyErrors::RowTooLong { row, width } => {
                write!(f, "response {} has {} answers, more than the questions", row, width)
            }
        }
    }
}
