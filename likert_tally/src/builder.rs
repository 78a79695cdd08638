pub use crate::config::*;
use crate::scale::ScaleLevel;

use log::debug;
use std::collections::HashSet;

/// A builder for assembling a response table.
///
/// ```
/// pub use likert_tally::builder::SurveyBuilder;
/// pub use likert_tally::LabelPolicy;
/// # use likert_tally::SurveyErrors;
///
/// let mut builder = SurveyBuilder::new(LabelPolicy::Exclude)?
///     .questions(&["Q1".to_string(), "Q2".to_string()])?;
///
/// builder.add_response_labels(&["SS", "CTS"])?;
/// builder.add_response_labels(&["S", ""])?;
///
/// let table = builder.build();
/// assert_eq!(table.num_rows(), 2);
/// # Ok::<(), SurveyErrors>(())
/// ```
pub struct SurveyBuilder {
    pub(crate) _policy: LabelPolicy,
    pub(crate) _questions: Vec<String>,
    pub(crate) _responses: Vec<Response>,
}

impl SurveyBuilder {
    /// A builder for the standard questionnaire (`Q1` to `Q17`).
    pub fn new(policy: LabelPolicy) -> Result<SurveyBuilder, SurveyErrors> {
        Ok(SurveyBuilder {
            _policy: policy,
            _questions: default_questions(),
            _responses: Vec::new(),
        })
    }

    /// Replaces the list of questions. The existing responses are dropped.
    pub fn questions(self, questions: &[String]) -> Result<SurveyBuilder, SurveyErrors> {
        let mut seen: HashSet<&String> = HashSet::new();
        for q in questions.iter() {
            if !seen.insert(q) {
                return Err(SurveyErrors::DuplicateQuestion(q.clone()));
            }
        }
        Ok(SurveyBuilder {
            _policy: self._policy,
            _questions: questions.to_vec(),
            _responses: Vec::new(),
        })
    }

    /// Adds a response given as labels, in question order.
    ///
    /// The empty string stands for a missing answer.
    pub fn add_response_labels(&mut self, labels: &[&str]) -> Result<(), SurveyErrors> {
        let answers: Vec<Option<String>> = labels
            .iter()
            .map(|s| match *s {
                "" => None,
                x => Some(x.to_string()),
            })
            .collect();
        self.add_response(&Response { id: None, answers })
    }

    /// Adds a response.
    ///
    /// Under [LabelPolicy::Reject], a cell that is not one of the six labels is refused.
    /// Missing cells are always accepted.
    pub fn add_response(&mut self, response: &Response) -> Result<(), SurveyErrors> {
        if response.answers.len() > self._questions.len() {
            return Err(SurveyErrors::RowTooLong {
                row: self._responses.len(),
                width: response.answers.len(),
            });
        }
        if self._policy == LabelPolicy::Reject {
            for label in response.answers.iter().flatten() {
                ScaleLevel::from_label(label)?;
            }
        }
        self._responses.push(response.clone());
        Ok(())
    }

    pub fn build(self) -> ResponseTable {
        debug!(
            "build: {} questions, {} responses",
            self._questions.len(),
            self._responses.len()
        );
        ResponseTable {
            questions: self._questions,
            responses: self._responses,
        }
    }
}
