//! The predefined questions that can be asked about a survey.
//!
//! Each question has a short code (`q1` to `q13`). The answers are plain strings, delimited
//! with `|` and `:`, computed from an existing [SurveySummary]. Nothing is recomputed from
//! the responses.

use log::debug;
use std::fmt::Display;
use std::str::FromStr;

use crate::config::*;
use crate::percentage;
use crate::round2;
use crate::scale::ScaleLevel;

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum QueryCode {
    /// q1: the most frequent level overall.
    MostCommonScale,
    /// q2: the least frequent level overall.
    LeastCommonScale,
    /// q3: the question with the most SS answers.
    MostStronglyAgree,
    /// q4: the question with the most S answers.
    MostAgree,
    /// q5: the question with the most CS answers.
    MostSomewhatAgree,
    /// q6: the question with the most CTS answers.
    MostSomewhatDisagree,
    /// q7: the question with the most TS answers.
    MostDisagree,
    /// q8: the question with the most STS answers.
    MostStronglyDisagree,
    /// q9: all the questions that received at least one STS.
    StronglyDisagreeQuestions,
    /// q10: the mean of all the scores.
    GrandMean,
    /// q11: the question with the highest mean score.
    HighestMean,
    /// q12: the question with the lowest mean score.
    LowestMean,
    /// q13: the positive, neutral and negative shares.
    CategoryBreakdown,
}

impl QueryCode {
    pub const ALL: [QueryCode; 13] = [
        QueryCode::MostCommonScale,
        QueryCode::LeastCommonScale,
        QueryCode::MostStronglyAgree,
        QueryCode::MostAgree,
        QueryCode::MostSomewhatAgree,
        QueryCode::MostSomewhatDisagree,
        QueryCode::MostDisagree,
        QueryCode::MostStronglyDisagree,
        QueryCode::StronglyDisagreeQuestions,
        QueryCode::GrandMean,
        QueryCode::HighestMean,
        QueryCode::LowestMean,
        QueryCode::CategoryBreakdown,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            QueryCode::MostCommonScale => "q1",
            QueryCode::LeastCommonScale => "q2",
            QueryCode::MostStronglyAgree => "q3",
            QueryCode::MostAgree => "q4",
            QueryCode::MostSomewhatAgree => "q5",
            QueryCode::MostSomewhatDisagree => "q6",
            QueryCode::MostDisagree => "q7",
            QueryCode::MostStronglyDisagree => "q8",
            QueryCode::StronglyDisagreeQuestions => "q9",
            QueryCode::GrandMean => "q10",
            QueryCode::HighestMean => "q11",
            QueryCode::LowestMean => "q12",
            QueryCode::CategoryBreakdown => "q13",
        }
    }

    /// The level looked for by the "which question has the most ..." queries.
    pub fn target_scale(&self) -> Option<ScaleLevel> {
        match self {
            QueryCode::MostStronglyAgree => Some(ScaleLevel::StronglyAgree),
            QueryCode::MostAgree => Some(ScaleLevel::Agree),
            QueryCode::MostSomewhatAgree => Some(ScaleLevel::SomewhatAgree),
            QueryCode::MostSomewhatDisagree => Some(ScaleLevel::SomewhatDisagree),
            QueryCode::MostDisagree => Some(ScaleLevel::Disagree),
            QueryCode::MostStronglyDisagree => Some(ScaleLevel::StronglyDisagree),
            _ => None,
        }
    }
}

impl FromStr for QueryCode {
    type Err = SurveyErrors;
    fn from_str(s: &str) -> Result<QueryCode, SurveyErrors> {
        QueryCode::ALL
            .iter()
            .find(|qc| qc.code() == s)
            .cloned()
            .ok_or_else(|| SurveyErrors::UnknownQueryCode(s.to_string()))
    }
}

impl Display for QueryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Formats a number the way the reports print it: rounded to 2 decimals, and always with
/// a fractional part (`100.0`, `33.33`, `4.5`).
pub fn format_decimal(x: f64) -> String {
    let r = round2(x);
    if r.fract() == 0.0 {
        format!("{:.1}", r)
    } else {
        format!("{}", r)
    }
}

/// Answers a query typed by a user.
///
/// The empty input (or only whitespace) is not a query, and gives no answer.
pub fn answer(input: &str, summary: &SurveySummary) -> Result<Option<String>, SurveyErrors> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let code: QueryCode = input.parse()?;
    Ok(Some(resolve(code, summary)))
}

/// Computes the answer to a query.
pub fn resolve(code: QueryCode, summary: &SurveySummary) -> String {
    debug!("resolve: {:?}", code);
    match code {
        QueryCode::MostCommonScale => extreme_scale(summary, |best, cur| cur > best),
        QueryCode::LeastCommonScale => extreme_scale(summary, |best, cur| cur < best),
        QueryCode::MostStronglyAgree
        | QueryCode::MostAgree
        | QueryCode::MostSomewhatAgree
        | QueryCode::MostSomewhatDisagree
        | QueryCode::MostDisagree
        | QueryCode::MostStronglyDisagree => match code.target_scale() {
            Some(scale) => most_frequent_question(summary, scale),
            None => String::new(),
        },
        QueryCode::StronglyDisagreeQuestions => {
            questions_with(summary, ScaleLevel::StronglyDisagree)
        }
        QueryCode::GrandMean => match summary.grand_mean {
            Some(m) => format_decimal(m),
            // No answer at all.
            None => "0".to_string(),
        },
        QueryCode::HighestMean => extreme_mean(summary, |best, cur| cur > best),
        QueryCode::LowestMean => extreme_mean(summary, |best, cur| cur < best),
        QueryCode::CategoryBreakdown => summary
            .categories
            .tally
            .iter()
            .map(|ct| {
                format!(
                    "{}={}:{}",
                    ct.category.label(),
                    ct.count,
                    format_decimal(ct.percentage)
                )
            })
            .collect::<Vec<String>>()
            .join("|"),
    }
}

// The first level in registry order wins ties: a level only replaces the current best if
// `replaces` holds strictly.
fn extreme_scale(summary: &SurveySummary, replaces: fn(u64, u64) -> bool) -> String {
    let best = summary
        .overall
        .tally
        .iter()
        .fold(None::<&ScaleTally>, |best, cur| match best {
            Some(b) if !replaces(b.count, cur.count) => Some(b),
            _ => Some(cur),
        });
    match best {
        Some(st) => format!(
            "{}|{}|{}",
            st.scale.label(),
            st.count,
            format_decimal(st.percentage)
        ),
        None => String::new(),
    }
}

// The first question in order wins ties. Questions without any such answer are never picked,
// which gives an empty answer when the level was never chosen.
fn most_frequent_question(summary: &SurveySummary, scale: ScaleLevel) -> String {
    let best = summary
        .per_question
        .iter()
        .map(|qd| (qd.question.as_str(), qd.distribution.count(scale)))
        .fold(None::<(&str, u64)>, |best, (q, count)| match best {
            Some((_, best_count)) if count <= best_count => best,
            _ if count == 0 => best,
            _ => Some((q, count)),
        });
    match best {
        Some((q, count)) => format!(
            "{}|{}|{}",
            q,
            count,
            format_decimal(percentage(count, summary.rows))
        ),
        None => String::new(),
    }
}

fn questions_with(summary: &SurveySummary, scale: ScaleLevel) -> String {
    summary
        .per_question
        .iter()
        .filter(|qd| qd.distribution.count(scale) > 0)
        .map(|qd| {
            format!(
                "{}:{}",
                qd.question,
                format_decimal(percentage(qd.distribution.count(scale), summary.rows))
            )
        })
        .collect::<Vec<String>>()
        .join("|")
}

// Questions without a mean are skipped. The first question wins ties.
fn extreme_mean(summary: &SurveySummary, replaces: fn(f64, f64) -> bool) -> String {
    let best = summary
        .mean_scores
        .iter()
        .filter_map(|ms| ms.mean.map(|m| (ms.question.as_str(), m)))
        .fold(None::<(&str, f64)>, |best, (q, m)| match best {
            Some((_, best_m)) if !replaces(best_m, m) => best,
            _ => Some((q, m)),
        });
    match best {
        Some((q, m)) => format!("{}:{}", q, format_decimal(m)),
        None => String::new(),
    }
}
