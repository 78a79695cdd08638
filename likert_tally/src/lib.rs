mod config;
mod scale;

pub mod builder;
pub mod manual;
pub mod query;

use log::{debug, info, warn};

use std::ops::AddAssign;

pub use crate::config::*;
pub use crate::scale::*;

// **** Private structures ****

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct AnswerCount(u64);

impl AnswerCount {
    const EMPTY: AnswerCount = AnswerCount(0);
}

impl std::iter::Sum for AnswerCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        AnswerCount(iter.map(|ac| ac.0).sum())
    }
}

impl AddAssign for AnswerCount {
    fn add_assign(&mut self, rhs: AnswerCount) {
        self.0 += rhs.0;
    }
}

// The counts of one column (or of the whole table), indexed by scale level.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct LevelCounts([AnswerCount; 6]);

impl LevelCounts {
    const EMPTY: LevelCounts = LevelCounts([AnswerCount::EMPTY; 6]);

    fn total(&self) -> AnswerCount {
        self.0.iter().cloned().sum()
    }

    fn get(&self, scale: ScaleLevel) -> AnswerCount {
        self.0[scale.index()]
    }
}

impl AddAssign for LevelCounts {
    fn add_assign(&mut self, rhs: LevelCounts) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0.iter()) {
            *lhs += *rhs;
        }
    }
}

/// Rounds to 2 decimals, half away from zero.
///
/// This is the only rounding rule used for the reports.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// The share of `count` in `total`, in percent and rounded to 2 decimals.
/// An empty total gives 0.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(count as f64 / total as f64 * 100.0)
    }
}

fn column_counts(table: &ResponseTable, question_idx: usize) -> LevelCounts {
    let mut counts = LevelCounts::EMPTY;
    for response in table.responses.iter() {
        if let Some(sl) = table.cell(response, question_idx) {
            counts.0[sl.index()] += AnswerCount(1);
        }
    }
    counts
}

fn to_distribution(counts: &LevelCounts) -> Distribution {
    let total = counts.total();
    let tally = ScaleLevel::ALL
        .iter()
        .map(|sl| ScaleTally {
            scale: *sl,
            count: counts.get(*sl).0,
            percentage: percentage(counts.get(*sl).0, total.0),
        })
        .collect();
    Distribution {
        tally,
        total: total.0,
    }
}

/// Counts every recognized answer of the table, across all the questions.
///
/// Cells that are missing or that do not hold one of the six labels are not part of the
/// total.
pub fn compute_overall_distribution(table: &ResponseTable) -> Distribution {
    let mut counts = LevelCounts::EMPTY;
    for idx in 0..table.questions.len() {
        counts += column_counts(table, idx);
    }
    debug!("compute_overall_distribution: counts: {:?}", counts);
    to_distribution(&counts)
}

/// Counts the answers of each question independently, in question order.
pub fn compute_per_question_distribution(table: &ResponseTable) -> Vec<QuestionDistribution> {
    let num_rows = table.num_rows() as u64;
    table
        .questions
        .iter()
        .enumerate()
        .map(|(idx, q)| {
            let distribution = to_distribution(&column_counts(table, idx));
            let excluded = num_rows - distribution.total;
            QuestionDistribution {
                question: q.clone(),
                distribution,
                excluded,
            }
        })
        .collect()
}

/// The mean score of each question, in question order.
///
/// Only the recognized answers are part of the mean.
pub fn compute_mean_scores(table: &ResponseTable) -> Vec<MeanScore> {
    table
        .questions
        .iter()
        .enumerate()
        .map(|(idx, q)| {
            let (sum, n) = table
                .responses
                .iter()
                .filter_map(|r| table.cell(r, idx))
                .fold((0u64, 0u64), |(sum, n), sl| (sum + sl.score() as u64, n + 1));
            let mean = if n == 0 {
                None
            } else {
                Some(sum as f64 / n as f64)
            };
            MeanScore {
                question: q.clone(),
                mean,
            }
        })
        .collect()
}

/// Groups an overall distribution into the three categories.
pub fn compute_category_distribution(overall: &Distribution) -> CategoryDistribution {
    let counts: Vec<(Category, u64)> = Category::ALL
        .iter()
        .map(|c| (*c, c.levels().iter().map(|sl| overall.count(*sl)).sum::<u64>()))
        .collect();
    let total: u64 = counts.iter().map(|(_, count)| count).sum();
    let tally = counts
        .iter()
        .map(|(category, count)| CategoryTally {
            category: *category,
            count: *count,
            percentage: percentage(*count, total),
        })
        .collect();
    CategoryDistribution { tally, total }
}

/// The mean of all the recognized scores, weighted by their counts.
pub fn compute_grand_mean(overall: &Distribution) -> Option<f64> {
    if overall.total == 0 {
        return None;
    }
    let sum: u64 = overall
        .tally
        .iter()
        .map(|st| st.scale.score() as u64 * st.count)
        .sum();
    Some(sum as f64 / overall.total as f64)
}

/// Computes all the aggregates of a survey.
///
/// This is a pure function of the table: running it twice gives the same summary.
pub fn summarize(table: &ResponseTable) -> SurveySummary {
    info!(
        "Processing {:?} responses, questions: {:?}",
        table.num_rows(),
        table.questions
    );
    let overall = compute_overall_distribution(table);
    let per_question = compute_per_question_distribution(table);
    let mean_scores = compute_mean_scores(table);
    let categories = compute_category_distribution(&overall);
    let grand_mean = compute_grand_mean(&overall);

    let excluded: u64 = per_question.iter().map(|qd| qd.excluded).sum();
    if excluded > 0 {
        warn!(
            "{} cells out of {} were missing or not recognized and are not counted",
            excluded,
            table.num_rows() * table.questions.len()
        );
        for qd in per_question.iter().filter(|qd| qd.excluded > 0) {
            debug!("summarize: {}: {} excluded cells", qd.question, qd.excluded);
        }
    }
    info!(
        "Counted {} answers, grand mean: {:?}",
        overall.total, grand_mean
    );

    SurveySummary {
        questions: table.questions.clone(),
        rows: table.num_rows() as u64,
        excluded,
        overall,
        per_question,
        mean_scores,
        grand_mean,
        categories,
    }
}
