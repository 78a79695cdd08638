use log::{debug, info, warn};

use likert_tally::builder::SurveyBuilder;
use likert_tally::query;
use likert_tally::*;
use snafu::prelude::*;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::survey::config_reader::*;
use crate::survey::io_common::simplify_file_name;

pub mod config_reader;
mod io_common;
mod io_csv;
mod io_xlsx;

#[derive(Debug, Snafu)]
pub enum SurveyError {
    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The Excel file {path} has no worksheet or no header row"))]
    EmptyExcel { path: String },
    #[snafu(display("Worksheet {worksheet} not found in {path}"))]
    MissingWorksheet { path: String, worksheet: String },
    #[snafu(display(
        "The Excel file {path} has several worksheets, the worksheet name must be provided"
    ))]
    TooManyWorksheets { path: String },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error parsing CSV line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("The file {path} has no header row"))]
    MissingHeader { path: String },
    #[snafu(display("Provider {provider} is not supported (use xlsx or csv)"))]
    UnknownProvider { provider: String },
    #[snafu(display("Error reading file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Expected a row number (1 or more), found {content}"))]
    ParsingJsonNumber { content: String },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Missing parent directory for {path}"))]
    MissingParentDir { path: String },
    #[snafu(display("No input: provide a configuration file or an input file"))]
    MissingInput {},
    #[snafu(display("Response {id}: {source}"))]
    InvalidResponse { source: SurveyErrors, id: String },
    #[snafu(display("{source}"))]
    Tally { source: SurveyErrors },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SurveyResult<T> = Result<T, SurveyError>;
pub type BSurveyResult<T> = Result<T, Box<SurveyError>>;

/// A response, as parsed by the readers.
/// This is before checking the labels against the scale.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedResponse {
    pub id: Option<String>,
    /// One cell per question, in the order of the questions. Empty cells are `None`.
    pub cells: Vec<Option<String>>,
}

/// The outcome of a run: the summary for the charts and the answers to the queries.
#[derive(PartialEq, Debug, Clone)]
pub struct SurveyOutcome {
    pub summary: JSValue,
    pub answers: Vec<String>,
}

fn read_survey_data(cfs: &DataSource, questions: &[String]) -> BSurveyResult<Vec<ParsedResponse>> {
    let p2 = cfs.file_path.clone();
    info!("Attempting to read survey file {:?}", p2);
    match cfs.provider.as_str() {
        "xlsx" => io_xlsx::read_excel_responses(p2, cfs, questions),
        "csv" => io_csv::read_csv_responses(p2, cfs, questions),
        x => Err(Box::new(SurveyError::UnknownProvider {
            provider: x.to_string(),
        })),
    }
}

fn build_table(
    parsed: &[ParsedResponse],
    questions: &[String],
    policy: LabelPolicy,
) -> SurveyResult<ResponseTable> {
    let mut builder = SurveyBuilder::new(policy)
        .context(TallySnafu {})?
        .questions(questions)
        .context(TallySnafu {})?;

    let mut unknown_labels: BTreeSet<&str> = BTreeSet::new();
    for (idx, pr) in parsed.iter().enumerate() {
        let id = pr.id.clone().unwrap_or_else(|| format!("#{}", idx + 1));
        debug!("build_table: {}: {:?}", id, pr.cells);
        for label in pr.cells.iter().flatten() {
            if ScaleLevel::from_label(label).is_err() {
                unknown_labels.insert(label.as_str());
            }
        }
        builder
            .add_response(&Response {
                id: pr.id.clone(),
                answers: pr.cells.clone(),
            })
            .context(InvalidResponseSnafu { id })?;
    }
    if !unknown_labels.is_empty() {
        warn!(
            "Unrecognized labels, not counted: {:?}",
            unknown_labels.iter().collect::<Vec<_>>()
        );
    }
    Ok(builder.build())
}

/// The summary in JSON, as consumed by the charts.
pub fn build_summary_js(survey_name: &str, summary: &SurveySummary) -> JSValue {
    let c = OutputConfig {
        survey: survey_name.to_string(),
        rows: summary.rows,
        excluded_cells: summary.excluded,
    };

    let overall: Vec<JSValue> = summary
        .overall
        .tally
        .iter()
        .map(|st| json!({"scale": st.scale.label(), "count": st.count, "percentage": st.percentage}))
        .collect();

    let per_question: Vec<JSValue> = summary
        .per_question
        .iter()
        .map(|qd| {
            let mut tally: JSMap<String, JSValue> = JSMap::new();
            for st in qd.distribution.tally.iter() {
                tally.insert(st.scale.label().to_string(), json!(st.count));
            }
            json!({"question": qd.question, "excluded": qd.excluded, "tally": tally})
        })
        .collect();

    // The means are only rounded for display.
    let mean_scores: Vec<JSValue> = summary
        .mean_scores
        .iter()
        .map(|ms| json!({"question": ms.question, "mean": ms.mean.map(round2)}))
        .collect();

    let categories: Vec<JSValue> = summary
        .categories
        .tally
        .iter()
        .map(|ct| {
            json!({"category": ct.category.label(), "count": ct.count, "percentage": ct.percentage})
        })
        .collect();

    json!({
        "config": c,
        "results": {
            "overall": overall,
            "perQuestion": per_question,
            "meanScores": mean_scores,
            "categories": categories,
        }
    })
}

/// Answers the queries in order.
///
/// Empty queries are skipped. Unknown codes are skipped with a warning, unless `strict` is set.
pub fn answer_queries(
    queries: &[String],
    summary: &SurveySummary,
    strict: bool,
) -> SurveyResult<Vec<String>> {
    let mut res: Vec<String> = Vec::new();
    for q in queries.iter() {
        match query::answer(q, summary) {
            Ok(Some(a)) => {
                debug!("answer_queries: {:?} -> {:?}", q, a);
                res.push(a);
            }
            Ok(None) => {
                debug!("answer_queries: empty query, nothing to answer");
            }
            Err(e @ SurveyErrors::UnknownQueryCode(_)) if !strict => {
                warn!("Skipping query: {} (expected q1 to q13)", e);
            }
            Err(e) => {
                return Err(e).context(TallySnafu {});
            }
        }
    }
    Ok(res)
}

/// Runs the pipeline: load, aggregate, answer the queries and assemble the summary.
pub fn tabulate(
    config: &SurveyConfig,
    queries: &[String],
    strict: bool,
) -> BSurveyResult<SurveyOutcome> {
    let questions = config.questions();
    let policy = if strict {
        LabelPolicy::Reject
    } else {
        config.label_policy()?
    };
    debug!("tabulate: questions: {:?} policy: {:?}", questions, policy);

    let parsed = read_survey_data(&config.data_source, &questions)?;
    info!("Read {} responses", parsed.len());

    let table = build_table(&parsed, &questions, policy)?;
    let summary = summarize(&table);
    let answers = answer_queries(queries, &summary, strict)?;
    let summary_js = build_summary_js(&config.output_settings.survey_name, &summary);
    Ok(SurveyOutcome {
        summary: summary_js,
        answers,
    })
}

fn write_summary(out: &str, pretty_js: &str) -> SurveyResult<()> {
    if out == "stdout" {
        println!("{}", pretty_js);
        return Ok(());
    }
    info!("Writing summary to {:?}", out);
    if let Some(parent) = Path::new(out).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context(WritingSummarySnafu { path: out })?;
        }
    }
    fs::write(out, pretty_js).context(WritingSummarySnafu { path: out })
}

/// Compares the summary with a reference summary. The differences are printed.
pub fn check_reference(reference_path: &str, pretty_js_stats: &str) -> SurveyResult<()> {
    let summary_ref = read_summary(reference_path)?;
    debug!("check_reference: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        whatever!("Difference detected between calculated summary and reference summary")
    }
    Ok(())
}

fn guess_provider(path: &str) -> Option<String> {
    let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "csv" => Some("csv".to_string()),
        "xlsx" | "xlsm" => Some("xlsx".to_string()),
        _ => None,
    }
}

/// Builds the configuration from the configuration file (if any) and the command line.
/// The command line takes precedence. The file paths are resolved.
pub fn load_config(args: &Args) -> BSurveyResult<(SurveyConfig, PathBuf)> {
    let (mut config, root_p) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root_p = Path::new(config_path.as_str())
                .parent()
                .context(MissingParentDirSnafu {
                    path: config_path.clone(),
                })?
                .to_path_buf();
            let data_p: PathBuf = root_p.join(&config.data_source.file_path);
            let mut config = config;
            config.data_source.file_path = data_p.display().to_string();
            (config, root_p)
        }
        None => {
            let input = args.input.clone().context(MissingInputSnafu {})?;
            let name = Path::new(input.as_str())
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| simplify_file_name(&input));
            let provider = guess_provider(&input).unwrap_or_else(|| "xlsx".to_string());
            (
                SurveyConfig::from_input(&name, &provider, &input),
                PathBuf::new(),
            )
        }
    };

    if let Some(input) = &args.input {
        config.data_source.file_path = input.clone();
        if let Some(provider) = guess_provider(input) {
            config.data_source.provider = provider;
        }
    }
    if let Some(input_type) = &args.input_type {
        config.data_source.provider = input_type.clone();
    }
    if let Some(worksheet) = &args.excel_worksheet_name {
        config.data_source.excel_worksheet_name = Some(worksheet.clone());
    }
    if let Some(questions) = &args.questions {
        config.questions = Some(questions.clone());
    }
    if args.strict {
        config.rules = Some(SurveyRules {
            unknown_label_policy: Some("reject".to_string()),
        });
    }
    Ok((config, root_p))
}

// Where the summary goes. Without any setting, it is printed unless queries are answered.
fn output_path(args: &Args, config: &SurveyConfig, root_p: &Path) -> Option<String> {
    if let Some(out) = &args.out {
        return Some(out.clone());
    }
    if let Some(dir) = &config.output_settings.output_directory {
        let p: PathBuf = root_p.join(dir).join(format!(
            "{}_summary.json",
            config.output_settings.survey_name
        ));
        return Some(p.display().to_string());
    }
    if args.query.is_empty() {
        Some("stdout".to_string())
    } else {
        None
    }
}

pub fn run_survey(args: &Args) -> BSurveyResult<()> {
    let (config, root_p) = load_config(args)?;
    info!("config: {:?}", config);

    let outcome = tabulate(&config, &args.query, args.strict)?;
    for a in outcome.answers.iter() {
        println!("{}", a);
    }

    let pretty_js_stats =
        serde_json::to_string_pretty(&outcome.summary).context(ParsingJsonSnafu {})?;
    if let Some(out) = output_path(args, &config, &root_p) {
        write_summary(&out, &pretty_js_stats)?;
    }

    // The reference summary, if provided for comparison
    if let Some(reference_p) = &args.reference {
        check_reference(reference_p, &pretty_js_stats)?;
    }
    Ok(())
}

#[cfg(test)]
fn test_dir() -> String {
    format!("{}/testdata", env!("CARGO_MANIFEST_DIR"))
}

#[cfg(test)]
fn test_args(test_name: &str, queries: &[&str]) -> Args {
    Args {
        config: Some(format!(
            "{}/{}/{}_config.json",
            test_dir(),
            test_name,
            test_name
        )),
        reference: Some(format!(
            "{}/{}/{}_expected_summary.json",
            test_dir(),
            test_name,
            test_name
        )),
        out: None,
        input: None,
        input_type: None,
        questions: None,
        excel_worksheet_name: None,
        query: queries.iter().map(|s| s.to_string()).collect(),
        strict: false,
        verbose: false,
    }
}

#[cfg(test)]
pub fn test_wrapper(test_name: &str, queries: &[&str]) -> Vec<String> {
    let args = test_args(test_name, queries);
    let (config, _) = load_config(&args).unwrap();
    let outcome = tabulate(&config, &args.query, args.strict).unwrap();
    let pretty_js_stats = serde_json::to_string_pretty(&outcome.summary).unwrap();
    if let Err(e) = check_reference(args.reference.as_ref().unwrap(), &pretty_js_stats) {
        panic!("{}: {}", test_name, e);
    }
    outcome.answers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn input_args(file: &str, queries: &[&str]) -> Args {
        Args {
            config: None,
            reference: None,
            out: None,
            input: Some(format!("{}/{}", test_dir(), file)),
            input_type: None,
            questions: None,
            excel_worksheet_name: None,
            query: queries.iter().map(|s| s.to_string()).collect(),
            strict: false,
            verbose: false,
        }
    }

    fn run_args(args: &Args) -> BSurveyResult<SurveyOutcome> {
        let (config, _) = load_config(args)?;
        tabulate(&config, &args.query, args.strict)
    }

    #[test]
    fn small_survey() {
        init();
        let answers = test_wrapper(
            "small",
            &[
                "q1", "q2", "q3", "q4", "q9", "q10", "q11", "q12", "q13",
            ],
        );
        assert_eq!(
            answers,
            vec![
                "SS|3|27.27",
                "CTS|1|9.09",
                "Q1|3|75.0",
                "Q1|1|25.0",
                "Q3:50.0",
                "3.91",
                "Q1:5.75",
                "Q3:1.33",
                "positif=5:45.45|netral=2:18.18|negatif=4:36.36",
            ]
        );
    }

    #[test]
    fn header_below_title_rows() {
        init();
        let answers = test_wrapper("title_rows", &["q1", "q13"]);
        assert_eq!(
            answers,
            vec!["S|4|66.67", "positif=5:83.33|netral=1:16.67|negatif=0:0.0"]
        );
    }

    #[test]
    fn standard_questionnaire() {
        init();
        let args = input_args(
            "kuesioner.csv",
            &["q1", "q2", "q3", "q8", "q9", "q10", "q11", "q12", "q13"],
        );
        let outcome = run_args(&args).unwrap();
        assert_eq!(outcome.summary["config"]["rows"], json!(4));
        assert_eq!(outcome.summary["config"]["excludedCells"], json!(2));
        assert_eq!(outcome.summary["config"]["survey"], json!("kuesioner"));
        assert_eq!(
            outcome.summary["results"]["perQuestion"]
                .as_array()
                .unwrap()
                .len(),
            17
        );
        assert_eq!(
            outcome.answers,
            vec![
                "S|41|62.12",
                "CTS|1|1.52",
                "Q2|3|75.0",
                "Q17|2|50.0",
                "Q16:25.0|Q17:50.0",
                "4.68",
                "Q2:5.75",
                "Q17:1.75",
                "positif=49:74.24|netral=12:18.18|negatif=5:7.58",
            ]
        );
    }

    #[test]
    fn empty_survey() {
        init();
        let args = input_args("empty.csv", &["q1", "q10", "q13"]);
        let outcome = run_args(&args).unwrap();
        assert_eq!(outcome.summary["config"]["rows"], json!(0));
        assert_eq!(
            outcome.answers,
            vec![
                "SS|0|0.0",
                "0",
                "positif=0:0.0|netral=0:0.0|negatif=0:0.0"
            ]
        );
        let means = outcome.summary["results"]["meanScores"].as_array().unwrap();
        assert!(means.iter().all(|m| m["mean"].is_null()));
    }

    #[test]
    fn unknown_and_empty_queries() {
        init();
        let args = input_args("kuesioner.csv", &["", "q14", "q1"]);
        let outcome = run_args(&args).unwrap();
        assert_eq!(outcome.answers, vec!["S|41|62.12"]);
    }

    #[test]
    fn strict_unknown_query() {
        init();
        let mut args = input_args("empty.csv", &["q14"]);
        args.strict = true;
        let err = run_args(&args).unwrap_err();
        assert!(matches!(
            *err,
            SurveyError::Tally {
                source: SurveyErrors::UnknownQueryCode(_)
            }
        ));
    }

    #[test]
    fn strict_unknown_label() {
        init();
        let mut args = input_args("kuesioner.csv", &[]);
        args.strict = true;
        let err = run_args(&args).unwrap_err();
        match *err {
            SurveyError::InvalidResponse { source, .. } => {
                assert_eq!(source, SurveyErrors::UnknownScale("Setuju".to_string()))
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn question_override() {
        init();
        let mut args = input_args("kuesioner.csv", &["q1", "q9"]);
        args.questions = Some(vec!["Q16".to_string(), "Q17".to_string()]);
        let outcome = run_args(&args).unwrap();
        assert_eq!(outcome.answers, vec!["STS|3|50.0", "Q16:25.0|Q17:50.0"]);
    }

    #[test]
    fn missing_question_column() {
        init();
        let mut args = input_args("kuesioner.csv", &["q1"]);
        args.questions = Some(vec!["Q1".to_string(), "Q18".to_string()]);
        let outcome = run_args(&args).unwrap();
        assert_eq!(outcome.summary["config"]["excludedCells"], json!(4));
        assert_eq!(outcome.answers, vec!["S|3|75.0"]);
    }

    #[test]
    fn missing_file() {
        init();
        let args = input_args("does_not_exist.csv", &[]);
        let err = run_args(&args).unwrap_err();
        assert!(matches!(*err, SurveyError::CsvOpen { .. }));

        let args = input_args("does_not_exist.xlsx", &[]);
        let err = run_args(&args).unwrap_err();
        assert!(matches!(*err, SurveyError::OpeningExcel { .. }));
    }

    #[test]
    fn unknown_provider() {
        init();
        let mut args = input_args("kuesioner.csv", &[]);
        args.input_type = Some("ods".to_string());
        let err = run_args(&args).unwrap_err();
        assert!(matches!(*err, SurveyError::UnknownProvider { .. }));
    }

    #[test]
    fn missing_input() {
        let mut args = input_args("kuesioner.csv", &[]);
        args.input = None;
        let err = load_config(&args).unwrap_err();
        assert!(matches!(*err, SurveyError::MissingInput {}));
    }

    #[test]
    fn reference_mismatch() {
        init();
        let args = input_args("kuesioner.csv", &[]);
        let outcome = run_args(&args).unwrap();
        let pretty_js_stats = serde_json::to_string_pretty(&outcome.summary).unwrap();
        let reference = format!("{}/small/small_expected_summary.json", test_dir());
        assert!(check_reference(&reference, &pretty_js_stats).is_err());
    }

    #[test]
    fn summary_is_written() {
        init();
        let args = input_args("small/small.csv", &[]);
        let outcome = run_args(&args).unwrap();
        let pretty_js_stats = serde_json::to_string_pretty(&outcome.summary).unwrap();
        let out = std::env::temp_dir()
            .join(format!("likertsurvey-{}", std::process::id()))
            .join("summary.json")
            .display()
            .to_string();
        write_summary(&out, &pretty_js_stats).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), pretty_js_stats);
    }

    #[test]
    fn header_after_blank_line() {
        init();
        let answers = test_wrapper("judul", &["q1", "q13"]);
        assert_eq!(
            answers,
            vec!["S|4|66.67", "positif=5:83.33|netral=1:16.67|negatif=0:0.0"]
        );
    }

    #[test]
    fn standard_questionnaire_xlsx() {
        init();
        let answers = test_wrapper("kuesioner_xlsx", &["q1", "q6", "q9", "q10", "q12", "q13"]);
        assert_eq!(
            answers,
            vec![
                "S|41|63.08",
                "",
                "Q16:25.0|Q17:50.0",
                "4.71",
                "Q17:1.33",
                "positif=49:75.38|netral=12:18.46|negatif=4:6.15",
            ]
        );
    }

    #[test]
    fn strict_non_text_cell() {
        init();
        let mut args = input_args("kuesioner_xlsx/kuesioner_xlsx.xlsx", &[]);
        args.strict = true;
        let err = run_args(&args).unwrap_err();
        assert!(matches!(
            *err,
            SurveyError::InvalidResponse {
                source: SurveyErrors::UnknownScale(_),
                ..
            }
        ));
    }

    fn jawaban_config(
        worksheet: Option<&str>,
        header_row: Option<u64>,
        first_row: Option<u64>,
    ) -> SurveyConfig {
        let mut js = json!({
            "outputSettings": {"surveyName": "jawaban"},
            "dataSource": {"provider": "xlsx", "filePath": format!("{}/jawaban.xlsx", test_dir())},
            "questions": ["Q1", "Q2"]
        });
        if let Some(w) = worksheet {
            js["dataSource"]["excelWorksheetName"] = json!(w);
        }
        if let Some(h) = header_row {
            js["dataSource"]["headerRowIndex"] = json!(h);
        }
        if let Some(f) = first_row {
            js["dataSource"]["firstDataRowIndex"] = json!(f);
        }
        serde_json::from_value(js).unwrap()
    }

    fn run_jawaban(config: &SurveyConfig) -> BSurveyResult<SurveyOutcome> {
        tabulate(config, &["q1".to_string(), "q13".to_string()], false)
    }

    #[test]
    fn sheet_rows_below_blank_rows() {
        init();
        // The header is on row 3 of the sheet, in column B.
        let outcome = run_jawaban(&jawaban_config(Some("Jawaban"), Some(3), None)).unwrap();
        assert_eq!(outcome.summary["config"]["rows"], json!(3));
        assert_eq!(
            outcome.answers,
            vec!["S|4|66.67", "positif=5:83.33|netral=1:16.67|negatif=0:0.0"]
        );

        // Without a header row, the first non-empty row is the header.
        let outcome = run_jawaban(&jawaban_config(Some("Jawaban"), None, None)).unwrap();
        assert_eq!(outcome.summary["config"]["rows"], json!(3));

        let outcome = run_jawaban(&jawaban_config(Some("Jawaban"), Some(3), Some(5))).unwrap();
        assert_eq!(
            outcome.answers,
            vec!["S|2|50.0", "positif=3:75.0|netral=1:25.0|negatif=0:0.0"]
        );
    }

    #[test]
    fn sheet_header_outside_of_the_data() {
        init();
        let err = run_jawaban(&jawaban_config(Some("Jawaban"), Some(1), None)).unwrap_err();
        assert!(matches!(*err, SurveyError::MissingHeader { .. }));

        let err = run_jawaban(&jawaban_config(Some("Jawaban"), Some(9), None)).unwrap_err();
        assert!(matches!(*err, SurveyError::MissingHeader { .. }));
    }

    #[test]
    fn worksheet_selection() {
        init();
        let err = run_jawaban(&jawaban_config(None, None, None)).unwrap_err();
        assert!(matches!(*err, SurveyError::TooManyWorksheets { .. }));

        let err = run_jawaban(&jawaban_config(Some("Sheet9"), None, None)).unwrap_err();
        match *err {
            SurveyError::MissingWorksheet { worksheet, .. } => assert_eq!(worksheet, "Sheet9"),
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn guess_providers() {
        assert_eq!(guess_provider("a/b.csv"), Some("csv".to_string()));
        assert_eq!(guess_provider("data_kuesioner.XLSX"), Some("xlsx".to_string()));
        assert_eq!(guess_provider("data"), None);
    }
}
