use crate::survey::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "surveyName")]
    pub survey_name: String,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
}

/// The header of the summary.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub survey: String,
    pub rows: u64,
    #[serde(rename = "excludedCells")]
    pub excluded_cells: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "headerRowIndex")]
    _header_row_index: Option<JSValue>,
    #[serde(rename = "firstDataRowIndex")]
    _first_data_row_index: Option<JSValue>,
}

impl DataSource {
    /// The row of the header and the first row with answers, starting from 0.
    ///
    /// Without `headerRowIndex`, the header is on `default_header`. The answers start on the
    /// row after the header unless `firstDataRowIndex` says otherwise.
    pub fn row_indexes(&self, default_header: usize) -> SurveyResult<(usize, usize)> {
        let header = read_js_int(&self._header_row_index, default_header + 1)? - 1;
        let first = read_js_int(&self._first_data_row_index, header + 2)? - 1;
        if first <= header {
            whatever!(
                "firstDataRowIndex ({}) must come after headerRowIndex ({})",
                first + 1,
                header + 1
            )
        }
        Ok((header, first))
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRules {
    #[serde(rename = "unknownLabelPolicy")]
    pub unknown_label_policy: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: OutputSettings,
    #[serde(rename = "dataSource")]
    pub data_source: DataSource,
    pub questions: Option<Vec<String>>,
    pub rules: Option<SurveyRules>,
}

impl SurveyConfig {
    /// The configuration for a single input file, with the default settings.
    pub fn from_input(survey_name: &str, provider: &str, file_path: &str) -> SurveyConfig {
        SurveyConfig {
            output_settings: OutputSettings {
                survey_name: survey_name.to_string(),
                output_directory: None,
            },
            data_source: DataSource {
                provider: provider.to_string(),
                file_path: file_path.to_string(),
                excel_worksheet_name: None,
                _header_row_index: None,
                _first_data_row_index: None,
            },
            questions: None,
            rules: None,
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.clone().unwrap_or_else(default_questions)
    }

    pub fn label_policy(&self) -> SurveyResult<LabelPolicy> {
        let policy = self
            .rules
            .as_ref()
            .and_then(|r| r.unknown_label_policy.clone());
        match policy.as_deref() {
            None | Some("exclude") => Ok(LabelPolicy::Exclude),
            Some("reject") => Ok(LabelPolicy::Reject),
            Some(x) => whatever!("unknown label policy: {} (use exclude or reject)", x),
        }
    }
}

pub fn read_config(path: &str) -> BSurveyResult<SurveyConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: SurveyConfig = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    Ok(config)
}

pub fn read_summary(path: &str) -> SurveyResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

// Row numbers start at 1, like in spreadsheets.
fn read_js_int(x: &Option<JSValue>, default: usize) -> SurveyResult<usize> {
    let res = match x {
        None => Some(default),
        Some(JSValue::Number(n)) => n.as_u64().map(|x| x as usize),
        Some(JSValue::String(s)) => s.trim().parse::<usize>().ok(),
        Some(_) => None,
    };
    res.filter(|x| *x >= 1).with_context(|| ParsingJsonNumberSnafu {
        content: x.as_ref().map(|v| v.to_string()).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source(header: Option<JSValue>, first: Option<JSValue>) -> DataSource {
        DataSource {
            provider: "csv".to_string(),
            file_path: "data.csv".to_string(),
            excel_worksheet_name: None,
            _header_row_index: header,
            _first_data_row_index: first,
        }
    }

    #[test]
    fn row_indexes() {
        let cfs = source(None, None);
        assert_eq!(cfs.row_indexes(0).unwrap(), (0, 1));
        assert_eq!(cfs.row_indexes(4).unwrap(), (4, 5));

        let cfs = source(Some(json!(3)), None);
        assert_eq!(cfs.row_indexes(0).unwrap(), (2, 3));
        assert_eq!(cfs.row_indexes(7).unwrap(), (2, 3));

        let cfs = source(Some(json!("2")), Some(json!(5)));
        assert_eq!(cfs.row_indexes(0).unwrap(), (1, 4));
    }

    #[test]
    fn bad_row_indexes() {
        assert!(source(Some(json!(0)), None).row_indexes(0).is_err());
        assert!(source(Some(json!("A")), None).row_indexes(0).is_err());
        assert!(source(Some(json!(2)), Some(json!(2)))
            .row_indexes(0)
            .is_err());
    }

    #[test]
    fn parse_config() {
        let js = r#"{
            "outputSettings": {"surveyName": "kuesioner"},
            "dataSource": {"provider": "xlsx", "filePath": "data.xlsx", "excelWorksheetName": "Form"},
            "rules": {"unknownLabelPolicy": "reject"}
        }"#;
        let config: SurveyConfig = serde_json::from_str(js).unwrap();
        assert_eq!(config.output_settings.survey_name, "kuesioner");
        assert_eq!(config.output_settings.output_directory, None);
        assert_eq!(
            config.data_source.excel_worksheet_name,
            Some("Form".to_string())
        );
        assert_eq!(config.questions().len(), 17);
        assert_eq!(config.label_policy().unwrap(), LabelPolicy::Reject);
    }

    #[test]
    fn label_policies() {
        let mut config = SurveyConfig::from_input("s", "csv", "s.csv");
        assert_eq!(config.label_policy().unwrap(), LabelPolicy::Exclude);
        config.rules = Some(SurveyRules {
            unknown_label_policy: Some("ignore".to_string()),
        });
        assert!(config.label_policy().is_err());
    }
}
