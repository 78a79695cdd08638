// Primitives for reading CSV files.

use csv::{Position, StringRecord};

use crate::survey::io_common::{clean_cell, get_col_index_mapping, make_default_id, select_cells};
use crate::survey::*;

pub fn read_csv_responses(
    path: String,
    cfs: &DataSource,
    questions: &[String],
) -> BSurveyResult<Vec<ParsedResponse>> {
    let default_id = make_default_id(&path);
    let (header_row, first_row) = cfs.row_indexes(0)?;

    let contents: Vec<u8> = fs::read(&path)
        .map_err(csv::Error::from)
        .context(CsvOpenSnafu { path: path.clone() })?;
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_slice());

    let mut mapping_o: Option<Vec<Option<usize>>> = None;
    let mut res: Vec<ParsedResponse> = Vec::new();
    let mut last_lineno: usize = 0;
    for line_r in rdr.into_records() {
        let line: StringRecord = line_r.context(CsvLineParseSnafu {
            lineno: last_lineno + 1,
        })?;
        // Row numbers count the empty lines, like in spreadsheets.
        let lineno = line
            .position()
            .map(|pos| record_line(&contents, pos))
            .unwrap_or(last_lineno + 1);
        last_lineno = lineno;
        let idx = lineno - 1;
        if idx == header_row {
            debug!("read_csv_responses: header: {:?}", line);
            let header: Vec<Option<String>> = line.iter().map(|s| Some(s.to_string())).collect();
            mapping_o = Some(get_col_index_mapping(questions, &header));
            continue;
        }
        if idx < first_row {
            debug!("read_csv_responses: skipping line {}", lineno);
            continue;
        }
        if line.iter().all(|s| s.trim().is_empty()) {
            debug!("read_csv_responses: blank line {}", lineno);
            continue;
        }
        let mapping = mapping_o
            .as_ref()
            .context(MissingHeaderSnafu { path: path.clone() })?;
        let cells = select_cells(mapping, |c| line.get(c).and_then(clean_cell));
        debug!("read_csv_responses: lineno: {:?} row: {:?}", lineno, &cells);
        res.push(ParsedResponse {
            id: Some(default_id(lineno)),
            cells,
        });
    }
    if mapping_o.is_none() {
        return Err(Box::new(SurveyError::MissingHeader { path }));
    }
    Ok(res)
}

// The position of a record is taken before the reader skips the empty lines that precede it.
fn record_line(contents: &[u8], pos: &Position) -> usize {
    let skipped = contents
        .get(pos.byte() as usize..)
        .unwrap_or(&[])
        .iter()
        .take_while(|b| **b == b'\n' || **b == b'\r')
        .filter(|b| **b == b'\n')
        .count();
    pos.line() as usize + skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_tmp(name: &str, contents: &str) -> String {
        let dir = std::env::temp_dir().join(format!("likertsurvey-csv-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let p = dir.join(name);
        fs::write(&p, contents).unwrap();
        p.display().to_string()
    }

    fn data_source(path: &str, header_row: Option<u64>) -> DataSource {
        let mut js = json!({"provider": "csv", "filePath": path});
        if let Some(h) = header_row {
            js["headerRowIndex"] = json!(h);
        }
        serde_json::from_value(js).unwrap()
    }

    fn questions() -> Vec<String> {
        vec!["Q1".to_string(), "Q2".to_string()]
    }

    #[test]
    fn header_after_blank_line() {
        let path = write_tmp("judul.csv", "Judul\n\nQ1,Q2\nSS,S\n\nCS,\n");
        let res = read_csv_responses(path.clone(), &data_source(&path, Some(3)), &questions())
            .unwrap();
        assert_eq!(
            res.iter().map(|pr| pr.cells.clone()).collect::<Vec<_>>(),
            vec![
                vec![Some("SS".to_string()), Some("S".to_string())],
                vec![Some("CS".to_string()), None],
            ]
        );
        assert_eq!(res[0].id, Some("judul.csv-00000004".to_string()));
        assert_eq!(res[1].id, Some("judul.csv-00000006".to_string()));
    }

    #[test]
    fn header_on_blank_line() {
        let path = write_tmp("blank_header.csv", "Judul\n\nQ1,Q2\nSS,S\n");
        let err = read_csv_responses(path.clone(), &data_source(&path, Some(2)), &questions())
            .unwrap_err();
        assert!(matches!(*err, SurveyError::MissingHeader { .. }));
    }

    #[test]
    fn header_past_the_end() {
        let path = write_tmp("short.csv", "Q1,Q2\nSS,S\n");
        let err = read_csv_responses(path.clone(), &data_source(&path, Some(5)), &questions())
            .unwrap_err();
        assert!(matches!(*err, SurveyError::MissingHeader { .. }));
    }
}
