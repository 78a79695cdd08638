// Primitives for reading Excel workbooks, as exported by the form services.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};

use crate::survey::io_common::{clean_cell, get_col_index_mapping, make_default_id, select_cells};
use crate::survey::*;

pub fn read_excel_responses(
    path: String,
    cfs: &DataSource,
    questions: &[String],
) -> BSurveyResult<Vec<ParsedResponse>> {
    let default_id = make_default_id(&path);
    let wrange = get_range(&path, cfs)?;

    // The range starts at the first non-empty row, the row numbers are the rows of the sheet.
    let range_start = match wrange.start() {
        Some((r, _)) => r as usize,
        None => return Err(Box::new(SurveyError::EmptyExcel { path })),
    };
    let (header_row, first_row) = cfs.row_indexes(range_start)?;
    debug!(
        "read_excel_responses: range start: {} header: {} first row: {}",
        range_start, header_row, first_row
    );
    if header_row < range_start {
        return Err(Box::new(SurveyError::MissingHeader { path }));
    }

    let header = wrange
        .rows()
        .nth(header_row - range_start)
        .context(MissingHeaderSnafu { path: path.clone() })?;
    debug!("read_excel_responses: header: {:?}", header);
    let header_names: Vec<Option<String>> = header
        .iter()
        .map(|elt| match elt {
            DataType::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect();
    let mapping = get_col_index_mapping(questions, &header_names);

    let mut res: Vec<ParsedResponse> = Vec::new();
    for (idx, row) in wrange
        .rows()
        .enumerate()
        .skip(first_row - range_start)
    {
        let lineno = range_start + idx + 1;
        if row.iter().all(|elt| *elt == DataType::Empty) {
            debug!("read_excel_responses: blank row {}", lineno);
            continue;
        }
        let cells = select_cells(&mapping, |c| row.get(c).and_then(read_cell));
        debug!("read_excel_responses: row {}: {:?}", lineno, &cells);
        res.push(ParsedResponse {
            id: Some(default_id(lineno)),
            cells,
        });
    }
    Ok(res)
}

fn read_cell(elt: &DataType) -> Option<String> {
    match elt {
        DataType::String(s) => clean_cell(s),
        DataType::Empty => None,
        // Numbers, dates and booleans are kept as they are. They never match a label.
        x => Some(format!("{:?}", x)),
    }
}

fn get_range(path: &String, cfs: &DataSource) -> BSurveyResult<Range<DataType>> {
    let worksheet_name_o = cfs.excel_worksheet_name.clone();
    debug!(
        "read_excel_responses: path: {:?} worksheet: {:?}",
        &path, &worksheet_name_o
    );
    let mut workbook: Xlsx<_> =
        open_workbook(path.clone()).context(OpeningExcelSnafu { path: path.clone() })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(&worksheet_name)
            .context(MissingWorksheetSnafu {
                path: path.clone(),
                worksheet: worksheet_name.clone(),
            })?
            .context(OpeningExcelSnafu { path: path.clone() })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => Err(Box::new(SurveyError::EmptyExcel { path: path.clone() })),
            [(worksheet_name, wrange)] => {
                debug!(
                    "read_excel_responses: path: {:?} worksheet: {:?}",
                    &path, &worksheet_name
                );
                Ok(wrange.clone())
            }
            _ => Err(Box::new(SurveyError::TooManyWorksheets { path: path.clone() })),
        }
    }
}
