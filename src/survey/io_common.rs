use std::collections::HashMap;
use std::path::Path;

use log::warn;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

pub fn make_default_id(path: &str) -> impl Fn(usize) -> String {
    let simplified_file_name = simplify_file_name(path);
    move |lineno| format!("{}-{:08}", simplified_file_name, lineno)
}

/// Finds the column of each question in the header.
///
/// The first column with a matching name is used. A question without a column
/// is reported and all its cells are missing.
pub fn get_col_index_mapping(questions: &[String], header: &[Option<String>]) -> Vec<Option<usize>> {
    let mut col_names: HashMap<&str, usize> = HashMap::new();
    for (idx, name) in header.iter().enumerate() {
        if let Some(n) = name {
            col_names.entry(n.trim()).or_insert(idx);
        }
    }
    questions
        .iter()
        .map(|q| {
            let idx = col_names.get(q.as_str()).cloned();
            if idx.is_none() {
                warn!(
                    "Question {} not found in the header {:?}, all its answers are excluded",
                    q, header
                );
            }
            idx
        })
        .collect()
}

/// Spaces around a label are removed. An empty cell is a missing answer.
pub fn clean_cell(s: &str) -> Option<String> {
    match s.trim() {
        "" => None,
        x => Some(x.to_string()),
    }
}

/// Selects the cells of the questions in a row.
pub fn select_cells<F>(mapping: &[Option<usize>], cell: F) -> Vec<Option<String>>
where
    F: Fn(usize) -> Option<String>,
{
    mapping
        .iter()
        .map(|idx_o| idx_o.and_then(&cell))
        .collect()
}
