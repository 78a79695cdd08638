/*!

This is the long-form manual for `likert_tally` and `likertsurvey`.

## Input formats

The following formats are supported:
* `xlsx` Excel workbooks, as exported by Google Forms or Microsoft Forms
* `csv` Comma Separated Values

In both cases, the first row (by default) is a header that names the columns. The
columns `Q1` to `Q17` hold the answers, one respondent per row. Other columns (timestamp,
name, email, ...) are ignored, and the question columns may appear in any order.

```text
Timestamp,Q1,Q2,Q3,...,Q17
2024-03-01 10:00,SS,S,CS,...,TS
2024-03-01 10:05,S,S,STS,...,CS
```

### Scale labels

| Label | Meaning             | Score | Category  |
|-------|---------------------|-------|-----------|
| `SS`  | sangat setuju       | 6     | `positif` |
| `S`   | setuju              | 5     | `positif` |
| `CS`  | cukup setuju        | 4     | `netral`  |
| `CTS` | cukup tidak setuju  | 3     | `negatif` |
| `TS`  | tidak setuju        | 2     | `negatif` |
| `STS` | sangat tidak setuju | 1     | `negatif` |

Labels are case-sensitive. Spaces around a label are removed when reading a file.

A cell that is empty, or that holds anything else than these labels, is *excluded*: it is
not part of any count, percentage or mean. The number of excluded cells is reported
in the logs and in the summary. With the `reject` policy (`--strict` on the command line),
such a cell stops the processing instead.

### `xlsx`

The worksheet is chosen with `excelWorksheetName`. If it is not given, the workbook must
contain a single worksheet.

### `csv`

Simple CSV reader, with `,` as the delimiter.

## Queries

| Code  | Question                                                   | Answer                       |
|-------|------------------------------------------------------------|------------------------------|
| `q1`  | which answer is the most common?                           | `SS\|120\|35.29`               |
| `q2`  | which answer is the least common?                          | `STS\|3\|0.88`                 |
| `q3`  | which question received the most `SS`?                     | `Q4\|12\|60.0`                 |
| `q4`  | which question received the most `S`?                      | `Q1\|11\|55.0`                 |
| `q5`  | which question received the most `CS`?                     | same as above, or an empty answer when nobody chose `CS` |
| `q6`  | which question received the most `CTS`?                    | same as above                |
| `q7`  | which question received the most `TS`?                     | same as above                |
| `q8`  | which question received the most `STS`?                    | same as above                |
| `q9`  | which questions received a `STS`, and how often?           | `Q2:5.0\|Q9:10.0`             |
| `q10` | what is the mean score, over all the answers?              | `4.87`                       |
| `q11` | which question has the highest mean score?                 | `Q4:5.4`                     |
| `q12` | which question has the lowest mean score?                  | `Q9:3.95`                    |
| `q13` | how are the answers split between positive, neutral and negative? | `positif=200:58.82\|netral=100:29.41\|negatif=40:11.76` |

Percentages in `q1`, `q2` and `q13` are relative to all the counted answers. Percentages
in `q3` to `q9` are relative to the number of respondents.

All numbers are rounded to 2 decimals, half away from zero.

Ties are broken by order: the first level (in the order of the table above) or the first
question wins.

When nobody chose the level, `q3` to `q8` give an empty answer: there is no question to
name, so no `None|0|0.0` placeholder is printed. In the same way `q9` gives an empty answer
when nobody chose `STS`, and `q11`/`q12` when no question has a mean. `q10` gives `0` when there is no answer
at all. An empty query gives no answer.

## Configuration

The program accepts a configuration file in JSON:

```json
{
  "outputSettings": {
    "surveyName": "Kuesioner 2024",
    "outputDirectory": "output"
  },
  "dataSource": {
    "provider": "xlsx",
    "filePath": "data_kuesioner.xlsx",
    "excelWorksheetName": "Sheet1",
    "headerRowIndex": 1,
    "firstDataRowIndex": 2
  },
  "questions": ["Q1", "Q2", "Q3"],
  "rules": {
    "unknownLabelPolicy": "exclude"
  }
}
```

Only `outputSettings.surveyName`, `dataSource.provider` and `dataSource.filePath` are
mandatory. `filePath` and `outputDirectory` are relative to the configuration file.
Row indexes start at 1, like in spreadsheets, and count the blank rows. Without
`headerRowIndex`, the header is the first row of a CSV file, or the first non-empty row of
the worksheet.

When `outputDirectory` is set, the summary is written to
`<outputDirectory>/<surveyName>_summary.json`.

## Summary

The summary is a JSON document with the data for the charts:
* `overall` the count and percentage of each answer (bar and pie charts)
* `perQuestion` the counts of each answer for every question (stacked bar chart)
* `meanScores` the mean score of every question (bar chart)
* `categories` the positive, neutral and negative counts

 */
