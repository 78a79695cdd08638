use clap::Parser;

/// This is a tabulation program for Likert-scale questionnaires.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The file containing the survey description in JSON format.
    /// For more information about the file format, read the documentation of the manual module.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference file containing the summary of a survey in JSON format. If provided,
    /// likertsurvey will check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the survey will be written in JSON format to the given
    /// location. Setting this option overrides the output directory that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) The file containing the responses. Setting this option overrides the path that may
    /// be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (xlsx or csv) The type of the input. By default, it is guessed from the extension of the input file.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (list of comma-separated values or not specified) The names of the question columns, in order.
    /// Defaults to Q1,Q2,...,Q17.
    #[clap(long, value_parser, use_value_delimiter = true)]
    pub questions: Option<Vec<String>>,

    /// When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (q1 to q13, repeatable) The predefined questions to answer. Each answer is printed on its own line.
    #[clap(short, long, value_parser)]
    pub query: Vec<String>,

    /// If passed as an argument, unknown scale labels and unknown query codes are errors
    /// instead of being skipped.
    #[clap(long, takes_value = false)]
    pub strict: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parse_args() {
        let args = Args::parse_from([
            "likertsurvey",
            "--input",
            "data.csv",
            "-q",
            "q1",
            "--query",
            "q13",
            "--questions",
            "Q1,Q2",
            "--verbose",
        ]);
        assert_eq!(args.input, Some("data.csv".to_string()));
        assert_eq!(args.query, vec!["q1".to_string(), "q13".to_string()]);
        assert_eq!(
            args.questions,
            Some(vec!["Q1".to_string(), "Q2".to_string()])
        );
        assert!(args.verbose);
        assert!(!args.strict);
    }

    #[test]
    fn verbose_help() {
        let cmd = Args::command();
        let verbose = cmd
            .get_arguments()
            .find(|a| a.get_id() == "verbose")
            .unwrap();
        assert!(verbose.get_help().unwrap().contains("standard error"));
    }
}
