use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DistanceError {
    #[error("failed to read input")]
    #[diagnostic(
        code(list_distance::read_input),
        help("input must be UTF-8 text of whitespace-separated integers")
    )]
    ReadInput(#[source] std::io::Error),

    #[error("failed to write answer")]
    #[diagnostic(code(list_distance::write_output))]
    WriteOutput(#[source] std::io::Error),
}
