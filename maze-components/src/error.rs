use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Every way the maze input can be malformed.
///
/// Each variant keeps the raw input so miette can render the offending
/// token in context.
#[derive(Debug, Error, Diagnostic)]
pub enum MazeError {
    #[error("Failed to read grid dimensions")]
    #[diagnostic(
        code(maze::malformed_input::dimensions),
        help("Input must start with two unsigned integers: the row count N and the column count M")
    )]
    MissingDimensions {
        #[source_code]
        src: String,
        #[label("expected an unsigned integer here")]
        span: SourceSpan,
    },

    #[error("Input ended after {found} of {expected} cells")]
    #[diagnostic(
        code(maze::malformed_input::truncated),
        help("Provide exactly N x M single-character cell tokens")
    )]
    Truncated {
        expected: usize,
        found: usize,
        #[source_code]
        src: String,
        #[label("input ends here")]
        span: SourceSpan,
    },

    #[error("Cell token `{token}` is not a single character")]
    #[diagnostic(
        code(maze::malformed_input::wide_token),
        help("Cells are read one whitespace-separated token each, so `#.#` is one malformed cell rather than three; write `# . #` instead")
    )]
    WideToken {
        token: String,
        #[source_code]
        src: String,
        #[label("this token")]
        span: SourceSpan,
    },

    #[error("Grid of {rows} x {cols} cells overflows usize")]
    #[diagnostic(code(maze::malformed_input::oversized))]
    Oversized {
        rows: u64,
        cols: u64,
        #[source_code]
        src: String,
        #[label("dimensions declared here")]
        span: SourceSpan,
    },
}
