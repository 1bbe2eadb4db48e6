use nom::{
    bytes::complete::{take_till1, take_while},
    character::complete::u64 as unsigned,
    sequence::{pair, preceded},
    IResult,
};
use nom_locate::LocatedSpan;
use tracing::{debug, warn};

use crate::error::MazeError;
use crate::maze::{Maze, Symbols};

pub type Span<'a> = LocatedSpan<&'a str>;

/// Any Unicode whitespace separates tokens, not just ` \t\r\n`.
fn separator(input: Span) -> IResult<Span, Span> {
    take_while(char::is_whitespace)(input)
}

fn dimension(input: Span) -> IResult<Span, u64> {
    preceded(separator, unsigned)(input)
}

fn dimensions(input: Span) -> IResult<Span, (u64, u64)> {
    pair(dimension, dimension)(input)
}

fn token(input: Span) -> IResult<Span, Span> {
    preceded(separator, take_till1(char::is_whitespace))(input)
}

fn error_offset(err: &nom::Err<nom::error::Error<Span>>, fallback: usize) -> usize {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input.location_offset(),
        nom::Err::Incomplete(_) => fallback,
    }
}

fn single_char(token: Span) -> Option<char> {
    let mut chars = token.fragment().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Reads `N M` followed by `N * M` whitespace-separated cell tokens in
/// row-major order. Anything after the last cell is ignored.
pub fn parse_maze(input: &str, symbols: Symbols) -> Result<Maze, MazeError> {
    let span = Span::new(input);

    let (rest, (rows, cols)) = dimensions(span).map_err(|e| {
        let offset = error_offset(&e, input.len());
        MazeError::MissingDimensions {
            src: input.to_string(),
            span: (offset, 0).into(),
        }
    })?;

    let oversized = || MazeError::Oversized {
        rows,
        cols,
        src: input.to_string(),
        span: (0, rest.location_offset()).into(),
    };
    let n = usize::try_from(rows).map_err(|_| oversized())?;
    let m = usize::try_from(cols).map_err(|_| oversized())?;
    let expected = n.checked_mul(m).ok_or_else(oversized)?;

    debug!(rows = n, cols = m, "parsed dimensions");

    if expected == 0 {
        return Ok(Maze::with_symbols(Vec::new(), symbols));
    }

    let mut grid = Vec::new();
    let mut row = Vec::new();
    let mut remaining = rest;

    for found in 0..expected {
        let (next, tok) = token(remaining).map_err(|_| MazeError::Truncated {
            expected,
            found,
            src: input.to_string(),
            span: (input.len(), 0).into(),
        })?;

        let cell = single_char(tok).ok_or_else(|| MazeError::WideToken {
            token: tok.fragment().to_string(),
            src: input.to_string(),
            span: (tok.location_offset(), tok.fragment().len()).into(),
        })?;

        row.push(cell);
        if row.len() == m {
            grid.push(std::mem::take(&mut row));
        }
        remaining = next;
    }

    let trailing = remaining.fragment().split_whitespace().count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last grid cell");
    }

    Ok(Maze::with_symbols(grid, symbols))
}
