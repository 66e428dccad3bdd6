//! Reading and writing point sets in a whitespace-separated text format.
//!
//! The format is a flat token stream: the first two tokens are the integers
//! `n` (point count) and `d` (dimension), followed by `n * d` floating-point
//! values in row-major point order. For example, the three two-dimensional
//! points `(0, 0)`, `(2, 3)` and `(4, 5)` are stored as:
//!
//! ```text
//! 3 2
//! 0 0
//! 2 3
//! 4 5
//! ```

use super::{ArrayPointSet, PointSet};
use crate::math::Real;
use std::io::{self, Read, Write};

/// Errors that can occur while reading a point set from a text stream.
#[derive(thiserror::Error, Debug)]
pub enum PointSetIoError {
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended before all announced tokens were read.
    #[error("unexpected end of input at token {position}")]
    UnexpectedEnd {
        /// One-based position of the missing token.
        position: usize,
    },

    /// A token that should have been a non-negative integer was not.
    #[error("invalid integer `{token}` at token {position}")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// One-based position of the token in the stream.
        position: usize,
    },

    /// A token that should have been a floating-point value was not.
    #[error("invalid coordinate `{token}` at token {position}")]
    InvalidCoordinate {
        /// The offending token.
        token: String,
        /// One-based position of the token in the stream.
        position: usize,
    },
}

/// Reads a point set from a reader holding the whitespace-separated text
/// format described in the [module documentation](self).
pub fn read_point_set<R: Read>(mut reader: R) -> Result<ArrayPointSet, PointSetIoError> {
    let mut contents = String::new();
    let _ = reader.read_to_string(&mut contents)?;

    let mut tokens = contents.split_whitespace();
    let mut position = 0;

    let n = next_integer(&mut tokens, &mut position)?;
    let d = next_integer(&mut tokens, &mut position)?;

    let mut pts = ArrayPointSet::new(d, n);
    for i in 0..n {
        for j in 0..d {
            pts.set(i, j, next_coordinate(&mut tokens, &mut position)?);
        }
    }
    Ok(pts)
}

/// Writes a point set in the whitespace-separated text format described in
/// the [module documentation](self), one point per line.
///
/// Coordinates are printed with enough digits to round-trip exactly through
/// [`read_point_set`].
pub fn write_point_set<W: Write, P: ?Sized + PointSet>(
    writer: &mut W,
    pts: &P,
) -> io::Result<()> {
    writeln!(writer, "{} {}", pts.size(), pts.dimension())?;
    for i in 0..pts.size() {
        for j in 0..pts.dimension() {
            if j > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", pts.coord(i, j))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn next_token<'t>(
    tokens: &mut impl Iterator<Item = &'t str>,
    position: &mut usize,
) -> Result<&'t str, PointSetIoError> {
    *position += 1;
    tokens.next().ok_or(PointSetIoError::UnexpectedEnd {
        position: *position,
    })
}

fn next_integer<'t>(
    tokens: &mut impl Iterator<Item = &'t str>,
    position: &mut usize,
) -> Result<usize, PointSetIoError> {
    let token = next_token(tokens, position)?;
    token.parse().map_err(|_| PointSetIoError::InvalidInteger {
        token: token.to_string(),
        position: *position,
    })
}

fn next_coordinate<'t>(
    tokens: &mut impl Iterator<Item = &'t str>,
    position: &mut usize,
) -> Result<Real, PointSetIoError> {
    let token = next_token(tokens, position)?;
    token
        .parse()
        .map_err(|_| PointSetIoError::InvalidCoordinate {
            token: token.to_string(),
            position: *position,
        })
}
