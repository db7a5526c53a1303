//! Parsing of integer input supplied by a shell.
//!
//! The console protocol is a token stream: the item count, that many item
//! values, then the target sum. Tokens are separated by whitespace or
//! commas.

use crate::error::{Result, SolverError};
use std::io::BufRead;

/// Parses one integer token.
pub fn parse_integer(token: &str) -> Result<i64> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| SolverError::input(format!("`{}` is not an integer", token.trim())))
}

/// Parses every integer in `text`, in order.
///
/// ```
/// use u_subsetsum::input::parse_integers;
///
/// assert_eq!(parse_integers("3, 34 4\n-12").unwrap(), vec![3, 34, 4, -12]);
/// assert!(parse_integers("1 two 3").is_err());
/// ```
pub fn parse_integers(text: &str) -> Result<Vec<i64>> {
    tokens(text).map(parse_integer).collect()
}

/// Reads `count, item_1 .. item_count, target` from `reader`.
///
/// # Errors
/// Returns [`SolverError::MalformedInput`] on a non-integer token, a
/// negative count, or input that ends early.
pub fn read_instance<R: BufRead>(reader: R) -> Result<(Vec<i64>, i64)> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| SolverError::input(format!("failed to read input: {e}")))?;
        values.extend(parse_integers(&line)?);
    }
    let mut values = values.into_iter();

    let count = values
        .next()
        .ok_or_else(|| SolverError::input("expected the number of integers"))?;
    let count = usize::try_from(count)
        .map_err(|_| SolverError::input(format!("integer count must be non-negative, got {count}")))?;

    let items: Vec<i64> = values.by_ref().take(count).collect();
    if items.len() < count {
        return Err(SolverError::input(format!(
            "expected {count} integers, got {}",
            items.len()
        )));
    }
    let target = values
        .next()
        .ok_or_else(|| SolverError::input("expected the target sum"))?;

    Ok((items, target))
}

/// Parses an instance given as separate item and target strings.
///
/// Returns `Ok(None)` when neither is given, so the caller can fall back to
/// [`read_instance`].
///
/// # Errors
/// Returns [`SolverError::MalformedInput`] if only one of the two is given
/// or either fails to parse.
pub fn instance_from_args(items: Option<&str>, target: Option<&str>) -> Result<Option<(Vec<i64>, i64)>> {
    match (items, target) {
        (Some(items), Some(target)) => Ok(Some((parse_integers(items)?, parse_integer(target)?))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(SolverError::input("`--items` was given without `--target`")),
        (None, Some(_)) => Err(SolverError::input("`--target` was given without `--items`")),
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}
