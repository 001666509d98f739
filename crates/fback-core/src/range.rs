//! Range expansion for the `$num`, `%y`, `%m` and `%d` value lists.

use crate::error::InvalidRangeError;
use crate::expand::DEFAULT_WARN_THRESHOLD;

/// Expands a CLI range argument into an ordered list of values.
///
/// - `None` or `""` yields an empty list (the placeholder stays unresolved).
/// - A value containing `-` is split at the first `-` into integer bounds and
///   expanded inclusively in ascending order. `start > end` yields nothing.
/// - Anything else is returned as a single literal value.
///
/// A leading `-` is treated as the separator, so `-5` is rejected rather than
/// read as a negative literal.
///
/// # Examples
///
/// - `expand_range(Some("2020-2022"))` → `["2020", "2021", "2022"]`
/// - `expand_range(Some("05"))` → `["05"]`
pub fn expand_range(arg: Option<&str>) -> Result<Vec<String>, InvalidRangeError> {
    let arg = match arg {
        Some(a) if !a.is_empty() => a,
        _ => return Ok(Vec::new()),
    };

    let Some((start, end)) = arg.split_once('-') else {
        return Ok(vec![arg.to_string()]);
    };

    let invalid = || InvalidRangeError {
        input: arg.to_string(),
    };
    let start: i64 = start.trim().parse().map_err(|_| invalid())?;
    let end: i64 = end.trim().parse().map_err(|_| invalid())?;

    let len = range_len(start, end);
    if len > DEFAULT_WARN_THRESHOLD as u128 {
        tracing::warn!(
            range = arg,
            values = %len,
            threshold = DEFAULT_WARN_THRESHOLD,
            "range is very large; expansion may exhaust memory"
        );
    }

    Ok((start..=end).map(|v| v.to_string()).collect())
}

/// Number of values in `start..=end`, without overflowing at the `i64` limits.
pub fn range_len(start: i64, end: i64) -> u128 {
    if start > end {
        0
    } else {
        (i128::from(end) - i128::from(start) + 1) as u128
    }
}

/// Values for the `$num` pass: `"1"` through `"n"`.
pub fn number_range(n: usize) -> Vec<String> {
    (1..=n).map(|v| v.to_string()).collect()
}
