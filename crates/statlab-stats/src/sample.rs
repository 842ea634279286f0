//! Parsing free-form numeric input into a sample.
//!
//! Input text is split on runs of commas and whitespace (newlines included).
//! Every token that parses to a finite `f64` becomes a sample value; anything
//! else is silently dropped.

use serde::Serialize;

/// Reasons a raw input could not be turned into a [`Sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SampleError {
    /// The input was blank or contained only whitespace.
    #[display("input is empty")]
    EmptyInput,
    /// The input had tokens, but none of them was a finite number.
    #[display("no valid numeric data found in input")]
    NoValidTokens,
}

/// An ordered, non-empty sequence of finite values.
///
/// Insertion order is preserved in [`values`](Self::values), and an ascending
/// copy is kept in [`sorted`](Self::sorted) for order statistics.
///
/// # Examples
///
/// ```
/// use statlab_stats::sample::Sample;
///
/// let sample = Sample::parse("3, 1\n2 abc").unwrap();
/// assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
/// assert_eq!(sample.sorted(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl Sample {
    /// Parses raw text into a sample.
    ///
    /// Blank input is reported as [`SampleError::EmptyInput`] before any
    /// tokenization happens; input whose tokens are all non-numeric is
    /// reported as [`SampleError::NoValidTokens`].
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::sample::{Sample, SampleError};
    ///
    /// assert_eq!(Sample::parse("  \n ").unwrap_err(), SampleError::EmptyInput);
    /// assert_eq!(Sample::parse("a, b").unwrap_err(), SampleError::NoValidTokens);
    /// assert_eq!(Sample::parse("1.5 2").unwrap().n(), 2);
    /// ```
    pub fn parse(input: &str) -> Result<Self, SampleError> {
        if input.trim().is_empty() {
            return Err(SampleError::EmptyInput);
        }

        let mut tokens = 0;
        let mut values = Vec::new();
        for token in tokenize(input) {
            tokens += 1;
            match parse_token(token) {
                Some(value) => values.push(value),
                None => tracing::trace!(token, "discarding non-numeric token"),
            }
        }
        tracing::debug!(
            tokens,
            accepted = values.len(),
            discarded = tokens - values.len(),
            "parsed sample input"
        );

        Self::from_finite(values).ok_or(SampleError::NoValidTokens)
    }

    /// Builds a sample from already-parsed values.
    ///
    /// Non-finite values are dropped. Returns `None` if nothing remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::sample::Sample;
    ///
    /// let sample = Sample::from_values([2.0, f64::NAN, 1.0]).unwrap();
    /// assert_eq!(sample.values(), &[2.0, 1.0]);
    /// assert!(Sample::from_values([f64::INFINITY]).is_none());
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_finite(values.into_iter().filter(|v| v.is_finite()).collect())
    }

    fn from_finite(values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        Some(Self { values, sorted })
    }

    /// Values in the order they were entered.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Values in ascending order.
    #[must_use]
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Number of values in the sample (always at least one).
    #[must_use]
    pub fn n(&self) -> usize {
        self.values.len()
    }

    /// The smallest value.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// The largest value.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }
}

/// Splits raw input on runs of commas and whitespace, skipping empty tokens.
///
/// # Examples
///
/// ```
/// use statlab_stats::sample::tokenize;
///
/// let tokens = tokenize("1,,2 \n 3\t,x").collect::<Vec<_>>();
/// assert_eq!(tokens, ["1", "2", "3", "x"]);
/// ```
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Parses every finite number in `input`, dropping all other tokens.
///
/// # Examples
///
/// ```
/// use statlab_stats::sample::parse_values;
///
/// assert_eq!(parse_values("1e2, -0.5, NaN, inf, 7abc"), [100.0, -0.5]);
/// ```
#[must_use]
pub fn parse_values(input: &str) -> Vec<f64> {
    tokenize(input).filter_map(parse_token).collect()
}

fn parse_token(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty_error() {
        assert_eq!(Sample::parse(""), Err(SampleError::EmptyInput));
        assert_eq!(Sample::parse(" \t\n\r\n"), Err(SampleError::EmptyInput));
    }

    #[test]
    fn test_separators_only_is_no_valid_tokens() {
        // Commas are not whitespace, so the input is not blank
        assert_eq!(Sample::parse(",,, ,"), Err(SampleError::NoValidTokens));
    }

    #[test]
    fn test_all_garbage_is_no_valid_tokens() {
        assert_eq!(
            Sample::parse("foo bar\nbaz"),
            Err(SampleError::NoValidTokens)
        );
        assert_eq!(
            Sample::parse("NaN inf -infinity 1e999"),
            Err(SampleError::NoValidTokens)
        );
    }

    #[test]
    fn test_mixed_separators() {
        let sample = Sample::parse("1, 2,3\n4\t5  ,\n, 6").unwrap();
        assert_eq!(sample.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_unparsable_tokens_are_discarded() {
        let sample = Sample::parse("10 x 20 12abc 30").unwrap();
        assert_eq!(sample.values(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_decimal_syntax() {
        let sample = Sample::parse("-1.5 +2 .25 3. 1e-3 -0").unwrap();
        assert_eq!(sample.values(), &[-1.5, 2.0, 0.25, 3.0, 0.001, -0.0]);
    }

    #[test]
    fn test_insertion_order_and_sorted_copy() {
        let sample = Sample::parse("5 3 9 3 1").unwrap();
        assert_eq!(sample.values(), &[5.0, 3.0, 9.0, 3.0, 1.0]);
        assert_eq!(sample.sorted(), &[1.0, 3.0, 3.0, 5.0, 9.0]);
        assert_eq!(sample.n(), 5);
        assert_eq!(sample.min(), 1.0);
        assert_eq!(sample.max(), 9.0);
    }

    #[test]
    fn test_large_input() {
        let input = (0..10_000)
            .map(|i| (10_000 - i).to_string())
            .collect::<Vec<_>>()
            .join(",");
        let sample = Sample::parse(&input).unwrap();
        assert_eq!(sample.n(), 10_000);
        assert_eq!(sample.min(), 1.0);
        assert_eq!(sample.max(), 10_000.0);
        assert!(sample.sorted().is_sorted());
    }

    #[test]
    fn test_from_values_filters_non_finite() {
        let sample = Sample::from_values([f64::NEG_INFINITY, 4.0, f64::NAN]).unwrap();
        assert_eq!(sample.values(), &[4.0]);
        assert!(Sample::from_values(Vec::new()).is_none());
    }
}
