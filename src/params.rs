use crate::{
    constants::{COLOR_OFF, COLOR_ON, FULLWIDTH_SPACE},
    types::RecordError,
};
use regex::Regex;
use std::{cell::LazyCell, str::FromStr};

thread_local! {
    // `^777777name  ^000000` -> `^777777name^000000 `
    static COLOR_SPAN_RE: LazyCell<Regex> = LazyCell::new(|| unsafe {
        Regex::new(r"\^777777([^ |^\^]+)  ").unwrap_unchecked()
    });
    static COLOR_OFF_RE: LazyCell<Regex> = LazyCell::new(|| unsafe {
        Regex::new(r"\^000000 +").unwrap_unchecked()
    });
    static COLON_RE: LazyCell<Regex> = LazyCell::new(|| unsafe {
        Regex::new(r" *: *").unwrap_unchecked()
    });
}

/// Parameter block of a record, flattened to alternating `name:` and value tokens.
///
/// A parameter is present when the exact token `name:` occurs; its value is the token right after it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params(Vec<String>);

impl Params {
    /// Normalizes a raw parameter block.
    ///
    /// Full-width spaces become two regular spaces, so that columns are separated uniformly.
    /// The color off marker followed by spaces ends a token, other color markers are dropped,
    /// and every colon ends a token too. Empty tokens are discarded.
    ///
    /// Never fails: garbage in gives tokens that just won't match any lookups.
    #[must_use]
    pub fn parse(block: &str) -> Self {
        let block: String = block.replace(FULLWIDTH_SPACE, "  ");

        let block = COLOR_SPAN_RE.with(|re| {
            re.replace_all(&block, "^777777${1}^000000 ").into_owned()
        });

        let block = COLOR_OFF_RE
            .with(|re| re.replace_all(&block, "\n").into_owned())
            .replace(COLOR_ON, "")
            .replace(COLOR_OFF, "");

        let block = COLON_RE.with(|re| re.replace_all(&block, ":\n").into_owned());

        Self(
            block
                .split('\n')
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    #[inline]
    fn position(&self, name: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|token| token.strip_suffix(':') == Some(name))
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the trimmed value of the parameter.
    ///
    /// A `name:` token that is the last one has no value, and is treated as absent.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        let index: usize = self.position(name)?;
        self.0.get(index + 1).map(|value| value.trim())
    }

    #[must_use]
    pub fn value_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.value(name).unwrap_or(default)
    }

    /// Parses the value as a number. Unparseable values count as absent.
    #[must_use]
    pub fn number<T: FromStr>(&self, name: &str) -> Option<T> {
        self.value(name)?.parse().ok()
    }

    #[must_use]
    pub fn number_or<T: FromStr>(&self, name: &str, default: T) -> T {
        self.number(name).unwrap_or(default)
    }

    /// Parses the value of a parameter the record can't be built without.
    pub fn required<T: FromStr>(
        &self,
        name: &'static str,
    ) -> Result<T, RecordError> {
        let value: &str = self
            .value(name)
            .ok_or(RecordError::MissingParameter(name))?;

        value.parse().map_err(|_| RecordError::InvalidNumber {
            parameter: name,
            value: value.to_owned(),
        })
    }
}

impl From<Vec<String>> for Params {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl From<Params> for Vec<String> {
    fn from(params: Params) -> Self {
        params.0
    }
}
