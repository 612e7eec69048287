// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::str::FromStr;

use crate::{countrydata::CountryRecord, errors::ConfigError, string_util::extract_digits};

/// Mask character that consumes one digit.
pub const PLACEHOLDER: char = '.';

/// Longest number accepted without [`LongNumbers`] support (E.164 limit).
pub const MAX_DIGITS: usize = 15;

/// How numbers longer than [`MAX_DIGITS`] are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LongNumbers {
    /// Reject anything over the limit and drop digits that do not fit the mask.
    #[default]
    Disabled,
    /// Accept any length and append digits that do not fit the mask.
    Enabled,
    /// Accept up to `n` digits.
    UpTo(usize),
}

impl LongNumbers {
    /// Builds a cap from a signed value, as it comes from loosely typed
    /// configuration.
    pub fn from_cap(cap: i64) -> Result<Self, ConfigError> {
        usize::try_from(cap)
            .map(LongNumbers::UpTo)
            .map_err(|_| ConfigError::NegativeDigitCap(cap))
    }

    /// Whether a number of `digit_count` digits may be entered at all.
    pub fn accepts(&self, digit_count: usize) -> bool {
        if digit_count <= MAX_DIGITS {
            return true;
        }
        match self {
            LongNumbers::Disabled => false,
            LongNumbers::Enabled => true,
            LongNumbers::UpTo(cap) => digit_count <= *cap,
        }
    }

    /// Whether digits left over after the mask is exhausted are kept.
    /// A zero cap counts as disabled.
    pub fn passes_overflow(&self) -> bool {
        match self {
            LongNumbers::Disabled => false,
            LongNumbers::Enabled => true,
            LongNumbers::UpTo(cap) => *cap > 0,
        }
    }
}

impl FromStr for LongNumbers {
    type Err = ConfigError;

    /// Parses `"true"`, `"false"` or a digit cap.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "true" => Ok(LongNumbers::Enabled),
            "false" => Ok(LongNumbers::Disabled),
            other => other
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidDigitCap(s.to_owned()))
                .and_then(LongNumbers::from_cap),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render the national part only, without the prefix and dial code.
    pub disable_country_code: bool,
    pub long_numbers: LongNumbers,
    /// When unset the digits are shown as typed, behind the prefix.
    pub auto_format: bool,
    pub prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            disable_country_code: false,
            long_numbers: LongNumbers::Disabled,
            auto_format: true,
            prefix: "+".to_owned(),
        }
    }
}

impl RenderOptions {
    pub fn with_disable_country_code(mut self, disable: bool) -> Self {
        self.disable_country_code = disable;
        self
    }

    pub fn with_long_numbers(mut self, long_numbers: LongNumbers) -> Self {
        self.long_numbers = long_numbers;
        self
    }

    pub fn with_auto_format(mut self, auto_format: bool) -> Self {
        self.auto_format = auto_format;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Fills `format` with the characters of `text`.
///
/// Literal mask characters are copied, each [`PLACEHOLDER`] takes the next
/// character of `text`, and the walk stops as soon as `text` runs out, so
/// no trailing punctuation is left dangling. Unclosed brackets are closed.
///
/// ```
/// use rphonefield::{LongNumbers, RenderOptions, format_number};
///
/// let options = RenderOptions::default();
/// assert_eq!(format_number("5551234", Some("(...) ..-.."), &options), "(555) 12-34");
/// assert_eq!(format_number("5551", Some("(...) ..-.."), &options), "(555) 1");
/// assert_eq!(format_number("55", Some("(...) ..-.."), &options), "(55)");
///
/// let long = options.with_long_numbers(LongNumbers::Enabled);
/// assert_eq!(format_number("55512345", Some("(...) ..-.."), &long), "(555) 12-345");
/// ```
pub fn format_number(text: &str, format: Option<&str>, options: &RenderOptions) -> String {
    let pattern = match format {
        // the first group holds the prefix and the dial-code placeholders
        Some(format) if options.disable_country_code => {
            Some(format.split_once(' ').map_or("", |(_, national)| national))
        }
        other => other,
    };

    if text.is_empty() {
        return if options.disable_country_code {
            String::new()
        } else {
            options.prefix.clone()
        };
    }

    let pattern = match pattern {
        Some(pattern) if !pattern.is_empty() && options.auto_format && text.chars().nth(1).is_some() => {
            pattern
        }
        _ => {
            return if options.disable_country_code {
                text.to_owned()
            } else {
                fast_cat::concat_str!(&options.prefix, text)
            };
        }
    };

    let mut remaining = text.chars().peekable();
    let mut formatted = String::with_capacity(pattern.len() + text.len());
    for mask_char in pattern.chars() {
        if remaining.peek().is_none() {
            break;
        }
        if mask_char == PLACEHOLDER {
            formatted.extend(remaining.next());
        } else {
            formatted.push(mask_char);
        }
    }

    if options.long_numbers.passes_overflow() {
        formatted.extend(remaining);
    }

    close_brackets(&mut formatted);
    formatted
}

fn close_brackets(formatted: &mut String) {
    let opened = formatted.matches('(').count();
    let closed = formatted.matches(')').count();
    for _ in closed..opened {
        formatted.push(')');
    }
}

/// Renders bare digits through the mask of `country`.
///
/// Non-digit characters in `digits` are ignored. Without a country the
/// digits are shown unformatted behind the prefix.
pub fn render(digits: &str, country: Option<&CountryRecord>, options: &RenderOptions) -> String {
    let digits = extract_digits(digits);
    format_number(&digits, country.map(|country| country.format.as_str()), options)
}

#[cfg(test)]
mod tests {
    use super::close_brackets;

    #[test]
    fn test_close_brackets() {
        let mut nested = String::from("((12");
        close_brackets(&mut nested);
        assert_eq!(nested, "((12))");

        let mut balanced = String::from("(12) 3");
        close_brackets(&mut balanced);
        assert_eq!(balanced, "(12) 3");
    }
}
