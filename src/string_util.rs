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

/// Returns only the digits of `text`, with every Unicode decimal digit
/// (fullwidth, Arabic-Indic etc.) converted to its ASCII form.
pub fn extract_digits(text: &str) -> String {
    dec_from_char::normalize_decimals(text)
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// First `count` characters of an ASCII digit string, or all of it when
/// shorter.
pub fn leading_digits(digits: &str, count: usize) -> &str {
    match digits.char_indices().nth(count) {
        Some((end, _)) => &digits[..end],
        None => digits,
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_digits, leading_digits};

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits("+1 (202) 555-01.23"), "12025550123");
        assert_eq!(extract_digits("+７ ９１２"), "7912");
        assert_eq!(extract_digits("+"), "");
    }

    #[test]
    fn test_leading_digits() {
        assert_eq!(leading_digits("12025550123", 6), "120255");
        assert_eq!(leading_digits("1242", 6), "1242");
        assert_eq!(leading_digits("", 6), "");
    }
}
