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

use log::{debug, trace};

use crate::{
    countrydata::{Catalog, CountryRecord},
    formatter::{RenderOptions, format_number},
    matcher::{RESOLVE_PREFIX_LEN, ResolveCache},
    string_util::{extract_digits, leading_digits},
};

/// Marks an externally set value as international.
const PLUS_SIGN: char = '+';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub render: RenderOptions,
    /// Country used for empty or unmatched input (default: `us`).
    pub default_country: Option<String>,
    /// Keep the current country while typing instead of re-guessing it.
    pub disable_country_guess: bool,
    /// Do not guess a country from the initial value.
    pub disable_initial_country_guess: bool,
    /// When unset, edits that touch the dial code of the selected record
    /// are rejected; for an area code that is the full dial code.
    pub country_code_editable: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            default_country: Some("us".to_owned()),
            disable_country_guess: false,
            disable_initial_country_guess: false,
            country_code_editable: true,
        }
    }
}

impl SessionOptions {
    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn with_default_country(mut self, iso2: Option<&str>) -> Self {
        self.default_country = iso2.map(str::to_ascii_lowercase);
        self
    }

    pub fn with_disable_country_guess(mut self, disable: bool) -> Self {
        self.disable_country_guess = disable;
        self
    }

    pub fn with_disable_initial_country_guess(mut self, disable: bool) -> Self {
        self.disable_initial_country_guess = disable;
        self
    }

    pub fn with_country_code_editable(mut self, editable: bool) -> Self {
        self.country_code_editable = editable;
        self
    }
}

/// What [`PhoneSession::handle_input`] did with an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The edit was refused and the display kept as it was.
    Rejected,
    /// Only the prefix was left, the display is now empty.
    Cleared,
    /// The edit equals the current display.
    Unchanged,
    Updated,
}

/// Selected-country data handed to change listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub name: String,
    pub dial_code: String,
    /// The iso2 code of the country.
    pub country_code: String,
    pub format: String,
}

/// State of one phone field: the catalog it resolves against, the selected
/// record and the formatted display.
pub struct PhoneSession {
    catalog: Catalog,
    cache: ResolveCache,
    options: SessionOptions,
    default_country: Option<String>,
    selected: Option<usize>,
    formatted: String,
    freeze_selection: bool,
}

impl PhoneSession {
    /// Starts a session with `initial_value` already entered.
    ///
    /// ```
    /// use rphonefield::{Catalog, CatalogConfig, PhoneSession, SessionOptions};
    ///
    /// let catalog = Catalog::build(&CatalogConfig::default());
    /// let session = PhoneSession::new(catalog, SessionOptions::default(), "");
    /// assert_eq!(session.formatted(), "+1");
    /// ```
    pub fn new(catalog: Catalog, options: SessionOptions, initial_value: &str) -> Self {
        let default_country = options.default_country.clone();
        let mut session = Self {
            catalog,
            cache: ResolveCache::new(),
            options,
            default_country,
            selected: None,
            formatted: String::new(),
            freeze_selection: false,
        };

        let digits = extract_digits(initial_value);
        session.selected = if session.options.disable_initial_country_guess {
            None
        } else if digits.len() > 1 {
            session.guess(&digits)
        } else {
            session.default_position()
        };

        let formatted = session.selected_country().map(|country| {
            let dial_code = if digits.len() < 2 && !digits.starts_with(country.dial_code.as_str()) {
                country.dial_code.as_str()
            } else {
                ""
            };
            let number = if session.options.render.disable_country_code {
                digits.clone()
            } else {
                fast_cat::concat_str!(dial_code, &digits)
            };
            format_number(&number, Some(country.format.as_str()), &session.options.render)
        });
        session.formatted = formatted.unwrap_or_default();
        session
    }

    fn default_position(&self) -> Option<usize> {
        self.default_country
            .as_deref()
            .and_then(|iso2| self.catalog.position_of(iso2))
    }

    fn guess(&self, digits: &str) -> Option<usize> {
        self.cache.resolve_index(
            &self.catalog,
            leading_digits(digits, RESOLVE_PREFIX_LEN),
            self.default_country.as_deref(),
        )
    }

    fn country_at(&self, index: Option<usize>) -> Option<&CountryRecord> {
        index.and_then(|index| self.catalog.countries().get(index))
    }

    fn empty_display(&self) -> String {
        if self.options.render.disable_country_code {
            String::new()
        } else {
            self.options.render.prefix.clone()
        }
    }

    /// Applies the full text of the field after a keystroke, paste or
    /// delete.
    pub fn handle_input(&mut self, value: &str) -> InputOutcome {
        let prefix = self.options.render.prefix.as_str();

        if !self.options.country_code_editable {
            if let Some(country) = self.selected_country() {
                let locked = fast_cat::concat_str!(prefix, &country.dial_code);
                if !value.starts_with(locked.as_str()) {
                    trace!("Rejecting edit of the locked dial code {}", country.dial_code);
                    return InputOutcome::Rejected;
                }
            }
        }

        if value == prefix {
            self.formatted.clear();
            return InputOutcome::Cleared;
        }

        let digits = extract_digits(value);
        if !self.options.render.long_numbers.accepts(digits.len()) {
            trace!("Rejecting {} digits", digits.len());
            return InputOutcome::Rejected;
        }

        if value == self.formatted {
            return InputOutcome::Unchanged;
        }

        if value.is_empty() {
            self.formatted = self.empty_display();
            return InputOutcome::Updated;
        }

        let mut guessed = self.selected;
        let selection_outgrown = self
            .selected_country()
            .is_some_and(|country| country.dial_code.len() > digits.len());
        if !self.freeze_selection || selection_outgrown {
            if !self.options.disable_country_guess {
                guessed = self.guess(&digits);
            }
            self.freeze_selection = false;
        }

        let format = self.country_at(guessed).map(|country| country.format.as_str());
        self.formatted = format_number(&digits, format, &self.options.render);
        if guessed.is_some() {
            self.selected = guessed;
        }
        InputOutcome::Updated
    }

    /// Switches to the first record of `iso2`; see
    /// [`select_record`](Self::select_record).
    ///
    /// Returns `false` when the catalog has no such country.
    pub fn select_country(&mut self, iso2: &str) -> bool {
        match self.catalog.position_of(iso2) {
            Some(position) => self.select_record(position),
            None => false,
        }
    }

    /// Switches to the record at `index` of [`Catalog::countries`], which
    /// may be a visible area code, swapping the dial code in the entered
    /// number. The selection then stays fixed while typing until the number
    /// gets shorter than the dial code.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn select_record(&mut self, index: usize) -> bool {
        let Some(new_country) = self.catalog.countries().get(index) else {
            return false;
        };
        let new_dial_code = new_country.dial_code.as_str();

        let digits = extract_digits(&self.formatted);
        let number = if digits.len() > 1 {
            match self.selected_country() {
                Some(current) => digits.replacen(current.dial_code.as_str(), new_dial_code, 1),
                None => fast_cat::concat_str!(new_dial_code, &digits),
            }
        } else {
            new_dial_code.to_owned()
        };

        self.formatted = format_number(&number, Some(new_country.format.as_str()), &self.options.render);
        self.selected = Some(index);
        self.freeze_selection = true;
        true
    }

    /// Replaces the value from outside the field.
    ///
    /// Without a leading `+` the number is taken as national to the
    /// default country; otherwise its country is guessed.
    pub fn set_value(&mut self, number: &str) {
        let digits = extract_digits(number);
        if number.starts_with(PLUS_SIGN) {
            let guessed = self.guess(&digits);
            let format = self.country_at(guessed).map(|country| country.format.as_str());
            self.formatted = format_number(&digits, format, &self.options.render);
            self.selected = guessed;
            return;
        }

        let default = self.default_position();
        let (dial_code, format) = match self.country_at(default) {
            Some(country) if !digits.starts_with(country.dial_code.as_str()) => {
                (country.dial_code.as_str(), Some(country.format.as_str()))
            }
            Some(country) => ("", Some(country.format.as_str())),
            None => ("", None),
        };
        let number = if self.options.render.disable_country_code {
            digits.clone()
        } else {
            fast_cat::concat_str!(dial_code, &digits)
        };
        self.formatted = format_number(&number, format, &self.options.render);
        self.selected = default;
    }

    /// Changes the default country and resets the display to its dial code.
    pub fn set_default_country(&mut self, iso2: Option<&str>) {
        self.default_country = iso2.map(str::to_ascii_lowercase);
        self.selected = self.default_position();
        self.formatted = if self.options.render.disable_country_code {
            String::new()
        } else {
            let dial_code = self
                .selected_country()
                .map(|country| country.dial_code.as_str())
                .unwrap_or_default();
            fast_cat::concat_str!(&self.options.render.prefix, dial_code)
        };
    }

    /// Swaps in a catalog built for a new configuration.
    ///
    /// The selection is kept when the new catalog still holds a record with
    /// the same iso2 and dial code; the display is re-rendered with its mask.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        let previous = self
            .selected_country()
            .map(|country| (country.iso2.clone(), country.dial_code.clone()));
        self.catalog = catalog;
        self.cache.clear();

        self.selected = previous.and_then(|(iso2, dial_code)| {
            self.catalog
                .countries()
                .iter()
                .position(|country| country.iso2 == iso2 && country.dial_code == dial_code)
        });
        debug!("Session switched to catalog v{}", self.catalog.version());

        let digits = extract_digits(&self.formatted);
        if !digits.is_empty() {
            let format = self.selected_country().map(|country| country.format.as_str());
            self.formatted = format_number(&digits, format, &self.options.render);
        }
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Bare digits of the display.
    pub fn digits(&self) -> String {
        extract_digits(&self.formatted)
    }

    pub fn selected_country(&self) -> Option<&CountryRecord> {
        self.country_at(self.selected)
    }

    pub fn country_data(&self) -> Option<CountrySummary> {
        self.selected_country().map(|country| CountrySummary {
            name: country.name.clone(),
            dial_code: country.dial_code.clone(),
            country_code: country.iso2.clone(),
            format: country.format.clone(),
        })
    }

    pub fn default_country(&self) -> Option<&str> {
        self.default_country.as_deref()
    }

    pub fn is_selection_frozen(&self) -> bool {
        self.freeze_selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }
}
