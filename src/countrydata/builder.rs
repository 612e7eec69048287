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

use std::collections::HashSet;

use log::{trace, warn};

use super::{
    country::{AreaCodePolicy, CountryRecord},
    raw_country::CountryEntry,
};
use crate::formatter::PLACEHOLDER;

/// Generates the display mask for a dial code.
///
/// The result is `prefix`, one placeholder per dial-code digit, a space and
/// then the predefined mask, or `default_mask` when there is no predefined
/// mask or `always_default_mask` is set.
///
/// ```
/// use rphonefield::get_mask;
///
/// assert_eq!(get_mask("+", "44", Some(".... ......"), "... ...", false), "+.. .... ......");
/// assert_eq!(get_mask("+", "44", Some(".... ......"), "... ...", true), "+.. ... ...");
/// ```
pub fn get_mask(
    prefix: &str,
    dial_code: &str,
    predefined_mask: Option<&str>,
    default_mask: &str,
    always_default_mask: bool,
) -> String {
    let national_mask = match predefined_mask {
        Some(mask) if !mask.is_empty() && !always_default_mask => mask,
        _ => default_mask,
    };
    let placeholders: String = std::iter::repeat_n(PLACEHOLDER, dial_code.len()).collect();
    fast_cat::concat_str!(prefix, &placeholders, " ", national_mask)
}

/// Expands entries into country and area-code records.
///
/// Returns `(visible, hidden)`. Visible records keep the entry order, with
/// the area codes of a country right after it when `area_codes` allows that
/// country; otherwise its area codes go to the hidden list.
pub fn init_countries(
    entries: &[CountryEntry<'_>],
    area_codes: &AreaCodePolicy,
    prefix: &str,
    default_mask: &str,
    always_default_mask: bool,
) -> (Vec<CountryRecord>, Vec<CountryRecord>) {
    let mut initialized = Vec::with_capacity(entries.len());
    let mut hidden_area_codes = Vec::new();

    for entry in entries {
        let mut country = CountryRecord {
            name: entry.name.to_owned(),
            // English by default, localized at a later stage
            local_name: entry.name.to_owned(),
            iso2: entry.iso2.to_owned(),
            regions: entry.regions,
            dial_code: entry.dial_code.to_owned(),
            country_code: entry.dial_code.to_owned(),
            format: get_mask(prefix, entry.dial_code, entry.mask, default_mask, always_default_mask),
            priority: entry.priority.unwrap_or(0),
            main_code: false,
            has_area_codes: false,
            area_code_length: None,
        };

        let area_items = area_code_records(entry, &country, prefix, default_mask, always_default_mask);
        if area_items.is_empty() {
            initialized.push(country);
            continue;
        }

        country.main_code = true;
        if area_codes.allows(entry.iso2) {
            trace!("Exposing {} area codes of '{}'", area_items.len(), entry.iso2);
            country.has_area_codes = true;
            initialized.push(country);
            initialized.extend(area_items);
        } else {
            initialized.push(country);
            hidden_area_codes.extend(area_items);
        }
    }

    (initialized, hidden_area_codes)
}

fn area_code_records(
    entry: &CountryEntry<'_>,
    country: &CountryRecord,
    prefix: &str,
    default_mask: &str,
    always_default_mask: bool,
) -> Vec<CountryRecord> {
    let mut seen = HashSet::with_capacity(entry.area_codes.len());
    let mut records = Vec::with_capacity(entry.area_codes.len());

    for &area_code in &entry.area_codes {
        if area_code.is_empty() {
            warn!("Skipping empty area code of '{}'", entry.iso2);
            continue;
        }
        if !seen.insert(area_code) {
            warn!("Skipping duplicate area code {} of '{}'", area_code, entry.iso2);
            continue;
        }
        let dial_code = fast_cat::concat_str!(entry.dial_code, area_code);
        records.push(CountryRecord {
            format: get_mask(prefix, &dial_code, entry.mask, default_mask, always_default_mask),
            dial_code,
            area_code_length: Some(area_code.len()),
            ..country.clone()
        });
    }
    records
}
