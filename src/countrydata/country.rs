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

use crate::i18n::Region;

/// A country or an area code of a country, as it appears in a catalog.
///
/// Area-code records share `iso2`, `name` and `country_code` with their
/// parent; their `dial_code` is the parent's dial code followed by the area
/// code, e.g. `"1"` + `"907"` for Alaska.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// English name from the raw table.
    pub name: String,
    /// Display name, equal to `name` unless localized.
    pub local_name: String,
    pub iso2: String,
    pub regions: &'static [Region],
    /// Full numeric prefix matched against typed digits.
    pub dial_code: String,
    /// Dial code of the country itself, without any area code.
    pub country_code: String,
    /// Complete display mask: prefix, one `.` per dial-code digit, a space
    /// and the national mask.
    pub format: String,
    /// Tie-break between records of equal dial-code length, lower wins.
    pub priority: i32,
    /// Set on a country record that declares area codes.
    pub main_code: bool,
    /// Set on a main-code record whose area codes are visible.
    pub has_area_codes: bool,
    /// Length of the area code, `Some` only for area-code records.
    pub area_code_length: Option<usize>,
}

impl CountryRecord {
    pub fn is_area_code(&self) -> bool {
        self.area_code_length.is_some()
    }
}

/// Which countries expose their area codes as selectable records.
///
/// Area codes of the remaining countries are still built but routed to the
/// hidden set, where they only take part in prefix resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AreaCodePolicy {
    #[default]
    None,
    All,
    /// Explicit allow-list of iso2 codes.
    Only(Vec<String>),
}

impl AreaCodePolicy {
    pub fn allows(&self, iso2: &str) -> bool {
        match self {
            AreaCodePolicy::None => false,
            AreaCodePolicy::All => true,
            AreaCodePolicy::Only(codes) => codes.iter().any(|code| code == iso2),
        }
    }
}
