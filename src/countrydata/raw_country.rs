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

/// One row of the compiled-in country tables.
///
/// Rows are immutable `'static` data; user customisations never touch them
/// and produce a [`CountryEntry`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCountry {
    pub name: &'static str,
    pub regions: &'static [Region],
    pub iso2: &'static str,
    pub dial_code: &'static str,
    /// Mask of the national part, `.` marks a digit.
    pub mask: Option<&'static str>,
    /// Lower wins when several countries share a dial code.
    pub priority: Option<i32>,
    pub area_codes: Option<&'static [&'static str]>,
}

/// A raw row after user overrides were folded in.
///
/// Borrowed parts come either from the static table or from the
/// configuration the catalog is built from, so an entry never outlives the
/// build that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry<'a> {
    pub name: &'static str,
    pub regions: &'static [Region],
    pub iso2: &'static str,
    pub dial_code: &'static str,
    pub mask: Option<&'a str>,
    pub priority: Option<i32>,
    pub area_codes: Vec<&'a str>,
}

impl RawCountry {
    /// Copies the row into a fresh, override-able entry.
    pub fn entry(&self) -> CountryEntry<'static> {
        CountryEntry {
            name: self.name,
            regions: self.regions,
            iso2: self.iso2,
            dial_code: self.dial_code,
            mask: self.mask,
            priority: self.priority,
            area_codes: self.area_codes.map(|codes| codes.to_vec()).unwrap_or_default(),
        }
    }
}
