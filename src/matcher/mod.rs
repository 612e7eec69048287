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

use dashmap::DashMap;
use log::{error, trace};

use crate::{
    countrydata::{Catalog, CountryRecord},
    errors::MatchError,
    string_util::leading_digits,
};

/// Number of leading digits callers are expected to resolve. Dial codes
/// with area codes are never longer, and bounded keys keep
/// [`ResolveCache`] small while typing.
pub const RESOLVE_PREFIX_LEN: usize = 6;

/// Priority of the "no match" seed; any real record beats it.
const NO_MATCH_PRIORITY: i32 = 10001;

/// Resolves `prefix` to an index into [`Catalog::countries`].
///
/// The longest dial code that `prefix` starts with wins, records of equal
/// length are decided by the lower priority, and on a full tie the first
/// record found wins. Visible records are scanned before hidden area codes.
/// A hidden area code resolves to the main-code record of its country.
/// Without any match, and for an empty prefix, the record of
/// `default_iso2` is returned.
pub fn try_resolve_index(
    catalog: &Catalog,
    prefix: &str,
    default_iso2: Option<&str>,
) -> Result<Option<usize>, MatchError> {
    let default_position = || default_iso2.and_then(|iso2| catalog.position_of(iso2));

    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Ok(default_position());
    }

    let countries = catalog.countries();
    let mut best_len = 0;
    let mut best_priority = NO_MATCH_PRIORITY;
    let mut best: Option<(bool, usize)> = None;

    let candidates = countries
        .iter()
        .enumerate()
        .map(|(index, country)| (false, index, country))
        .chain(
            catalog
                .hidden_area_codes()
                .iter()
                .enumerate()
                .map(|(index, country)| (true, index, country)),
        );
    for (hidden, index, country) in candidates {
        if !prefix.starts_with(country.dial_code.as_str()) {
            continue;
        }
        let len = country.dial_code.len();
        if len > best_len || (len == best_len && country.priority < best_priority) {
            best_len = len;
            best_priority = country.priority;
            best = Some((hidden, index));
        }
    }

    match best {
        None => Ok(default_position()),
        Some((false, index)) => Ok(Some(index)),
        Some((true, index)) => {
            let area_code = &catalog.hidden_area_codes()[index];
            trace!("'{}' matched hidden area code {}", prefix, area_code.dial_code);
            catalog
                .main_code_position(&area_code.iso2)
                .map(Some)
                .ok_or_else(|| MatchError::MissingMainCode {
                    iso2: area_code.iso2.clone(),
                    dial_code: area_code.dial_code.clone(),
                })
        }
    }
}

/// Fallible form of [`guess_country`].
pub fn try_guess_country<'a>(
    catalog: &'a Catalog,
    prefix: &str,
    default_iso2: Option<&str>,
) -> Result<Option<&'a CountryRecord>, MatchError> {
    let index = try_resolve_index(catalog, prefix, default_iso2)?;
    Ok(index.map(|index| &catalog.countries()[index]))
}

/// Resolves a digit prefix to the best matching visible record.
///
/// A hidden area code whose country has no main-code record left in the
/// catalog is logged and treated as no match.
///
/// ```
/// use rphonefield::{Catalog, CatalogConfig, guess_country};
///
/// let catalog = Catalog::build(&CatalogConfig::default());
/// assert_eq!(guess_country(&catalog, "7912", None).map(|c| c.iso2.as_str()), Some("ru"));
/// assert_eq!(guess_country(&catalog, "", Some("fr")).map(|c| c.iso2.as_str()), Some("fr"));
/// assert_eq!(guess_country(&catalog, "", None), None);
/// ```
pub fn guess_country<'a>(
    catalog: &'a Catalog,
    prefix: &str,
    default_iso2: Option<&str>,
) -> Option<&'a CountryRecord> {
    resolve_index_or_default(catalog, prefix, default_iso2).map(|index| &catalog.countries()[index])
}

fn resolve_index_or_default(catalog: &Catalog, prefix: &str, default_iso2: Option<&str>) -> Option<usize> {
    match try_resolve_index(catalog, prefix, default_iso2) {
        Ok(index) => index,
        Err(err) => {
            error!("{}; falling back to the default country", err);
            default_iso2.and_then(|iso2| catalog.position_of(iso2))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResolveKey {
    version: u64,
    prefix: String,
    default_iso2: Option<String>,
}

/// Memoizes [`guess_country`] by catalog version, prefix and default
/// country.
///
/// Entries of older catalogs are never returned since every catalog has
/// its own version; [`clear`](Self::clear) only frees their memory.
pub struct ResolveCache {
    entries: DashMap<ResolveKey, Option<usize>>,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    /// Cached index form of [`guess_country`].
    ///
    /// The key holds at most [`Catalog::max_dial_code_len`] characters of
    /// `prefix`, so full numbers share entries with their leading digits
    /// and the cache stays bounded by the distinct dial-code prefixes typed.
    pub fn resolve_index(&self, catalog: &Catalog, prefix: &str, default_iso2: Option<&str>) -> Option<usize> {
        let prefix = leading_digits(prefix.trim(), catalog.max_dial_code_len());
        let key = ResolveKey {
            version: catalog.version(),
            prefix: prefix.to_owned(),
            default_iso2: default_iso2.map(str::to_owned),
        };
        if let Some(index) = self.entries.get(&key) {
            trace!("Resolve cache hit for '{}'", prefix);
            return *index.value();
        }
        trace!("Resolve cache miss for '{}'", prefix);
        *self
            .entries
            .entry(key)
            .or_insert_with(|| resolve_index_or_default(catalog, prefix, default_iso2))
            .value()
    }

    pub fn resolve<'a>(
        &self,
        catalog: &'a Catalog,
        prefix: &str,
        default_iso2: Option<&str>,
    ) -> Option<&'a CountryRecord> {
        self.resolve_index(catalog, prefix, default_iso2)
            .and_then(|index| catalog.countries().get(index))
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResolveCache {
    fn default() -> Self {
        Self::new()
    }
}
