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

use log::trace;

use super::country::CountryRecord;
use crate::i18n::{Localization, Region};

/// Merges territories into the country list, ordered by English name.
///
/// The sort is stable, so records with equal names (a country and its area
/// codes) keep their relative order.
pub(super) fn sort_territories(
    territories: Vec<CountryRecord>,
    countries: Vec<CountryRecord>,
) -> Vec<CountryRecord> {
    let mut full_country_list = territories;
    full_country_list.extend(countries);
    full_country_list.sort_by(|a, b| a.name.cmp(&b.name));
    full_country_list
}

/// Keeps records that belong to at least one of `regions`.
/// An empty region list keeps everything.
pub(super) fn filter_regions(regions: &[Region], countries: Vec<CountryRecord>) -> Vec<CountryRecord> {
    if regions.is_empty() {
        return countries;
    }
    countries
        .into_iter()
        .filter(|country| country.regions.iter().any(|region| regions.contains(region)))
        .collect()
}

/// Narrows `source` to the listed iso2 codes.
///
/// With `preserve_order` the result follows the order of `country_codes`
/// and holds the first record of each code; otherwise the source order is
/// kept, area codes included. Unknown codes are dropped and an empty code
/// list keeps everything.
pub(super) fn filtered_country_list(
    country_codes: &[String],
    source: &[CountryRecord],
    preserve_order: bool,
) -> Vec<CountryRecord> {
    if country_codes.is_empty() {
        return source.to_vec();
    }

    if preserve_order {
        country_codes
            .iter()
            .filter_map(|code| {
                let found = source.iter().find(|country| &country.iso2 == code);
                if found.is_none() {
                    trace!("Country code '{}' is not in the catalog, dropping it", code);
                }
                found.cloned()
            })
            .collect()
    } else {
        source
            .iter()
            .filter(|country| country_codes.contains(&country.iso2))
            .cloned()
            .collect()
    }
}

pub(super) fn exclude_countries(
    countries: Vec<CountryRecord>,
    excluded_countries: &[String],
) -> Vec<CountryRecord> {
    if excluded_countries.is_empty() {
        return countries;
    }
    countries
        .into_iter()
        .filter(|country| !excluded_countries.contains(&country.iso2))
        .collect()
}

/// Applies display-name overrides, looked up by iso2 first and by English
/// name second, then sorts by the display name unless `preserve_order`.
pub(super) fn localize_countries(
    mut countries: Vec<CountryRecord>,
    localization: &Localization,
    preserve_order: bool,
) -> Vec<CountryRecord> {
    for country in countries.iter_mut() {
        let local_name = localization
            .get(&country.iso2)
            .or_else(|| localization.get(&country.name));
        if let Some(local_name) = local_name {
            country.local_name.clone_from(local_name);
        }
    }
    if !preserve_order {
        countries.sort_by(|a, b| a.local_name.cmp(&b.local_name));
    }
    countries
}
