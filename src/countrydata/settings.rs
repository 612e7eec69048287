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

use std::collections::{BTreeMap, HashSet};

use log::trace;

use super::raw_country::{CountryEntry, RawCountry};

/// User customisation of a single country, collected from the separate
/// mask, area code and priority maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSettings<'a> {
    pub iso2: &'a str,
    pub mask: Option<&'a str>,
    pub area_codes: Option<&'a [String]>,
    pub priority: Option<i32>,
}

/// Folds the three override maps into one settings entry per iso2 code.
///
/// Codes keep the order of their first appearance: masks first, then area
/// codes, then priorities.
///
/// ```text
/// masks:      { fr: "(...) ..-..-.." }
/// area codes: { fr: ["369", "463"], us: ["300"] }
/// priorities: { us: 1, ca: 0 }
///
/// -> [ (fr, mask, [369, 463], -), (us, -, [300], 1), (ca, -, -, 0) ]
/// ```
pub fn build_custom_settings<'a>(
    masks: &'a BTreeMap<String, String>,
    area_codes: &'a BTreeMap<String, Vec<String>>,
    priorities: &'a BTreeMap<String, i32>,
) -> Vec<CustomSettings<'a>> {
    let mut seen: HashSet<&String> = HashSet::new();
    masks
        .keys()
        .chain(area_codes.keys())
        .chain(priorities.keys())
        .filter(|iso2| seen.insert(*iso2))
        .map(|iso2| CustomSettings {
            iso2,
            mask: masks.get(iso2).map(String::as_str),
            area_codes: area_codes.get(iso2).map(Vec::as_slice),
            priority: priorities.get(iso2).copied(),
        })
        .collect()
}

/// Produces fresh entries for every raw row, with the matching settings
/// applied.
///
/// A setting only replaces a field when it carries a value; an empty mask
/// counts as no value. The raw table itself is never modified, so building
/// twice with different settings gives independent results.
pub fn extend_raw_countries<'a>(
    countries: &'static [RawCountry],
    settings: &[CustomSettings<'a>],
) -> Vec<CountryEntry<'a>> {
    countries
        .iter()
        .map(|raw_country| {
            let mut entry: CountryEntry<'a> = raw_country.entry();
            let Some(custom) = settings.iter().find(|s| s.iso2 == raw_country.iso2) else {
                return entry;
            };
            trace!("Applying custom settings to '{}'", raw_country.iso2);
            if let Some(mask) = custom.mask.filter(|mask| !mask.is_empty()) {
                entry.mask = Some(mask);
            }
            if let Some(priority) = custom.priority {
                entry.priority = Some(priority);
            }
            if let Some(area_codes) = custom.area_codes {
                entry.area_codes = area_codes.iter().map(String::as_str).collect();
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{build_custom_settings, extend_raw_countries};
    use crate::generated::RAW_COUNTRIES;

    fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_settings_collapse_duplicate_codes() {
        let masks = string_map(&[("fr", "(...) ..-..-.."), ("at", "(....) ...-....")]);
        let area_codes = BTreeMap::from([
            ("fr".to_string(), vec!["369".to_string(), "463".to_string()]),
            ("us".to_string(), vec!["300".to_string()]),
        ]);
        let priorities = BTreeMap::from([("us".to_string(), 1), ("ca".to_string(), 0)]);

        let settings = build_custom_settings(&masks, &area_codes, &priorities);
        let codes: Vec<_> = settings.iter().map(|s| s.iso2).collect();
        assert_eq!(codes, vec!["at", "fr", "us", "ca"]);

        let fr = &settings[1];
        assert_eq!(fr.mask, Some("(...) ..-..-.."));
        assert_eq!(fr.area_codes.map(|c| c.len()), Some(2));
        assert_eq!(fr.priority, None);

        let us = &settings[2];
        assert_eq!(us.mask, None);
        assert_eq!(us.priority, Some(1));
    }

    #[test]
    fn test_extend_keeps_fields_without_values() {
        let masks = string_map(&[("ru", "")]);
        let area_codes = BTreeMap::new();
        let priorities = BTreeMap::from([("ru".to_string(), 5)]);
        let settings = build_custom_settings(&masks, &area_codes, &priorities);

        let entries = extend_raw_countries(RAW_COUNTRIES, &settings);
        let russia = entries.iter().find(|e| e.iso2 == "ru").unwrap();
        assert_eq!(russia.mask, Some("(...) ...-..-.."));
        assert_eq!(russia.priority, Some(5));
    }

    #[test]
    fn test_extend_does_not_leak_between_builds() {
        let area_codes = BTreeMap::from([("us".to_string(), vec!["300".to_string()])]);
        let empty_masks = BTreeMap::new();
        let empty_priorities = BTreeMap::new();
        let settings = build_custom_settings(&empty_masks, &area_codes, &empty_priorities);

        let overridden = extend_raw_countries(RAW_COUNTRIES, &settings);
        let us = overridden.iter().find(|e| e.iso2 == "us").unwrap();
        assert_eq!(us.area_codes, vec!["300"]);

        let pristine = extend_raw_countries(RAW_COUNTRIES, &[]);
        let us = pristine.iter().find(|e| e.iso2 == "us").unwrap();
        assert!(us.area_codes.len() > 1);
        assert!(us.area_codes.contains(&"907"));
    }
}
