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

use std::{
    collections::BTreeMap,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};

use log::{debug, warn};

use super::{
    builder::init_countries,
    country::{AreaCodePolicy, CountryRecord},
    curator::{exclude_countries, filter_regions, filtered_country_list, localize_countries, sort_territories},
    settings::{build_custom_settings, extend_raw_countries},
};
use crate::{
    errors::ConfigError,
    generated::{RAW_COUNTRIES, RAW_TERRITORIES},
    i18n::{Localization, Region},
};

pub const DEFAULT_PREFIX: &str = "+";
pub const DEFAULT_MASK: &str = "... ... ... ... ..";

/// Every built catalog gets a distinct version, so caches keyed by it never
/// serve results of an older configuration.
static NEXT_CATALOG_VERSION: AtomicU64 = AtomicU64::new(1);

/// Which filtered lists keep the user-given order instead of being sorted
/// by display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreserveOrder {
    pub only_countries: bool,
    pub preferred_countries: bool,
}

/// Everything a catalog is built from.
///
/// All iso2 codes are expected in lower case; the `with_*` setters lower
/// them for you.
///
/// ```rust
/// use rphonefield::{AreaCodePolicy, CatalogConfig, PreserveOrder};
///
/// let config = CatalogConfig::default()
///     .with_area_codes(AreaCodePolicy::Only(vec!["us".into()]))
///     .with_only_countries(["FR", "us"])
///     .with_preserve_order(PreserveOrder { only_countries: true, preferred_countries: false })
///     .with_mask("fr", "(...) ..-..-..");
///
/// assert_eq!(config.only_countries, vec!["fr", "us"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub area_codes: AreaCodePolicy,
    /// Merge small dependent territories into the country list.
    pub enable_territories: bool,
    /// Keep only countries of these regions; empty keeps everything.
    pub regions: Vec<Region>,
    pub only_countries: Vec<String>,
    pub preferred_countries: Vec<String>,
    pub exclude_countries: Vec<String>,
    pub preserve_order: PreserveOrder,
    pub masks: BTreeMap<String, String>,
    pub priorities: BTreeMap<String, i32>,
    pub area_code_overrides: BTreeMap<String, Vec<String>>,
    pub localization: Localization,
    /// Symbol in front of the dial code (default: `+`).
    pub prefix: String,
    /// Mask for countries without one (default: `... ... ... ... ..`).
    pub default_mask: String,
    /// Ignore predefined masks and always use `default_mask`.
    pub always_default_mask: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            area_codes: AreaCodePolicy::None,
            enable_territories: false,
            regions: Vec::new(),
            only_countries: Vec::new(),
            preferred_countries: Vec::new(),
            exclude_countries: Vec::new(),
            preserve_order: PreserveOrder::default(),
            masks: BTreeMap::new(),
            priorities: BTreeMap::new(),
            area_code_overrides: BTreeMap::new(),
            localization: Localization::new(),
            prefix: DEFAULT_PREFIX.to_owned(),
            default_mask: DEFAULT_MASK.to_owned(),
            always_default_mask: false,
        }
    }
}

fn iso2_list<I, S>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes.into_iter().map(|code| code.as_ref().to_ascii_lowercase()).collect()
}

impl CatalogConfig {
    pub fn with_area_codes(mut self, policy: AreaCodePolicy) -> Self {
        self.area_codes = match policy {
            AreaCodePolicy::Only(codes) => AreaCodePolicy::Only(iso2_list(codes)),
            other => other,
        };
        self
    }

    pub fn with_territories(mut self, enable: bool) -> Self {
        self.enable_territories = enable;
        self
    }

    pub fn with_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    /// Same as [`with_regions`](Self::with_regions), from kebab-case names
    /// such as `"north-america"`.
    pub fn with_region_names<I, S>(mut self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.regions = names
            .into_iter()
            .map(|name| {
                Region::from_str(name.as_ref())
                    .map_err(|_| ConfigError::UnknownRegion(name.as_ref().to_owned()))
            })
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    pub fn with_only_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.only_countries = iso2_list(codes);
        self
    }

    pub fn with_preferred_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.preferred_countries = iso2_list(codes);
        self
    }

    pub fn with_exclude_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_countries = iso2_list(codes);
        self
    }

    pub fn with_preserve_order(mut self, preserve_order: PreserveOrder) -> Self {
        self.preserve_order = preserve_order;
        self
    }

    pub fn with_mask(mut self, iso2: &str, mask: impl Into<String>) -> Self {
        self.masks.insert(iso2.to_ascii_lowercase(), mask.into());
        self
    }

    pub fn with_priority(mut self, iso2: &str, priority: i32) -> Self {
        self.priorities.insert(iso2.to_ascii_lowercase(), priority);
        self
    }

    pub fn with_area_code_override<I, S>(mut self, iso2: &str, area_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.area_code_overrides
            .insert(iso2.to_ascii_lowercase(), area_codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_localization(mut self, localization: Localization) -> Self {
        self.localization = localization;
        self
    }

    /// Adds one display-name override, keyed by iso2 code or English name.
    pub fn with_local_name(mut self, key: impl Into<String>, local_name: impl Into<String>) -> Self {
        self.localization.insert(key.into(), local_name.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_default_mask(mut self, default_mask: impl Into<String>) -> Self {
        self.default_mask = default_mask.into();
        self
    }

    pub fn with_always_default_mask(mut self, always_default_mask: bool) -> Self {
        self.always_default_mask = always_default_mask;
        self
    }
}

/// The curated, ordered record lists of one configuration.
///
/// A catalog is immutable once built. Configuration changes are handled by
/// building a new catalog, which also gets a new [`version`](Self::version).
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<CountryRecord>,
    preferred_countries: Vec<CountryRecord>,
    hidden_area_codes: Vec<CountryRecord>,
    max_dial_code_len: usize,
    version: u64,
}

/// Builds a catalog for `config`; see [`Catalog::build`].
pub fn build_catalog(config: &CatalogConfig) -> Catalog {
    Catalog::build(config)
}

impl Catalog {
    pub fn build(config: &CatalogConfig) -> Self {
        let user_settings =
            build_custom_settings(&config.masks, &config.area_code_overrides, &config.priorities);
        for settings in &user_settings {
            let known = RAW_COUNTRIES
                .iter()
                .chain(RAW_TERRITORIES.iter())
                .any(|raw| raw.iso2 == settings.iso2);
            if !known {
                warn!("Custom settings for unknown country code '{}' are ignored", settings.iso2);
            }
        }

        let raw_countries = extend_raw_countries(RAW_COUNTRIES, &user_settings);
        let (mut initialized_countries, mut hidden_area_codes) = init_countries(
            &raw_countries,
            &config.area_codes,
            &config.prefix,
            &config.default_mask,
            config.always_default_mask,
        );

        if config.enable_territories {
            let raw_territories = extend_raw_countries(RAW_TERRITORIES, &user_settings);
            let (initialized_territories, hidden_territory_codes) = init_countries(
                &raw_territories,
                &config.area_codes,
                &config.prefix,
                &config.default_mask,
                config.always_default_mask,
            );
            initialized_countries = sort_territories(initialized_territories, initialized_countries);
            hidden_area_codes.extend(hidden_territory_codes);
        }

        let initialized_countries = filter_regions(&config.regions, initialized_countries);

        let preserve_only = config.preserve_order.only_countries;
        let countries = localize_countries(
            exclude_countries(
                filtered_country_list(&config.only_countries, &initialized_countries, preserve_only),
                &config.exclude_countries,
            ),
            &config.localization,
            preserve_only,
        );

        let preferred_countries = if config.preferred_countries.is_empty() {
            Vec::new()
        } else {
            let preserve_preferred = config.preserve_order.preferred_countries;
            localize_countries(
                filtered_country_list(
                    &config.preferred_countries,
                    &initialized_countries,
                    preserve_preferred,
                ),
                &config.localization,
                preserve_preferred,
            )
        };

        let hidden_area_codes = exclude_countries(
            filtered_country_list(&config.only_countries, &hidden_area_codes, false),
            &config.exclude_countries,
        );

        let version = NEXT_CATALOG_VERSION.fetch_add(1, Ordering::Relaxed);
        debug!(
            "Built catalog v{}: {} countries, {} preferred, {} hidden area codes",
            version,
            countries.len(),
            preferred_countries.len(),
            hidden_area_codes.len()
        );

        let max_dial_code_len = countries
            .iter()
            .chain(hidden_area_codes.iter())
            .map(|country| country.dial_code.len())
            .max()
            .unwrap_or_default();

        Self { countries, preferred_countries, hidden_area_codes, max_dial_code_len, version }
    }

    /// Visible, selectable records.
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Records shown before the rest; they also appear in
    /// [`countries`](Self::countries) unless excluded there.
    pub fn preferred_countries(&self) -> &[CountryRecord] {
        &self.preferred_countries
    }

    /// Area codes that are not selectable but still take part in matching.
    pub fn hidden_area_codes(&self) -> &[CountryRecord] {
        &self.hidden_area_codes
    }

    /// Length of the longest dial code; digits past it never change a match.
    pub fn max_dial_code_len(&self) -> usize {
        self.max_dial_code_len
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Index of the first visible record with this iso2 code.
    pub fn position_of(&self, iso2: &str) -> Option<usize> {
        self.countries.iter().position(|country| country.iso2 == iso2)
    }

    pub fn find(&self, iso2: &str) -> Option<&CountryRecord> {
        self.position_of(iso2).map(|index| &self.countries[index])
    }

    /// Index of the visible main-code record an area code belongs to.
    pub fn main_code_position(&self, iso2: &str) -> Option<usize> {
        self.countries
            .iter()
            .position(|country| country.iso2 == iso2 && country.main_code)
    }
}

/// Catalogs are equal when their lists are; the version is ignored.
impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.countries == other.countries
            && self.preferred_countries == other.preferred_countries
            && self.hidden_area_codes == other.hidden_area_codes
    }
}
