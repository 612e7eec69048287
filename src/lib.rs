//! Headless core of a phone input field.
//!
//! The crate builds a catalog of countries and area codes from a compiled-in
//! table plus user customisations, resolves a partially typed digit string to
//! the best matching catalog record and renders the digits through that
//! record's mask.
//!
//! ```
//! use rphonefield::{Catalog, CatalogConfig, RenderOptions, guess_country, render};
//!
//! let catalog = Catalog::build(&CatalogConfig::default());
//! let country = guess_country(&catalog, "1242", Some("us"));
//! assert_eq!(country.map(|c| c.iso2.as_str()), Some("bs"));
//!
//! let us = guess_country(&catalog, "1202", Some("us"));
//! assert_eq!(render("12025550123", us, &RenderOptions::default()), "+1 (202) 555-0123");
//! ```
mod countrydata;
mod formatter;
mod generated;
mod matcher;
mod session;
pub mod errors;
pub mod i18n;
pub(crate) mod string_util;

/// I decided to create this module because the compiled-in tables repeat
/// the same struct literal a few hundred times, and a row macro reads
/// much closer to the data itself.
mod macros;

#[cfg(test)]
mod tests;

pub use countrydata::{
    AreaCodePolicy, Catalog, CatalogConfig, CountryEntry, CountryRecord, CustomSettings,
    DEFAULT_MASK, DEFAULT_PREFIX, PreserveOrder, RawCountry, build_catalog,
    build_custom_settings, extend_raw_countries, get_mask, init_countries,
};
pub use errors::{ConfigError, MatchError};
pub use formatter::{LongNumbers, MAX_DIGITS, PLACEHOLDER, RenderOptions, format_number, render};
pub use generated::{RAW_COUNTRIES, RAW_TERRITORIES};
pub use i18n::{Localization, Region};
pub use matcher::{
    RESOLVE_PREFIX_LEN, ResolveCache, guess_country, try_guess_country, try_resolve_index,
};
pub use session::{CountrySummary, InputOutcome, PhoneSession, SessionOptions};
