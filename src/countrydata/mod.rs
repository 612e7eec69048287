mod builder;
mod catalog;
mod country;
mod curator;
mod raw_country;
mod settings;

pub use builder::{get_mask, init_countries};
pub use catalog::{
    Catalog, CatalogConfig, DEFAULT_MASK, DEFAULT_PREFIX, PreserveOrder, build_catalog,
};
pub use country::{AreaCodePolicy, CountryRecord};
pub use raw_country::{CountryEntry, RawCountry};
pub use settings::{CustomSettings, build_custom_settings, extend_raw_countries};
