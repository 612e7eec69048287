use std::collections::HashMap;

/// Display-name overrides for the country list.
///
/// Keys are either an iso2 code (`"de"`) or the English country name
/// (`"Germany"`); iso2 keys win when both are present for the same country.
pub type Localization = HashMap<String, String>;
