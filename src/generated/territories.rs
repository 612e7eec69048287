use crate::{countrydata::RawCountry, macros::raw_country};

/// Dependent territories with a population of roughly 100,000 or lower.
/// Only merged into the catalog when territories are enabled.
pub static RAW_TERRITORIES: &[RawCountry] = &[
    raw_country!("American Samoa", [Oceania], "as", "1684"),
    raw_country!("Anguilla", [America, Caribbean], "ai", "1264"),
    raw_country!("Bermuda", [America, NorthAmerica], "bm", "1441"),
    raw_country!("British Virgin Islands", [America, Caribbean], "vg", "1284"),
    raw_country!("Cayman Islands", [America, Caribbean], "ky", "1345"),
    raw_country!("Cook Islands", [Oceania], "ck", "682"),
    raw_country!("Falkland Islands", [America, SouthAmerica], "fk", "500"),
    raw_country!("Faroe Islands", [Europe], "fo", "298"),
    raw_country!("Gibraltar", [Europe], "gi", "350"),
    raw_country!("Greenland", [America], "gl", "299"),
    raw_country!("Jersey", [Europe, EuUnion], "je", "44", Some(".... ......"), 1),
    raw_country!("Montserrat", [America, Caribbean], "ms", "1664"),
    raw_country!("Niue", [Asia], "nu", "683"),
    raw_country!("Norfolk Island", [Oceania], "nf", "672"),
    raw_country!("Northern Mariana Islands", [Oceania], "mp", "1670"),
    raw_country!("Saint Barthélemy", [America, Caribbean], "bl", "590", None, 1),
    raw_country!("Saint Helena", [Africa], "sh", "290"),
    raw_country!("Saint Martin", [America, Caribbean], "mf", "590", None, 2),
    raw_country!("Saint Pierre and Miquelon", [America, NorthAmerica], "pm", "508"),
    raw_country!("Sint Maarten", [America, Caribbean], "sx", "1721"),
    raw_country!("Tokelau", [Oceania], "tk", "690"),
    raw_country!("Turks and Caicos Islands", [America, Caribbean], "tc", "1649"),
    raw_country!("U.S. Virgin Islands", [America, Caribbean], "vi", "1340"),
    raw_country!("Wallis and Futuna", [Oceania], "wf", "681"),
];
