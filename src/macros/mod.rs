/// Builds one `RawCountry` row of the compiled-in tables.
///
/// Regions are given as bare `Region` variant names, the mask as an
/// `Option<&str>` expression and area codes as a bracketed list:
///
/// ```ignore
/// raw_country!("Canada", [America, NorthAmerica], "ca", "1", Some("(...) ...-...."), 1, ["204", "226"])
/// ```
macro_rules! raw_country {
    ($name:expr, [$($region:ident),*], $iso2:expr, $dial_code:expr) => {
        raw_country!($name, [$($region),*], $iso2, $dial_code, None)
    };
    ($name:expr, [$($region:ident),*], $iso2:expr, $dial_code:expr, $mask:expr) => {
        $crate::countrydata::RawCountry {
            name: $name,
            regions: &[$($crate::i18n::Region::$region),*],
            iso2: $iso2,
            dial_code: $dial_code,
            mask: $mask,
            priority: None,
            area_codes: None,
        }
    };
    ($name:expr, [$($region:ident),*], $iso2:expr, $dial_code:expr, $mask:expr, $priority:expr) => {
        $crate::countrydata::RawCountry {
            name: $name,
            regions: &[$($crate::i18n::Region::$region),*],
            iso2: $iso2,
            dial_code: $dial_code,
            mask: $mask,
            priority: Some($priority),
            area_codes: None,
        }
    };
    ($name:expr, [$($region:ident),*], $iso2:expr, $dial_code:expr, $mask:expr, $priority:expr, [$($area_code:expr),* $(,)?]) => {
        $crate::countrydata::RawCountry {
            name: $name,
            regions: &[$($crate::i18n::Region::$region),*],
            iso2: $iso2,
            dial_code: $dial_code,
            mask: $mask,
            priority: Some($priority),
            area_codes: Some(&[$($area_code),*]),
        }
    };
}

pub(crate) use raw_country;
