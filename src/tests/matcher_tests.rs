use std::thread;

use super::init_logging;
use crate::{
    Catalog, CatalogConfig, MatchError, Region, ResolveCache, guess_country, try_guess_country,
};

fn default_catalog() -> Catalog {
    init_logging();
    Catalog::build(&CatalogConfig::default())
}

fn guessed_iso2<'a>(catalog: &'a Catalog, prefix: &str, default_iso2: Option<&str>) -> Option<&'a str> {
    guess_country(catalog, prefix, default_iso2).map(|country| country.iso2.as_str())
}

#[test]
fn empty_prefix_resolves_to_default_country() {
    let catalog = default_catalog();
    assert_eq!(guessed_iso2(&catalog, "", Some("gb")), Some("gb"));
    assert_eq!(guessed_iso2(&catalog, "   ", Some("gb")), Some("gb"));
    assert_eq!(guessed_iso2(&catalog, "", None), None);
    assert_eq!(guessed_iso2(&catalog, "", Some("xx")), None);
}

#[test]
fn longest_dial_code_wins() {
    let catalog = default_catalog();
    assert_eq!(guessed_iso2(&catalog, "1242", Some("us")), Some("bs"));
    assert_eq!(guessed_iso2(&catalog, "124", Some("gb")), Some("us"));
    assert_eq!(guessed_iso2(&catalog, "12425551234", None), Some("bs"));
}

#[test]
fn lower_priority_wins_on_equal_length() {
    let catalog = default_catalog();
    assert_eq!(guessed_iso2(&catalog, "7", None), Some("ru"));
    assert_eq!(guessed_iso2(&catalog, "79", None), Some("ru"));
    assert_eq!(guessed_iso2(&catalog, "1", None), Some("us"));
}

#[test]
fn territories_sharing_a_dial_code_rank_behind_the_country() {
    init_logging();
    let territory_catalog = Catalog::build(&CatalogConfig::default().with_territories(true));

    assert_eq!(guessed_iso2(&territory_catalog, "442079", None), Some("gb"));
    assert_eq!(guessed_iso2(&territory_catalog, "44", Some("us")), Some("gb"));
    assert_eq!(guessed_iso2(&territory_catalog, "590", None), Some("gp"));
    assert_eq!(guessed_iso2(&territory_catalog, "599", None), Some("cw"));
    assert_eq!(guessed_iso2(&territory_catalog, "39", None), Some("it"));
    assert_eq!(guessed_iso2(&territory_catalog, "1", None), Some("us"));
    assert!(territory_catalog.find("je").is_some());
}

#[test]
fn zero_priority_override_is_applied() {
    init_logging();
    let catalog = Catalog::build(&CatalogConfig::default().with_priority("kz", 0));
    // equal priorities: the first record in catalog order wins
    assert_eq!(guessed_iso2(&catalog, "79", None), Some("kz"));

    let catalog = Catalog::build(&CatalogConfig::default().with_priority("ca", -1));
    assert_eq!(guessed_iso2(&catalog, "1", None), Some("ca"));
}

#[test]
fn hidden_area_code_resolves_to_its_country() {
    let catalog = default_catalog();

    let kazakhstan = guess_country(&catalog, "7310123", Some("us")).unwrap();
    assert_eq!(kazakhstan.iso2, "kz");
    assert_eq!(kazakhstan.dial_code, "7");
    assert!(kazakhstan.main_code);

    assert_eq!(guessed_iso2(&catalog, "1787", None), Some("pr"));
    assert_eq!(guessed_iso2(&catalog, "1905", None), Some("ca"));
}

#[test]
fn unmatched_prefix_falls_back_to_default() {
    let catalog = default_catalog();
    assert_eq!(guessed_iso2(&catalog, "990", Some("fr")), Some("fr"));
    assert_eq!(guessed_iso2(&catalog, "990", None), None);
}

#[test]
fn missing_main_code_is_reported() {
    init_logging();
    let catalog = Catalog::build(&CatalogConfig::default().with_regions([Region::Europe]));

    let err = try_guess_country(&catalog, "1202", Some("fr")).unwrap_err();
    assert_eq!(
        err,
        MatchError::MissingMainCode { iso2: "us".to_string(), dial_code: "1202".to_string() }
    );
    assert_eq!(guessed_iso2(&catalog, "1202", Some("fr")), Some("fr"));
    assert_eq!(guessed_iso2(&catalog, "1202", None), None);
}

#[test]
fn visible_area_codes_are_selected_directly() {
    init_logging();
    let catalog = Catalog::build(
        &CatalogConfig::default().with_area_codes(crate::AreaCodePolicy::Only(vec!["us".into()])),
    );
    let alaska = try_guess_country(&catalog, "1907555", None).unwrap().unwrap();
    assert_eq!(alaska.iso2, "us");
    assert_eq!(alaska.dial_code, "1907");
    assert!(alaska.is_area_code());
}

#[test]
fn cache_matches_uncached_resolution() {
    let catalog = default_catalog();
    let cache = ResolveCache::new();

    for prefix in ["", "1", "1242", "7310", "44", "990", "33612"] {
        let expected = guess_country(&catalog, prefix, Some("us"));
        assert_eq!(cache.resolve(&catalog, prefix, Some("us")), expected);
        assert_eq!(cache.resolve(&catalog, prefix, Some("us")), expected);
    }
    assert_eq!(cache.len(), 7);

    cache.resolve(&catalog, "1242", None);
    assert_eq!(cache.len(), 8);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn cache_keys_stop_at_longest_dial_code() {
    let catalog = default_catalog();
    let cache = ResolveCache::new();
    assert_eq!(catalog.max_dial_code_len(), 6);

    let full = cache.resolve(&catalog, "12025550123", None);
    assert_eq!(full.map(|c| c.iso2.as_str()), Some("us"));
    assert_eq!(cache.resolve(&catalog, "120255", None), full);
    assert_eq!(cache.resolve(&catalog, "1202559999", None), full);
    assert_eq!(cache.len(), 1);

    assert_eq!(cache.resolve(&catalog, "12425551234", None).map(|c| c.iso2.as_str()), Some("bs"));
    assert_eq!(cache.len(), 2);
}

#[test]
fn cache_is_keyed_by_catalog_version() {
    init_logging();
    let cache = ResolveCache::with_capacity(4);
    let plain = Catalog::build(&CatalogConfig::default());
    let europe = Catalog::build(&CatalogConfig::default().with_regions([Region::Europe]));

    assert_eq!(cache.resolve(&plain, "1", Some("fr")).map(|c| c.iso2.as_str()), Some("us"));
    assert_eq!(cache.resolve(&europe, "1", Some("fr")).map(|c| c.iso2.as_str()), Some("fr"));
    assert_eq!(cache.len(), 2);
}

#[test]
fn cache_is_shared_between_threads() {
    let catalog = default_catalog();
    let cache = ResolveCache::new();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for prefix in ["1242", "7", "44", "1202"] {
                    assert!(cache.resolve(&catalog, prefix, Some("us")).is_some());
                }
            });
        }
    });
    assert_eq!(cache.len(), 4);
}
