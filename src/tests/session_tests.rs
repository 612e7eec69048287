use super::init_logging;
use crate::{
    AreaCodePolicy, Catalog, CatalogConfig, CountrySummary, InputOutcome, LongNumbers,
    PhoneSession, RenderOptions, SessionOptions,
};

fn session(options: SessionOptions, initial_value: &str) -> PhoneSession {
    init_logging();
    PhoneSession::new(Catalog::build(&CatalogConfig::default()), options, initial_value)
}

fn us_area_code_session(options: SessionOptions) -> PhoneSession {
    init_logging();
    let config = CatalogConfig::default().with_area_codes(AreaCodePolicy::Only(vec!["us".to_string()]));
    PhoneSession::new(Catalog::build(&config), options, "")
}

fn record_index(session: &PhoneSession, iso2: &str, dial_code: &str) -> usize {
    session
        .catalog()
        .countries()
        .iter()
        .position(|country| country.iso2 == iso2 && country.dial_code == dial_code)
        .unwrap()
}

fn selected_iso2(session: &PhoneSession) -> Option<&str> {
    session.selected_country().map(|country| country.iso2.as_str())
}

#[test]
fn new_session_starts_with_default_dial_code() {
    let session = session(SessionOptions::default(), "");
    assert_eq!(session.formatted(), "+1");
    assert_eq!(selected_iso2(&session), Some("us"));
    assert!(!session.is_selection_frozen());
}

#[test]
fn new_session_guesses_from_initial_value() {
    let session = session(SessionOptions::default(), "+44 20");
    assert_eq!(selected_iso2(&session), Some("gb"));
    assert_eq!(session.formatted(), "+44 20");

    let session = self::session(SessionOptions::default(), "+12025550123");
    assert_eq!(session.formatted(), "+1 (202) 555-0123");
    assert_eq!(session.digits(), "12025550123");
}

#[test]
fn initial_guess_can_be_disabled() {
    let options = SessionOptions::default().with_disable_initial_country_guess(true);
    let session = session(options, "+44 20");
    assert_eq!(selected_iso2(&session), None);
    assert_eq!(session.formatted(), "");
    assert_eq!(session.country_data(), None);
}

#[test]
fn typing_re_guesses_the_country() {
    let mut session = session(SessionOptions::default(), "");

    assert_eq!(session.handle_input("+12"), InputOutcome::Updated);
    assert_eq!(session.formatted(), "+1 (2)");
    assert_eq!(selected_iso2(&session), Some("us"));

    assert_eq!(session.handle_input("+1242"), InputOutcome::Updated);
    assert_eq!(session.formatted(), "+1242");
    assert_eq!(selected_iso2(&session), Some("bs"));

    assert_eq!(session.handle_input("+1242"), InputOutcome::Unchanged);

    assert_eq!(session.handle_input("+"), InputOutcome::Cleared);
    assert_eq!(session.formatted(), "");
}

#[test]
fn unmatched_input_keeps_previous_selection() {
    let options = SessionOptions::default().with_default_country(None);
    let mut session = session(options, "");
    assert_eq!(selected_iso2(&session), None);

    session.handle_input("+44");
    assert_eq!(selected_iso2(&session), Some("gb"));

    assert_eq!(session.handle_input("+990"), InputOutcome::Updated);
    assert_eq!(selected_iso2(&session), Some("gb"));
    assert_eq!(session.formatted(), "+990");
}

#[test]
fn long_numbers_are_rejected_unless_enabled() {
    let sixteen = "+1234567890123456";

    let mut session = session(SessionOptions::default(), "");
    assert_eq!(session.handle_input(sixteen), InputOutcome::Rejected);
    assert_eq!(session.formatted(), "+1");

    let render = RenderOptions::default().with_long_numbers(LongNumbers::UpTo(16));
    let mut session = self::session(SessionOptions::default().with_render(render), "");
    assert_eq!(session.handle_input(sixteen), InputOutcome::Updated);
    assert_eq!(session.digits(), "1234567890123456");
}

#[test]
fn locked_country_code_rejects_dial_code_edits() {
    let options = SessionOptions::default().with_country_code_editable(false);
    let mut session = session(options, "");

    assert_eq!(session.handle_input("+2"), InputOutcome::Rejected);
    assert_eq!(session.handle_input(""), InputOutcome::Rejected);
    assert_eq!(session.formatted(), "+1");
    assert_eq!(session.handle_input("+15"), InputOutcome::Updated);
    assert_eq!(session.formatted(), "+1 (5)");
}

#[test]
fn guessing_can_be_disabled() {
    let options = SessionOptions::default().with_disable_country_guess(true);
    let mut session = session(options, "");

    session.handle_input("+44");
    assert_eq!(selected_iso2(&session), Some("us"));
    assert_eq!(session.formatted(), "+4 (4)");
}

#[test]
fn selecting_a_country_swaps_the_dial_code() {
    let mut session = session(SessionOptions::default(), "+12025550123");

    assert!(session.select_country("gb"));
    assert_eq!(selected_iso2(&session), Some("gb"));
    assert_eq!(session.formatted(), "+44 2025 550123");
    assert!(session.is_selection_frozen());

    assert!(!session.select_country("xx"));
    assert_eq!(selected_iso2(&session), Some("gb"));
}

#[test]
fn selecting_with_short_input_starts_from_dial_code() {
    let mut session = session(SessionOptions::default(), "");
    assert!(session.select_country("fr"));
    assert_eq!(session.formatted(), "+33");
}

#[test]
fn selecting_an_area_code_record_uses_its_dial_code() {
    let mut session = us_area_code_session(SessionOptions::default());
    assert_eq!(session.formatted(), "+1");

    let alaska = record_index(&session, "us", "1907");
    assert!(session.select_record(alaska));
    assert_eq!(session.formatted(), "+1907");
    let selected = session.selected_country().unwrap();
    assert_eq!(selected.dial_code, "1907");
    assert_eq!(selected.format, "+.... (...) ...-....");
    assert!(session.is_selection_frozen());

    session.handle_input("+19072025550123");
    assert_eq!(session.formatted(), "+1907 (202) 555-0123");

    let alabama = record_index(&session, "us", "1205");
    assert!(session.select_record(alabama));
    assert_eq!(session.formatted(), "+1205 (202) 555-0123");

    let main = record_index(&session, "us", "1");
    assert!(session.select_record(main));
    assert_eq!(session.formatted(), "+1 (202) 555-0123");
    assert_eq!(session.country_data().unwrap().dial_code, "1");

    assert!(!session.select_record(usize::MAX));
    assert_eq!(session.selected_country().unwrap().dial_code, "1");
}

#[test]
fn locked_area_code_covers_the_full_dial_code() {
    let options = SessionOptions::default().with_country_code_editable(false);
    let mut session = us_area_code_session(options);

    let alaska = record_index(&session, "us", "1907");
    assert!(session.select_record(alaska));

    assert_eq!(session.handle_input("+1202"), InputOutcome::Rejected);
    assert_eq!(session.handle_input("+1 (907)"), InputOutcome::Rejected);
    assert_eq!(session.formatted(), "+1907");

    assert_eq!(session.handle_input("+19075"), InputOutcome::Updated);
    assert_eq!(session.formatted(), "+1907 (5)");
    assert_eq!(session.selected_country().unwrap().dial_code, "1907");
}

#[test]
fn frozen_selection_survives_typing() {
    let mut session = session(SessionOptions::default(), "");
    session.handle_input("+1202");
    assert_eq!(selected_iso2(&session), Some("us"));

    session.select_country("ca");
    session.handle_input("+1 (202) 5");
    assert_eq!(selected_iso2(&session), Some("ca"));
    assert!(session.is_selection_frozen());

    // shorter than the dial code of the selection: guessed again
    session.select_country("bs");
    session.handle_input("+12");
    assert_eq!(selected_iso2(&session), Some("us"));
    assert!(!session.is_selection_frozen());
}

#[test]
fn set_value_without_plus_uses_default_country() {
    let mut session = session(SessionOptions::default(), "");

    session.set_value("2025550123");
    assert_eq!(session.formatted(), "+1 (202) 555-0123");
    assert_eq!(selected_iso2(&session), Some("us"));

    session.set_value("12025550123");
    assert_eq!(session.formatted(), "+1 (202) 555-0123");

    session.set_value("+442079460000");
    assert_eq!(selected_iso2(&session), Some("gb"));
    assert_eq!(session.formatted(), "+44 2079 460000");
}

#[test]
fn default_country_can_change() {
    let mut session = session(SessionOptions::default(), "+12025550123");

    session.set_default_country(Some("FR"));
    assert_eq!(session.default_country(), Some("fr"));
    assert_eq!(selected_iso2(&session), Some("fr"));
    assert_eq!(session.formatted(), "+33");

    session.set_default_country(Some("xx"));
    assert_eq!(selected_iso2(&session), None);
    assert_eq!(session.formatted(), "+");
}

#[test]
fn country_data_describes_selection() {
    let session = session(SessionOptions::default(), "+12025550123");
    assert_eq!(
        session.country_data(),
        Some(CountrySummary {
            name: "United States".to_string(),
            dial_code: "1".to_string(),
            country_code: "us".to_string(),
            format: "+. (...) ...-....".to_string(),
        })
    );
}

#[test]
fn replacing_catalog_keeps_selection() {
    let mut session = session(SessionOptions::default(), "+12025550123");
    let narrowed = Catalog::build(&CatalogConfig::default().with_only_countries(["gb", "us"]));

    session.replace_catalog(narrowed.clone());
    assert_eq!(session.catalog(), &narrowed);
    assert_eq!(selected_iso2(&session), Some("us"));
    assert_eq!(session.formatted(), "+1 (202) 555-0123");

    let europe = Catalog::build(&CatalogConfig::default().with_only_countries(["gb"]));
    session.replace_catalog(europe);
    assert_eq!(selected_iso2(&session), None);
    assert_eq!(session.formatted(), "+12025550123");
}
