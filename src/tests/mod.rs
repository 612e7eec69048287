mod matcher_tests;
mod session_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

fn iso2_codes(countries: &[crate::CountryRecord]) -> Vec<&str> {
    countries.iter().map(|country| country.iso2.as_str()).collect()
}
