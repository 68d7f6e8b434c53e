//! End-to-end interpretation of free-text queries.

use chrono::NaiveDate;
use regex::Regex;
use rstest::rstest;
use vigia_core::{AccidentType, ComunaAlias, KeywordGroup};
use vigia_query::{AccidentMatcher, Location, PlaceMatcher, QueryInterpreter, tables};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("???")]
#[case("choque choque choque")]
#[case("el 99/99/2025 en Pirque")]
#[case("1/1/1999")]
#[case("2025-09-23T08:00:00")]
#[case("Ñ ñ á é í ó ú ü")]
#[case("accidente 🚗 en la autopista 🚦 del 7-7-2027")]
fn every_query_yields_a_complete_request(#[case] raw: &str) {
    let shape = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
    let request = QueryInterpreter::default().interpret_on(raw, today());

    assert!(shape.is_match(&request.fecha), "fecha {:?}", request.fecha);
    assert!(AccidentType::ALL.contains(&request.tipo_accidente));
    assert!(!request.comuna.is_empty());
    assert!(!request.region.is_empty());
    assert_eq!(request.prompt, raw.trim());
}

#[rstest]
#[case("Choque en la Alameda")]
#[case("colisión en la Alameda")]
#[case("COLISION en la Alameda")]
fn collision_synonyms_are_case_and_accent_insensitive(#[case] raw: &str) {
    let request = QueryInterpreter::default().interpret_on(raw, today());
    assert_eq!(request.tipo_accidente, AccidentType::Colision);
}

#[rstest]
#[case("Alameda")]
#[case("Santiago Centro")]
#[case("Temuco")]
fn santiago_aliases_and_unknown_places_share_the_default(#[case] raw: &str) {
    let request = QueryInterpreter::default().interpret_on(raw, today());
    assert_eq!(request.comuna, "SANTIAGO");
    assert_eq!(request.region, "METROPOLITANA");
}

#[test]
fn configured_tables_replace_builtins() {
    let mut aliases = vec![ComunaAlias::new("puente alto", "PUENTE ALTO", "METROPOLITANA")];
    aliases.extend(tables::comuna_aliases());
    let keywords = vec![KeywordGroup::new(AccidentType::Atropello, &["peaton"])];

    let interpreter = QueryInterpreter::new(
        AccidentMatcher::from_groups(&keywords).unwrap(),
        PlaceMatcher::from_aliases(&aliases, Location::default()).unwrap(),
    );

    let request = interpreter.interpret_on("peatón herido en Puente Alto", today());
    assert_eq!(request.comuna, "PUENTE ALTO");
    assert_eq!(request.tipo_accidente, AccidentType::Atropello);

    // Built-in collision keywords are gone; the category falls back.
    let request = interpreter.interpret_on("atropello en Providencia", today());
    assert_eq!(request.comuna, "PROVIDENCIA");
    assert_eq!(request.tipo_accidente, AccidentType::Colision);
}
