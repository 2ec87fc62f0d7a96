use globe_core::dataset::fixed_landmarks;
use globe_core::{parse_countries, DataValidationError};

#[test]
fn parses_restcountries_layout_and_ignores_extra_fields() {
    let json = br#"[
        {"name":{"common":"India","official":"Republic of India"},"population":1380000000,
         "latlng":[20.5937,78.9629],"region":"Asia"},
        {"name":{"common":"Iceland"},"population":366425,"latlng":[65.0,-18.0]}
    ]"#;
    let ds = parse_countries(json).unwrap();
    assert!(ds.rejected.is_empty());
    assert_eq!(ds.records.len(), 2);
    assert_eq!(ds.records[0].name, "India");
    assert_eq!(ds.records[0].population, 1_380_000_000);
    assert_eq!(ds.records[0].latlng, (20.5937, 78.9629));
}

#[test]
fn malformed_rows_are_skipped_with_a_reason() {
    let json = br#"[
        {"name":{"common":"NoCoords"},"population":5},
        {"name":{"common":"NoPop"},"latlng":[1.0,2.0]},
        {"name":{"common":"ThreeCoords"},"population":5,"latlng":[1.0,2.0,3.0]},
        {"population":5,"latlng":[1.0,2.0]},
        {"name":{"common":"Fine"},"population":5,"latlng":[1.0,2.0]}
    ]"#;
    let ds = parse_countries(json).unwrap();
    assert_eq!(ds.records.len(), 1);
    assert_eq!(ds.records[0].name, "Fine");
    assert_eq!(
        ds.rejected,
        vec![
            DataValidationError::MissingCoordinates {
                index: 0,
                name: "NoCoords".into()
            },
            DataValidationError::MissingPopulation {
                index: 1,
                name: "NoPop".into()
            },
            DataValidationError::MalformedCoordinates {
                index: 2,
                name: "ThreeCoords".into(),
                len: 3
            },
            DataValidationError::MissingName { index: 3 },
        ]
    );
}

#[test]
fn non_array_document_is_an_error() {
    assert!(parse_countries(br#"{"name":"x"}"#).is_err());
    assert!(parse_countries(b"not json").is_err());
}

#[test]
fn empty_array_is_fine() {
    let ds = parse_countries(b"[]").unwrap();
    assert!(ds.records.is_empty());
    assert!(ds.rejected.is_empty());
}

#[test]
fn landmarks_have_valid_coordinates() {
    for r in fixed_landmarks() {
        assert!((-90.0..=90.0).contains(&r.latlng.0), "{}", r.name);
        assert!((-180.0..=180.0).contains(&r.latlng.1), "{}", r.name);
    }
}
