use super::*;
use crate::foundation::random::ScriptedSource;

fn store() -> PropertyStore {
    let mut s = PropertyStore::default();
    s.extend([
        ("Title of", PropertyValue::from("Secret Artwork")),
        ("Year of creation of", PropertyValue::from(2018u64)),
        ("Hash of", PropertyValue::from("0xAB")),
    ]);
    s
}

#[test]
fn values_display_like_json() {
    assert_eq!(PropertyValue::from("x").to_string(), "x");
    assert_eq!(PropertyValue::from(12u64).to_string(), "12");
    let v: PropertyValue = serde_json::from_str("1.5").unwrap();
    assert_eq!(v.to_string(), "1.5");
    let v: PropertyValue = serde_json::from_str("\"0xff\"").unwrap();
    assert_eq!(v, PropertyValue::Text("0xff".to_string()));
}

#[test]
fn whole_floats_display_without_fraction() {
    for (json, shown) in [
        ("100.0", "100"),
        ("1e3", "1000"),
        ("-2.50", "-2.5"),
        ("0.0", "0"),
        ("-0.0", "0"),
        ("1.5e-7", "1.5e-7"),
        ("0.000001", "0.000001"),
        ("1e21", "1e+21"),
        ("123456789012345680000.0", "123456789012345680000"),
    ] {
        let v: PropertyValue = serde_json::from_str(json).unwrap();
        assert_eq!(v.to_string(), shown, "{json}");
    }
}

#[test]
fn whole_float_encodes_like_its_integer() {
    let float: PropertyValue = serde_json::from_str("100.0").unwrap();
    assert_eq!(
        Encoded::new(float.to_string()),
        Encoded::new(PropertyValue::from(100u64).to_string())
    );
}

#[test]
fn store_deserializes_from_flat_map() {
    let s: PropertyStore =
        serde_json::from_str(r#"{"Artist of": "Rhea Myers", "Edition of": 1}"#).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.get("Edition of"), Some(&PropertyValue::from(1u64)));
}

#[test]
fn init_replaces_everything() {
    let mut s = store();
    let mut fresh = BTreeMap::new();
    fresh.insert("only".to_string(), PropertyValue::from("one"));
    s.init(fresh);
    assert_eq!(s.names().collect::<Vec<_>>(), vec!["only"]);
}

#[test]
fn random_name_indexes_sorted_keys() {
    let s = store();
    let mut src = ScriptedSource::new(vec![0, 1, 2]);
    assert_eq!(s.random_property_name(&mut src), Some("Hash of"));
    assert_eq!(s.random_property_name(&mut src), Some("Title of"));
    assert_eq!(s.random_property_name(&mut src), Some("Year of creation of"));
}

#[test]
fn random_name_on_empty_store_is_none() {
    let s = PropertyStore::default();
    assert!(s.random_property_name(&mut ScriptedSource::new(vec![0])).is_none());
    let err = s
        .render_random_fact(&Registry::standard(), &mut ScriptedSource::new(vec![0]))
        .unwrap_err();
    assert!(matches!(err, RevealError::EmptyStore));
}

#[test]
fn describe_wraps_name() {
    assert_eq!(
        describe("Title of"),
        r#"<p class="fact-title"><strong>Title of this artwork</strong></p>"#
    );
}

#[test]
fn render_random_value_uses_codec_and_registry() {
    let s = store();
    let reg = Registry::standard();
    // Representation 1 is colored boxes.
    let out = s
        .render_random_value("Hash of", &reg, &mut ScriptedSource::new(vec![1]))
        .unwrap();
    assert_eq!(out.matches("&#x2001;").count(), 2);
    assert!(out.contains("teal"));
    assert!(out.contains("aqua"));
}

#[test]
fn numbers_are_stringified_before_encoding() {
    let s = store();
    let reg = Registry::standard();
    let out = s
        .render_random_value("Year of creation of", &reg, &mut ScriptedSource::new(vec![0]))
        .unwrap();
    assert!(out.contains(">2018</span>"));
}

#[test]
fn unknown_property_is_an_error() {
    let err = store()
        .render_random_value("nope", &Registry::standard(), &mut ScriptedSource::new(vec![0]))
        .unwrap_err();
    assert!(matches!(err, RevealError::UnknownProperty(n) if n == "nope"));
}

#[test]
fn fact_markup_has_title_then_value() {
    let s = store();
    let reg = Registry::standard();
    let mut src = ScriptedSource::new(vec![1, 0]);
    let mut deck = FactDeck::new(&s, &reg, &mut src);
    let fact = deck.next_fact().unwrap();
    assert_eq!(fact.name, "Title of");
    let markup = fact.to_markup();
    assert!(markup.starts_with(r#"<p class="fact-title"><strong>Title of this artwork"#));
    assert!(markup.ends_with(r#"Secret Artwork</span></p>"#));
    assert!(markup.contains(r#"<p class="fact-value"><span style="font-family: Times"#));
}
