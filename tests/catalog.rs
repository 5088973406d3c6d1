use hebrew_core::{registry, CharCategory, GematriaMethod, Hebrew, HebrewEngine, HebrewGlyph};

#[test]
fn registry_categories_are_populated() {
    let registry = registry();
    assert_eq!(registry.letters().len(), 27);
    assert_eq!(registry.final_letters().len(), 5);
    assert!(registry.niqqud().iter().all(|c| c.category == CharCategory::Niqqud));
    assert!(registry.taamim().iter().all(|c| c.category == CharCategory::Taamim));
    assert!(!registry.yiddish().is_empty());
    assert!(!registry.other().is_empty());
}

#[test]
fn search_is_case_insensitive_and_ordered() {
    let registry = registry();
    assert_eq!(registry.search("final mem").map(|c| c.text), Some("ם"));
    assert_eq!(registry.search("SHIN").map(|c| c.text), Some("ש\u{5C1}"));
    assert_eq!(
        registry
            .search_in("Etnahta", CharCategory::Taamim)
            .map(|c| c.text),
        Some("\u{591}")
    );
    assert!(registry.search_in("Etnahta", CharCategory::Niqqud).is_none());
}

#[test]
fn glyph_from_pointed_text() {
    let text = Hebrew::new("בְּרֵאשִׁית");
    let first = text.graphemes().next().unwrap();
    assert!(HebrewGlyph::new(first).is_err());
    let plain = text.no_niqqud();
    let glyphs: Vec<HebrewGlyph> = plain
        .graphemes()
        .map(|g| HebrewGlyph::new(g).unwrap())
        .collect();
    let names: Vec<&str> = glyphs.iter().map(|g| g.name).collect();
    assert_eq!(names, vec!["Vet", "Resh", "Aleph", "Plain Shin", "Yod", "Sav"]);
}

#[test]
fn engine_end_to_end() {
    let engine = HebrewEngine::default();
    let pasuk = Hebrew::new("בְּרֵאשִׁ֖ית בָּרָ֣א אֱלֹהִ֑ים");
    let clean = pasuk.text_only(false);
    assert_eq!(clean.as_str(), "בראשית ברא אלהים");
    assert_eq!(
        engine.gematria(clean.as_str(), None).unwrap(),
        engine.gematria(pasuk.as_str(), Some(GematriaMethod::MisparHechrachi)).unwrap()
    );
    assert_eq!(engine.gematria(clean.as_str(), None).unwrap(), 913 + 203 + 86);
}

#[test]
fn genesis_one_one() {
    let pasuk = Hebrew::new("בְּרֵאשִׁ֖ית בָּרָ֣א אֱלֹהִ֑ים אֵ֥ת הַשָּׁמַ֖יִם וְאֵ֥ת הָאָרֶץ׃");
    assert_eq!(pasuk.gematria(GematriaMethod::MisparHechrachi, None).unwrap(), 2701);
    assert_eq!(pasuk.words(false).len(), 7);
}
