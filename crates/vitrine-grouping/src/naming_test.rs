use super::*;

fn product(code: Option<&str>, name: &str, attributes: VariantAttributes) -> RawProduct {
    RawProduct {
        id: "42".to_owned(),
        name: name.to_owned(),
        code: code.map(str::to_owned),
        attributes,
        ..RawProduct::default()
    }
}

fn attrs(
    grao: Option<&str>,
    diametro_ext: Option<&str>,
    altura_roda: Option<&str>,
    encaixe: Option<&str>,
) -> VariantAttributes {
    VariantAttributes {
        grao: grao.map(str::to_owned),
        diametro_ext: diametro_ext.map(str::to_owned),
        altura_roda: altura_roda.map(str::to_owned),
        encaixe: encaixe.map(str::to_owned),
    }
}

// -----------------------------------------------------------------------
// common_product_name
// -----------------------------------------------------------------------

#[test]
fn common_name_keeps_shared_words() {
    assert_eq!(
        common_product_name(&["Disco X Grão 40", "Disco X Grão 60"]),
        "Disco X Grão"
    );
}

#[test]
fn common_name_matches_words_case_insensitively() {
    assert_eq!(
        common_product_name(&["Roda Flap Zirconia 40", "RODA FLAP ZIRCONIA 80"]),
        "Roda Flap Zirconia"
    );
}

#[test]
fn short_common_name_falls_back_to_stripped_shortest() {
    // Shared words: "Lixa" (4 chars), too short.
    let names = ["Lixa Ferro Grão 80 x10", "Lixa Madeira 120", "Lixa Água 100mm"];
    assert_eq!(common_product_name(&names), "Lixa Água");
}

#[test]
fn shortest_name_tie_takes_the_earliest() {
    assert_eq!(common_product_name(&["AAA x1", "BBB x2"]), "AAA");
}

#[test]
fn unrelated_names_still_produce_a_title() {
    let name = common_product_name(&["Escova", "Disco", "Broca"]);
    assert_eq!(name, "Disco");
}

#[test]
fn stripped_to_nothing_falls_back_to_first_name() {
    assert_eq!(common_product_name(&[" x3", "Disco x3"]), "x3");
}

#[test]
fn single_and_empty_inputs() {
    assert_eq!(common_product_name(&["Disco de Corte"]), "Disco de Corte");
    assert_eq!(common_product_name::<&str>(&[]), "Produto");
    assert_eq!(common_product_name(&["", ""]), "Produto");
}

// -----------------------------------------------------------------------
// attribute_label
// -----------------------------------------------------------------------

#[test]
fn attribute_label_combines_diameter_and_height() {
    let label = attribute_label(&attrs(None, Some("115"), Some("25"), None));
    assert_eq!(label.as_deref(), Some("115x25mm"));
}

#[test]
fn attribute_label_diameter_only() {
    let label = attribute_label(&attrs(None, Some("180"), None, None));
    assert_eq!(label.as_deref(), Some("⌀180mm"));
}

#[test]
fn attribute_label_joins_parts_in_priority_order() {
    let label = attribute_label(&attrs(Some("60"), Some("115"), None, Some("22.2mm")));
    assert_eq!(label.as_deref(), Some("⌀115mm Grão 60 Encaixe 22.2mm"));
}

#[test]
fn attribute_label_skips_furo_encaixe() {
    assert!(attribute_label(&attrs(None, None, None, Some("Furo 7/8"))).is_none());
    assert!(attribute_label(&attrs(None, None, Some("25"), None)).is_none());
}

// -----------------------------------------------------------------------
// variant_label
// -----------------------------------------------------------------------

#[test]
fn variant_label_uses_name_remainder() {
    let p = product(Some("ABC123001"), "Disco X Grão 40", VariantAttributes::default());
    assert_eq!(variant_label(&p, "Disco X Grão"), "40");
}

#[test]
fn variant_label_trims_separators_from_remainder() {
    let p = product(Some("ABC123001"), "Disco X - (Fino)", VariantAttributes::default());
    assert_eq!(variant_label(&p, "Disco X"), "Fino");
}

#[test]
fn variant_label_separator_only_remainder_becomes_variante() {
    let p = product(Some("ABCDEFG1"), "Disco Flap -", attrs(Some("80"), None, None, None));
    assert_eq!(variant_label(&p, "Disco Flap"), "Variante EFG1");
}

#[test]
fn variant_label_falls_back_to_fields_when_base_is_whole_name() {
    let p = product(
        Some("ABC123001"),
        "Disco Flap",
        attrs(Some("80"), None, None, None),
    );
    assert_eq!(variant_label(&p, "Disco Flap"), "Grão 80");
}

#[test]
fn variant_label_falls_back_to_fields_when_base_absent() {
    let p = product(
        Some("ABC123001"),
        "Roda Reta",
        attrs(None, Some("200"), Some("25"), None),
    );
    assert_eq!(variant_label(&p, "Disco"), "200x25mm");
}

#[test]
fn variant_label_falls_back_to_sku_tail() {
    let p = product(Some("XYZ999A1B2"), "Escova", VariantAttributes::default());
    assert_eq!(variant_label(&p, "Escova"), "SKU A1B2");
}

#[test]
fn variant_label_sku_tail_uses_id_without_code() {
    let p = product(None, "Escova", VariantAttributes::default());
    assert_eq!(variant_label(&p, "Escova"), "SKU 42");
}

#[test]
fn variant_label_empty_base_skips_name_subtraction() {
    let p = product(Some("XYZ999A1"), "Escova", VariantAttributes::default());
    assert_eq!(variant_label(&p, ""), "SKU 99A1");
}

// -----------------------------------------------------------------------
// slugify / last_chars
// -----------------------------------------------------------------------

#[test]
fn slugify_collapses_whitespace_and_drops_symbols() {
    assert_eq!(slugify("  Disco   de Corte 4.1/2\" "), "disco-de-corte-412");
}

#[test]
fn slugify_drops_non_ascii_letters() {
    assert_eq!(slugify("Roda Grão"), "roda-gro");
}

#[test]
fn last_chars_counts_characters_not_bytes() {
    assert_eq!(last_chars("ABCDÃÇ", 3), "DÃÇ");
    assert_eq!(last_chars("AB", 4), "AB");
}
