use shopxl_core::PriceValue;

use super::*;
use crate::types::{FeedImage, FeedVariant};

// -----------------------------------------------------------------------
// fixtures
// -----------------------------------------------------------------------

fn make_variant(title: &str, price: &str) -> FeedVariant {
    FeedVariant {
        title: title.to_owned(),
        price: Some(PriceValue::Text(price.to_owned())),
        sku: Some(format!("SKU-{title}")),
        available: Some(true),
    }
}

fn make_image(src: &str) -> FeedImage {
    FeedImage {
        src: Some(src.to_owned()),
    }
}

fn make_product(
    handle: &str,
    images: Vec<FeedImage>,
    variants: Vec<FeedVariant>,
) -> FeedProduct {
    FeedProduct {
        handle: handle.to_owned(),
        title: format!("Title {handle}"),
        vendor: Some("Acme".to_owned()),
        product_type: Some("Apparel".to_owned()),
        tags: vec!["a".to_owned(), "b".to_owned()],
        images,
        variants,
    }
}

// -----------------------------------------------------------------------
// flatten_product
// -----------------------------------------------------------------------

#[test]
fn one_record_per_variant() {
    let product = make_product(
        "tee",
        vec![],
        vec![make_variant("S", "10.00"), make_variant("M", "11.00")],
    );
    let records = flatten_product(&product);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].variant_title, "S");
    assert_eq!(records[1].variant_title, "M");
}

#[test]
fn product_without_variants_yields_no_records() {
    let product = make_product("empty", vec![make_image("x")], vec![]);
    assert!(flatten_product(&product).is_empty());
}

#[test]
fn tags_are_joined_with_comma_space() {
    let product = make_product("tee", vec![], vec![make_variant("S", "10.00")]);
    let records = flatten_product(&product);
    assert_eq!(records[0].tags, "a, b");
}

#[test]
fn empty_tags_join_to_empty_string() {
    let mut product = make_product("tee", vec![], vec![make_variant("S", "10.00")]);
    product.tags.clear();
    assert_eq!(flatten_product(&product)[0].tags, "");
}

#[test]
fn missing_images_give_empty_image_url() {
    let product = make_product(
        "tee",
        vec![],
        vec![make_variant("S", "10.00"), make_variant("M", "11.00")],
    );
    for record in flatten_product(&product) {
        assert_eq!(record.image_url, "");
    }
}

#[test]
fn only_first_image_is_used_for_every_variant() {
    let product = make_product(
        "tee",
        vec![make_image("x"), make_image("y")],
        vec![
            make_variant("S", "10.00"),
            make_variant("M", "11.00"),
            make_variant("L", "12.00"),
        ],
    );
    let records = flatten_product(&product);
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.image_url == "x"));
}

#[test]
fn first_image_without_src_gives_empty_image_url() {
    let product = make_product(
        "tee",
        vec![FeedImage { src: None }, make_image("y")],
        vec![make_variant("S", "10.00")],
    );
    assert_eq!(flatten_product(&product)[0].image_url, "");
}

#[test]
fn shared_and_variant_fields_are_mapped() {
    let product = make_product("tee", vec![make_image("img")], vec![make_variant("S", "9.50")]);
    let record = &flatten_product(&product)[0];

    assert_eq!(record.handle, "tee");
    assert_eq!(record.title, "Title tee");
    assert_eq!(record.vendor.as_deref(), Some("Acme"));
    assert_eq!(record.product_type.as_deref(), Some("Apparel"));
    assert_eq!(record.variant_title, "S");
    assert_eq!(record.price, Some(PriceValue::Text("9.50".to_owned())));
    assert_eq!(record.sku.as_deref(), Some("SKU-S"));
    assert_eq!(record.available, Some(true));
}

// -----------------------------------------------------------------------
// flatten_page
// -----------------------------------------------------------------------

#[test]
fn page_order_is_product_then_variant() {
    let products = vec![
        make_product(
            "first",
            vec![],
            vec![make_variant("A", "1.00"), make_variant("B", "2.00")],
        ),
        make_product("skipped", vec![], vec![]),
        make_product("second", vec![], vec![make_variant("C", "0.50")]),
    ];
    let records = flatten_page(&products);

    let order: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.handle.as_str(), r.variant_title.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![("first", "A"), ("first", "B"), ("second", "C")]
    );
}

#[test]
fn page_record_count_is_sum_of_variants() {
    let products = vec![
        make_product("p1", vec![], vec![make_variant("A", "1.00")]),
        make_product(
            "p2",
            vec![],
            vec![
                make_variant("A", "1.00"),
                make_variant("B", "1.00"),
                make_variant("C", "1.00"),
            ],
        ),
        make_product("p3", vec![], vec![]),
    ];
    assert_eq!(flatten_page(&products).len(), 4);
}
