use super::*;
use crate::net::types::{Price, Seller};

fn full_product() -> Product {
    Product {
        id: ProductId::Int(42),
        title: "Scientific calculator".to_owned(),
        seller: Some(Seller { first_name: Some("Omar".to_owned()), email: Some("omar@uni.edu".to_owned()) }),
        university: Some("Cairo University".to_owned()),
        faculty: Some("Engineering".to_owned()),
        price: Some(Price::Number(350.0)),
        condition: Some("used".to_owned()),
        category_name: Some("Calculators".to_owned()),
    }
}

// =============================================================
// product_path
// =============================================================

#[test]
fn product_path_formats_numeric_id() {
    assert_eq!(product_path(&ProductId::Int(42)), "/product/42");
}

#[test]
fn product_path_formats_text_id() {
    assert_eq!(product_path(&ProductId::from("abc-1")), "/product/abc-1");
}

// =============================================================
// product_meta
// =============================================================

#[test]
fn product_meta_lists_all_fields_in_order() {
    assert_eq!(
        product_meta(&full_product()),
        "Seller: Omar (omar@uni.edu) | University: Cairo University | Faculty: Engineering | \
         Price: EGP 350 | Condition: used | Category: Calculators"
    );
}

#[test]
fn product_meta_skips_missing_fields() {
    let mut product = Product::new(1, "Ruler");
    product.faculty = Some("Science".to_owned());
    product.price = Some(Price::Text("15.50".to_owned()));
    assert_eq!(product_meta(&product), "Faculty: Science | Price: EGP 15.50");
}

#[test]
fn product_meta_seller_without_email() {
    let mut product = Product::new(1, "Ruler");
    product.seller = Some(Seller { first_name: Some("Sara".to_owned()), email: None });
    assert_eq!(product_meta(&product), "Seller: Sara");
}

#[test]
fn product_meta_skips_blank_values_and_zero_price() {
    let mut product = Product::new(1, "Ruler");
    product.university = Some(String::new());
    product.price = Some(Price::Number(0.0));
    product.seller = Some(Seller::default());
    assert_eq!(product_meta(&product), "");
}
