//! Product preview formatting helpers.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use crate::net::types::{Product, ProductId};

/// Route of the product detail page for `id`.
pub fn product_path(id: &ProductId) -> String {
    format!("/product/{id}")
}

/// One-line summary of the optional product fields.
///
/// Fields that are missing or blank are skipped; the rest are joined with
/// `" | "`.
pub fn product_meta(product: &Product) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(seller) = &product.seller {
        let name = present(seller.first_name.as_deref());
        let email = present(seller.email.as_deref());
        match (name, email) {
            (Some(name), Some(email)) => parts.push(format!("Seller: {name} ({email})")),
            (Some(name), None) => parts.push(format!("Seller: {name}")),
            (None, Some(email)) => parts.push(format!("({email})")),
            (None, None) => {}
        }
    }
    if let Some(university) = present(product.university.as_deref()) {
        parts.push(format!("University: {university}"));
    }
    if let Some(faculty) = present(product.faculty.as_deref()) {
        parts.push(format!("Faculty: {faculty}"));
    }
    if let Some(price) = product.price.as_ref().filter(|p| !p.is_blank()) {
        parts.push(format!("Price: EGP {price}"));
    }
    if let Some(condition) = present(product.condition.as_deref()) {
        parts.push(format!("Condition: {condition}"));
    }
    if let Some(category) = present(product.category_name.as_deref()) {
        parts.push(format!("Category: {category}"));
    }

    parts.join(" | ")
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
