//! Inline product summary shown under a bot message.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::product::{product_meta, product_path};

/// Product title linking to its detail page, followed by a meta line.
#[component]
pub fn ProductPreview(product: Product) -> impl IntoView {
    let href = product_path(&product.id);
    let meta = product_meta(&product);
    let title = product.title;

    view! {
        <div class="product-preview">
            <a class="product-preview__title" href=href>
                {title}
            </a>
            {(!meta.is_empty()).then(|| view! { <div class="product-preview__meta">{meta}</div> })}
        </div>
    }
}
