//! Product detail route reached from assistant product previews.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Minimal product page keyed by the `id` route param.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <section class="product-page">
            <a class="product-page__back" href="/">
                "Back to listings"
            </a>
            <h1>"Product " {product_id}</h1>
        </section>
    }
}
