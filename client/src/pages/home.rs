//! Landing page that hosts the marketplace intro.

use leptos::prelude::*;

/// Static landing content; the assistant widget floats above it.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Campus Classifieds"</h1>
            <p class="home-page__subtitle">
                "Buy and sell study tools with students from your university. "
                "Ask the assistant in the corner to find something for you."
            </p>
        </section>
    }
}
