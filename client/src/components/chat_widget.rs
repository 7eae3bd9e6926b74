//! Floating chatbot widget: launcher button, message list and prompt input.
//!
//! SYSTEM CONTEXT
//! ==============
//! All interaction state lives in a component-local `WidgetState` signal, so
//! it resets on remount. Transitions that need the bot service return a
//! `BotRequest`; `perform` runs it on the local executor and feeds the
//! outcome back into the state.
//!
//! The prompt text is a separate signal and the view reads the state through
//! memos, so typing only touches the input element.

use leptos::prelude::*;

use crate::components::product_preview::ProductPreview;
use crate::state::widget::{BotRequest, Message, WidgetState, expand_label, visible_products};

const HEADER_TITLE: &str = "AI Product Assistant";
const INPUT_PLACEHOLDER: &str = "Type tool name or 'show tools'...";

/// Chat widget pinned to the corner of the page.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = RwSignal::new(WidgetState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let open = Memo::new(move |_| state.with(|s| s.open));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let send_disabled = Memo::new(move |_| state.with(WidgetState::send_disabled));
    let messages = Memo::new(move |_| state.with(|s| s.messages.clone()));
    let expanded = Memo::new(move |_| state.with(WidgetState::expanded_flags));

    Effect::new(move || {
        let _ = messages.with(Vec::len);
        let _ = loading.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let toggle = move || {
        let mut request = None;
        state.update(|s| request = s.toggle_open());
        if let Some(request) = request {
            perform(state, request);
        }
    };

    let do_send = move || {
        let text = input.get_untracked();
        let mut request = None;
        state.update(|s| request = s.submit(&text));
        if let Some(request) = request {
            input.set(String::new());
            perform(state, request);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-widget">
            {move || {
                if !open.get() {
                    return view! {
                        <button
                            class="chat-widget__launcher"
                            aria-label="Open assistant"
                            on:click=move |_| toggle()
                        >
                            "\u{1F916}"
                        </button>
                    }
                        .into_any();
                }

                view! {
                    <div class="chat-widget__box">
                        <div class="chat-widget__header">
                            <span>{HEADER_TITLE}</span>
                            <button
                                class="chat-widget__close"
                                aria-label="Close assistant"
                                on:click=move |_| toggle()
                            >
                                "\u{2715}"
                            </button>
                        </div>

                        <div class="chat-widget__messages" node_ref=messages_ref>
                            {move || {
                                let flags = expanded.get();
                                messages.with(|list| {
                                    list.iter()
                                        .enumerate()
                                        .map(|(index, msg)| {
                                            let is_expanded = flags.get(index).copied().unwrap_or(false);
                                            render_message(state, index, msg, is_expanded)
                                        })
                                        .collect::<Vec<_>>()
                                })
                            }}

                            {move || {
                                loading
                                    .get()
                                    .then(|| {
                                        view! {
                                            <div class="chat-widget__message chat-widget__message--bot">
                                                "Loading..."
                                            </div>
                                        }
                                    })
                            }}
                        </div>

                        <div class="chat-widget__input-row">
                            <input
                                class="chat-widget__input"
                                type="text"
                                placeholder=INPUT_PLACEHOLDER
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                            <button
                                class="btn btn--primary chat-widget__send"
                                on:click=move |_| do_send()
                                disabled=move || send_disabled.get()
                            >
                                {move || if loading.get() { "..." } else { "Send" }}
                            </button>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

fn render_message(state: RwSignal<WidgetState>, index: usize, msg: &Message, expanded: bool) -> AnyView {
    let class = if msg.is_bot() {
        "chat-widget__message chat-widget__message--bot"
    } else {
        "chat-widget__message chat-widget__message--user"
    };
    let content = msg.content.clone();

    if !msg.is_bot() || msg.products.is_empty() {
        return view! {
            <div class=class>
                <span>{content}</span>
            </div>
        }
            .into_any();
    }

    let previews = visible_products(&msg.products, expanded)
        .iter()
        .cloned()
        .map(|product| view! { <ProductPreview product=product/> })
        .collect::<Vec<_>>();

    let toggle = expand_label(msg.products.len(), expanded).map(|label| {
        view! {
            <button class="chat-widget__see-more" on:click=move |_| state.update(|s| s.toggle_expand(index))>
                {label}
            </button>
        }
    });

    view! {
        <div class=class>
            <div class="chat-widget__reply">{content}</div>
            {previews}
            {toggle}
        </div>
    }
        .into_any()
}

/// Run `request` against the bot service and fold the outcome into `state`.
fn perform(state: RwSignal<WidgetState>, request: BotRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::bot::send_message_to_bot(&request.message, request.initial()).await;
        if let Err(e) = &outcome {
            log::warn!("chatbot {:?} request failed: {e}", request.kind);
        }
        state.update(|s| s.complete(request.kind, outcome));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, request);
    }
}
