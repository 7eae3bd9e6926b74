//! Chatbot widget state and its transitions.
//!
//! DESIGN
//! ======
//! The widget is a tiny state machine: `idle -> loading -> idle`, with the
//! outcome of each request folded into the message list. Transitions are plain
//! methods on `WidgetState` so the component only wires events to them and
//! spawns the network call a transition asks for.
//!
//! A transition that needs the bot service returns a `BotRequest`; the caller
//! performs it and hands the outcome back through `complete`. Nothing here
//! touches the network or the reactive runtime.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::collections::HashMap;

use crate::net::bot::BotError;
use crate::net::types::{BotReply, Product};

/// Number of product previews shown before a message is expanded.
pub const PREVIEW_LIMIT: usize = 3;

/// Bot text when a send succeeds without a reply.
pub const DEFAULT_SEND_REPLY: &str = "Here are the results:";

/// Bot text when the initial recommendation fetch fails without server text.
pub const INITIAL_FETCH_ERROR: &str = "An error occurred while fetching recommendations.";

/// Bot text when a send fails without server text.
pub const SEND_ERROR: &str = "An error occurred while contacting the server.";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// A single chat entry. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub products: Vec<Product>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), products: Vec::new() }
    }

    pub fn bot(content: impl Into<String>, products: Vec<Product>) -> Self {
        Self { role: Role::Bot, content: content.into(), products }
    }

    pub fn is_bot(&self) -> bool {
        self.role == Role::Bot
    }
}

/// Which widget action produced a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// Greeting/recommendations fetched when the widget first opens.
    Initial,
    /// A user-typed query.
    Send,
}

/// A bot service call the caller must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotRequest {
    pub kind: RequestKind,
    pub message: String,
}

impl BotRequest {
    pub fn initial(&self) -> bool {
        self.kind == RequestKind::Initial
    }
}

/// Ephemeral state for one mounted widget.
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub open: bool,
    pub loading: bool,
    pub messages: Vec<Message>,
    expanded: HashMap<usize, bool>,
}

impl WidgetState {
    /// Flip the open flag.
    ///
    /// Opening with an empty history starts the initial recommendation fetch,
    /// unless a request is already in flight.
    pub fn toggle_open(&mut self) -> Option<BotRequest> {
        self.open = !self.open;
        if self.open && self.messages.is_empty() && !self.loading {
            self.loading = true;
            return Some(BotRequest { kind: RequestKind::Initial, message: String::new() });
        }
        None
    }

    /// Submit `text` typed by the user.
    ///
    /// Blank text and submissions while a request is pending are ignored.
    /// Otherwise the user message is appended right away and the literal
    /// text is returned for sending. The caller clears its input field only
    /// when a request comes back.
    pub fn submit(&mut self, text: &str) -> Option<BotRequest> {
        if text.trim().is_empty() || self.loading {
            return None;
        }
        self.messages.push(Message::user(text));
        self.loading = true;
        Some(BotRequest { kind: RequestKind::Send, message: text.to_owned() })
    }

    /// Fold the outcome of a request into the history and leave `loading`.
    ///
    /// Initial fetches replace the history; sends append to it.
    pub fn complete(&mut self, kind: RequestKind, outcome: Result<BotReply, BotError>) {
        let message = match (kind, outcome) {
            (RequestKind::Initial, Ok(reply)) => {
                let content = reply.reply_text().unwrap_or_default().to_owned();
                Message::bot(content, reply.into_products())
            }
            (RequestKind::Send, Ok(reply)) => {
                let content = reply.reply_text().unwrap_or(DEFAULT_SEND_REPLY).to_owned();
                Message::bot(content, reply.into_products())
            }
            (RequestKind::Initial, Err(err)) => Message::bot(err.display_message(INITIAL_FETCH_ERROR), Vec::new()),
            (RequestKind::Send, Err(err)) => Message::bot(err.display_message(SEND_ERROR), Vec::new()),
        };

        match kind {
            RequestKind::Initial => {
                self.messages = vec![message];
                self.expanded.clear();
            }
            RequestKind::Send => self.messages.push(message),
        }
        self.loading = false;
    }

    /// Flip the expanded flag for the message at `index`.
    pub fn toggle_expand(&mut self, index: usize) {
        let entry = self.expanded.entry(index).or_insert(false);
        *entry = !*entry;
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(&index).copied().unwrap_or(false)
    }

    /// Expanded flag for every message, in history order.
    pub fn expanded_flags(&self) -> Vec<bool> {
        (0..self.messages.len()).map(|index| self.is_expanded(index)).collect()
    }

    /// Whether the send control should be disabled.
    pub fn send_disabled(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
impl WidgetState {
    /// Products to render for the message at `index`.
    pub(crate) fn visible_products(&self, index: usize) -> &[Product] {
        let Some(message) = self.messages.get(index) else {
            return &[];
        };
        visible_products(&message.products, self.is_expanded(index))
    }
}

/// Cap `products` at `PREVIEW_LIMIT` unless `expanded`.
pub fn visible_products(products: &[Product], expanded: bool) -> &[Product] {
    if expanded {
        products
    } else {
        &products[..products.len().min(PREVIEW_LIMIT)]
    }
}

/// Label for the expand/collapse control, or `None` when every product fits.
pub fn expand_label(total: usize, expanded: bool) -> Option<String> {
    if total <= PREVIEW_LIMIT {
        return None;
    }
    if expanded {
        Some("Show Less".to_owned())
    } else {
        Some(format!("See {} more", total - PREVIEW_LIMIT))
    }
}
