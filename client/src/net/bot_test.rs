use super::*;

const DEFAULT: &str = "An error occurred while contacting the server.";

// =============================================================
// BotError::rejected
// =============================================================

#[test]
fn rejected_parses_reply_and_error_from_body() {
    let err = BotError::rejected(400, r#"{"reply":"Try again later","error":"bad_request"}"#);
    assert_eq!(
        err,
        BotError::Rejected {
            status: 400,
            reply: Some("Try again later".to_owned()),
            error: Some("bad_request".to_owned()),
        }
    );
}

#[test]
fn rejected_tolerates_non_json_body() {
    let err = BotError::rejected(502, "<html>Bad Gateway</html>");
    assert_eq!(err, BotError::Rejected { status: 502, reply: None, error: None });
}

#[test]
fn rejected_display_includes_status() {
    let err = BotError::rejected(503, "{}");
    assert_eq!(err.to_string(), "bot service rejected request: status 503");
}

// =============================================================
// display_message fallback chain
// =============================================================

#[test]
fn display_message_prefers_server_reply() {
    let err = BotError::rejected(500, r#"{"reply":"Server says hi","error":"internal_server_error"}"#);
    assert_eq!(err.display_message(DEFAULT), "Server says hi");
}

#[test]
fn display_message_falls_back_to_server_error() {
    let err = BotError::rejected(503, r#"{"error":"OpenAI API key not configured"}"#);
    assert_eq!(err.display_message(DEFAULT), "OpenAI API key not configured");
}

#[test]
fn display_message_skips_blank_reply() {
    let err = BotError::rejected(500, r#"{"reply":"  ","error":"boom"}"#);
    assert_eq!(err.display_message(DEFAULT), "boom");
}

#[test]
fn display_message_uses_default_without_server_text() {
    let err = BotError::rejected(500, "{}");
    assert_eq!(err.display_message(DEFAULT), DEFAULT);
}

#[test]
fn display_message_uses_default_for_transport_errors() {
    let err = BotError::Transport("connection refused".to_owned());
    assert_eq!(err.display_message(DEFAULT), DEFAULT);
}

#[test]
fn display_message_uses_default_for_decode_errors() {
    let err = BotError::Decode("expected value at line 1".to_owned());
    assert_eq!(err.display_message(DEFAULT), DEFAULT);
}

// =============================================================
// Endpoint
// =============================================================

#[test]
fn chatbot_endpoint_is_relative_api_path() {
    assert_eq!(CHATBOT_ENDPOINT, "/api/chatbot/");
}
