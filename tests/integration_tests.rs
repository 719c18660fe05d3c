//! Integration tests for the isitdown MCP Server
//!
//! These tests verify MCP protocol handling and the status checker against a
//! local mock HTTP server - they never reach isitdownrightnow.com.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use isitdown_mcp_server::config::Config;
use isitdown_mcp_server::status::checker::StatusChecker;

const INDETERMINATE: &str = "Could not determine the status of the website.";

const UP_PAGE: &str = r#"<html><body>
<span class="upicon"></span>
<div class="tabletrsimple">Response Time</div>
<div class="tabletrsimple">Last Down<span class="tab"> 3 hours ago </span></div>
</body></html>"#;

const DOWN_PAGE: &str = r#"<html><body>
<span class="downicon"></span>
<div class="tabletrsimple">Response Time</div>
<div class="tabletrsimple">Last Down<span class="tab">2 minutes ago</span></div>
</body></html>"#;

const BOTH_MARKERS_PAGE: &str = r#"<html><body>
<span class="upicon"></span><span class="downicon"></span>
</body></html>"#;

const NO_MARKERS_PAGE: &str = "<html><body><p>under maintenance</p></body></html>";

/// Build a config pointing at a mock server (or any URL prefix)
fn fixture_config(server_url: &str) -> Config {
    Config {
        base_url: format!("{}/check.php?domain=", server_url),
        user_agent: "isitdown-app/0.0.1".to_string(),
        timeout: Duration::from_secs(2),
    }
}

fn checker_for(server_url: &str) -> StatusChecker {
    StatusChecker::new(fixture_config(server_url)).expect("client construction")
}

mod status_checker_tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn up_page_reports_up_with_last_down_note() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/check.php?domain=example.com")
            .with_status(200)
            .with_body(UP_PAGE)
            .create_async()
            .await;

        let reply = checker_for(&server.url()).check_status("example.com").await;
        assert_eq!(reply, "The website is up. Last down time is: 3 hours ago");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn down_page_reports_down() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/check.php?domain=example.com")
            .with_status(200)
            .with_body(DOWN_PAGE)
            .create_async()
            .await;

        let reply = checker_for(&server.url()).check_status("example.com").await;
        assert_eq!(reply, "The website is down. Last down time is: 2 minutes ago");
    }

    #[tokio::test]
    async fn down_wins_when_both_markers_present() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/check.php?domain=example.com")
            .with_status(200)
            .with_body(BOTH_MARKERS_PAGE)
            .create_async()
            .await;

        let reply = checker_for(&server.url()).check_status("example.com").await;
        assert!(reply.starts_with("The website is down."));
    }

    #[tokio::test]
    async fn page_without_markers_is_indeterminate() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/check.php?domain=example.com")
            .with_status(200)
            .with_body(NO_MARKERS_PAGE)
            .create_async()
            .await;

        let reply = checker_for(&server.url()).check_status("example.com").await;
        assert_eq!(reply, INDETERMINATE);
    }

    #[tokio::test]
    async fn server_error_is_indeterminate() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/check.php?domain=example.com")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let reply = checker_for(&server.url()).check_status("example.com").await;
        assert_eq!(reply, INDETERMINATE);
    }

    #[tokio::test]
    async fn connection_refused_is_indeterminate() {
        // Nothing listens on this port
        let reply = checker_for("http://127.0.0.1:1").check_status("example.com").await;
        assert_eq!(reply, INDETERMINATE);
    }

    #[tokio::test]
    async fn missing_history_rows_degrade_to_placeholder() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/check.php?domain=example.com")
            .with_status(200)
            .with_body(r#"<html><body><span class="upicon"></span></body></html>"#)
            .create_async()
            .await;

        let reply = checker_for(&server.url()).check_status("example.com").await;
        assert_eq!(reply, "The website is up. Last down time not found.");
    }

    #[tokio::test]
    async fn identical_responses_produce_identical_replies() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/check.php?domain=example.com")
            .with_status(200)
            .with_body(UP_PAGE)
            .expect(2)
            .create_async()
            .await;

        let checker = checker_for(&server.url());
        let first = checker.check_status("example.com").await;
        let second = checker.check_status("example.com").await;
        assert_eq!(first, second);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn user_agent_header_is_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/check.php?domain=example.com")
            .match_header("user-agent", "isitdown-app/0.0.1")
            .with_status(200)
            .with_body(UP_PAGE)
            .create_async()
            .await;

        checker_for(&server.url()).check_status("example.com").await;
        mock.assert_async().await;
    }
}

mod tool_call_tests {
    use super::*;
    use isitdown_mcp_server::mcp::tools::ToolHandler;
    use isitdown_mcp_server::mcp::types::ToolResultContent;
    use mockito::Server;

    #[tokio::test]
    async fn get_website_status_round_trip() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/check.php?domain=example.com")
            .with_status(200)
            .with_body(UP_PAGE)
            .create_async()
            .await;

        let handler = ToolHandler::new(Arc::new(checker_for(&server.url())));
        let result = handler
            .call_tool("get_website_status", json!({"root_domain": "example.com"}))
            .await;

        assert!(!result.is_error);
        let ToolResultContent::Text { text } = &result.content[0];
        assert!(text.starts_with("The website is up."));
    }

    #[tokio::test]
    async fn fetch_failure_is_a_successful_tool_call() {
        // The indeterminate message is a result, not a tool error
        let handler = ToolHandler::new(Arc::new(checker_for("http://127.0.0.1:1")));
        let result = handler
            .call_tool("get_website_status", json!({"root_domain": "example.com"}))
            .await;

        assert!(!result.is_error);
        let ToolResultContent::Text { text } = &result.content[0];
        assert_eq!(text, INDETERMINATE);
    }
}

mod mcp_protocol_tests {
    use super::*;

    /// Helper to create a JSON-RPC request
    fn make_request(id: i64, method: &str, params: Option<Value>) -> Value {
        let mut request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
        });
        if let Some(p) = params {
            request["params"] = p;
        }
        request
    }

    #[test]
    fn test_initialize_request_format() {
        let request = make_request(
            1,
            "initialize",
            Some(json!({
                "protocolVersion": "2024-11-05",
                "clientInfo": {"name": "test-client", "version": "1.0.0"},
                "capabilities": {}
            })),
        );

        assert_eq!(request["method"], "initialize");
        assert!(request["params"]["protocolVersion"].is_string());
    }

    #[test]
    fn test_call_tool_request_format() {
        let request = make_request(
            2,
            "tools/call",
            Some(json!({
                "name": "get_website_status",
                "arguments": {"root_domain": "example.com"}
            })),
        );

        assert_eq!(request["method"], "tools/call");
        assert_eq!(request["params"]["name"], "get_website_status");
        assert_eq!(request["params"]["arguments"]["root_domain"], "example.com");
    }

    #[test]
    fn test_jsonrpc_response_structure() {
        let response: Value =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":{"tools":[]}}"#).unwrap();

        assert_eq!(response["jsonrpc"], "2.0");
        assert!(response["result"].is_object());
        assert!(response["error"].is_null());
    }

    #[test]
    fn test_jsonrpc_error_response_structure() {
        let response: Value = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"Method not found: unknown"}}"#,
        )
        .unwrap();

        assert!(response["result"].is_null());
        assert_eq!(response["error"]["code"], -32601);
    }
}
