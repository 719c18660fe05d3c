//! MCP tool definitions and handlers
//!
//! The server exposes a single tool, `get_website_status`.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::mcp::types::{CallToolResult, Tool};
use crate::status::checker::StatusChecker;

/// Tool handler
pub struct ToolHandler {
    status_checker: Arc<StatusChecker>,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(status_checker: Arc<StatusChecker>) -> Self {
        Self { status_checker }
    }

    /// List all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![tool_def(
            "get_website_status",
            "Check whether a website is up or down via isitdownrightnow.com",
            get_website_status_schema(),
        )]
    }

    /// Call a tool by name
    pub async fn call_tool(&self, name: &str, args: Value) -> CallToolResult {
        match name {
            "get_website_status" => self.handle_get_website_status(args).await,
            _ => CallToolResult::error(format!("Unknown tool: {}", name)),
        }
    }

    async fn handle_get_website_status(&self, args: Value) -> CallToolResult {
        #[derive(Deserialize)]
        struct Args {
            root_domain: String,
        }

        let args: Args = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => return CallToolResult::error(format!("Invalid arguments: {}", e)),
        };

        // The checker renders every outcome, including failure, as prose
        let reply = self.status_checker.check_status(&args.root_domain).await;
        CallToolResult::text(reply)
    }
}

/// Create a tool definition
fn tool_def(name: &str, description: &str, schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema: schema,
    }
}

fn get_website_status_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "root_domain": {
                "type": "string",
                "description": "The root domain of the website to check (e.g. example.com)"
            }
        },
        "required": ["root_domain"]
    })
}
