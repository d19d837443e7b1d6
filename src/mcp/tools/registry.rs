//! Tool registry - central routing for MCP tools.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::traits::Generator;
use crate::mcp::content::{ContentItem, ToolResult};
use crate::purchase_order::form::PurchaseOrderForm;
use crate::AppState;

use super::purchase_order::{self, GeneratePurchaseOrderArgs};

/// Tool descriptor conforming to MCP specification.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Debug, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![purchase_order::descriptor()]
    }

    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
        app_state: &AppState,
    ) -> ToolResult {
        match name {
            purchase_order::TOOL_NAME => self.call_generate_purchase_order(arguments, app_state).await,
            _ => ToolResult::error(format!(
                "Tool '{}' is not available. Available tools: {}",
                name,
                purchase_order::TOOL_NAME
            )),
        }
    }

    async fn call_generate_purchase_order(
        &self,
        arguments: Option<Value>,
        app_state: &AppState,
    ) -> ToolResult {
        let args = match parse_arguments::<GeneratePurchaseOrderArgs>(arguments) {
            Ok(args) => args,
            Err(err) => return ToolResult::error(err),
        };

        let data = match args.purchase_order {
            Some(supplied) => PurchaseOrderForm::from_data(supplied).into_data(),
            None => app_state.current_data(),
        };
        let grand_total = data.grand_total();

        match app_state.generator.generate(data).await {
            Ok(doc) => ToolResult::success(vec![
                ContentItem::text(format!(
                    "Purchase order generated.\nFile: {}\nNet payable: {:.2}",
                    doc.filename, grand_total
                )),
                ContentItem::document(&doc),
            ]),
            Err(err) => ToolResult::error(format!("Error: {}", err.user_message())),
        }
    }
}

/// Missing arguments decode as an empty object so all-optional tools work.
fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or_else(|| Value::Object(Default::default()));
    serde_json::from_value(value).map_err(|err| format!("Invalid arguments: {}", err))
}
