use anyhow::Result;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;
use tracing::{info, warn};

use crate::use_cases::{InvalidParams, LotteryUseCase, is_client_error};

const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;
const METHOD_NOT_FOUND: i32 = -32601;
const PARSE_ERROR: i32 = -32700;

#[derive(Debug, serde::Deserialize)]
struct JsonRpcRequest {
    #[serde(default = "default_jsonrpc")]
    #[allow(dead_code)]
    jsonrpc: String,
    method: String,
    params: Option<Value>,
    id: Option<Value>,
}

fn default_jsonrpc() -> String {
    "2.0".to_string()
}

#[derive(Debug, serde::Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
    id: Option<Value>,
}

#[derive(Debug, serde::Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl JsonRpcResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id: Some(id.unwrap_or(json!(1))),
        }
    }

    fn failure(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
            id: Some(id.unwrap_or(json!(1))),
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct Tool {
    name: String,
    description: String,
    #[serde(rename = "inputSchema")]
    input_schema: Value,
}

fn tool(name: &str, description: &str, input_schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

pub struct MCPHandler {
    lottery_use_case: Arc<LotteryUseCase>,
}

impl MCPHandler {
    pub fn new(lottery_use_case: Arc<LotteryUseCase>) -> Self {
        Self { lottery_use_case }
    }

    pub async fn serve<R, W>(self, reader: R, mut writer: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str::<JsonRpcRequest>(&line) {
                Ok(req) => req,
                Err(e) => {
                    warn!("Failed to parse request: {} - Line: {}", e, line);
                    let error_response = JsonRpcResponse {
                        jsonrpc: "2.0".to_string(),
                        result: None,
                        error: Some(JsonRpcError {
                            code: PARSE_ERROR,
                            message: "Parse error".to_string(),
                            data: Some(json!(e.to_string())),
                        }),
                        id: None,
                    };
                    let response_json = serde_json::to_string(&error_response)?;
                    writeln!(writer, "{}", response_json)?;
                    writer.flush()?;
                    continue;
                }
            };

            // Notifications get no response.
            let is_notification =
                request.id.is_none() || request.method.starts_with("notifications/");
            if is_notification {
                if request.method == "notifications/initialized" {
                    info!("🎰 Client initialized");
                }
                continue;
            }

            let response = self.handle_request(request).await;
            let response_json = serde_json::to_string(&response)?;
            writeln!(writer, "{}", response_json)?;
            writer.flush()?;
        }

        Ok(())
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "tools/list" => self.handle_list_tools(request.id),
            "tools/call" => self.handle_call_tool(request.params, request.id).await,
            _ => JsonRpcResponse::failure(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        }
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        info!("🎰 Initializing lottery MCP server");
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "lottery-mcp-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn handle_list_tools(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({ "tools": self.get_tools() }))
    }

    async fn handle_call_tool(&self, params: Option<Value>, id: Option<Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::failure(id, INVALID_PARAMS, "Missing params".to_string());
        };

        let Some(tool_name) = params.get("name").and_then(|n| n.as_str()) else {
            return JsonRpcResponse::failure(id, INVALID_PARAMS, "Missing tool name".to_string());
        };

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));
        let arguments_map: HashMap<String, Value> =
            serde_json::from_value(arguments).unwrap_or_default();

        match self.execute_tool(tool_name, &arguments_map).await {
            Ok(content) => JsonRpcResponse::success(
                id,
                json!({
                    "content": [
                        {
                            "type": "text",
                            "text": content
                        }
                    ]
                }),
            ),
            Err(e) if is_client_error(&e) => {
                JsonRpcResponse::failure(id, INVALID_PARAMS, format!("Invalid arguments: {}", e))
            }
            Err(e) => {
                warn!(tool = tool_name, "tool failed: {:#}", e);
                JsonRpcResponse::failure(id, INTERNAL_ERROR, format!("Tool execution error: {}", e))
            }
        }
    }

    async fn execute_tool(
        &self,
        tool_name: &str,
        arguments: &HashMap<String, Value>,
    ) -> Result<String> {
        let use_case = &self.lottery_use_case;
        match tool_name {
            "check_number" => use_case.check_number(arguments).await,
            "check_message" => use_case.check_message(arguments).await,
            "scrape_draw" => use_case.scrape_draw(arguments).await,
            "get_draw" => use_case.get_draw(arguments).await,
            "get_latest_draws" => use_case.get_latest_draws(arguments).await,
            "get_draws_by_year" => use_case.get_draws_by_year(arguments).await,
            "search_number" => use_case.search_number(arguments).await,
            "sync_year" => use_case.sync_year(arguments).await,
            "delete_draw" => use_case.delete_draw(arguments).await,
            "get_draw_calendar" => use_case.get_draw_calendar(arguments).await,
            _ => Err(InvalidParams(format!("Unknown tool: {}", tool_name)).into()),
        }
    }

    fn get_tools(&self) -> Vec<Tool> {
        let date_only = json!({
            "type": "object",
            "properties": {
                "date": {
                    "type": "string",
                    "description": "Draw date in YYYY-MM-DD format (1st or 16th)"
                }
            },
            "required": ["date"]
        });
        let year_only = json!({
            "type": "object",
            "properties": {
                "year": {
                    "type": "integer",
                    "description": "Gregorian year, e.g. 2025"
                },
                "force": {
                    "type": "boolean",
                    "description": "Re-scrape draws that are already stored complete"
                }
            },
            "required": ["year"]
        });

        vec![
            tool(
                "check_number",
                "Check a 6-digit ticket against a draw, scraping the draw if it is not stored",
                json!({
                    "type": "object",
                    "properties": {
                        "number": {
                            "type": "string",
                            "description": "Six-digit ticket number"
                        },
                        "date": {
                            "type": "string",
                            "description": "Draw date in YYYY-MM-DD format; defaults to the current draw"
                        }
                    },
                    "required": ["number"]
                }),
            ),
            tool(
                "check_message",
                "Check a ticket from a free-text chat message such as 'ตรวจ 123456 16/10/68'",
                json!({
                    "type": "object",
                    "properties": {
                        "message": {
                            "type": "string",
                            "description": "Chat message holding a 6-digit number and an optional date"
                        }
                    },
                    "required": ["message"]
                }),
            ),
            tool(
                "scrape_draw",
                "Scrape one draw from the source site and store it",
                json!({
                    "type": "object",
                    "properties": {
                        "date": {
                            "type": "string",
                            "description": "Draw date in YYYY-MM-DD format"
                        },
                        "force": {
                            "type": "boolean",
                            "description": "Re-scrape even if a complete copy is stored"
                        }
                    },
                    "required": ["date"]
                }),
            ),
            tool(
                "get_draw",
                "Get a stored draw with every prize tier",
                date_only.clone(),
            ),
            tool(
                "get_latest_draws",
                "Get the most recent stored draws",
                json!({
                    "type": "object",
                    "properties": {
                        "limit": {
                            "type": "integer",
                            "description": "Number of draws to return (default: 10)"
                        }
                    }
                }),
            ),
            tool(
                "get_draws_by_year",
                "Get all stored draws of a year",
                year_only.clone(),
            ),
            tool(
                "search_number",
                "Find stored prize numbers containing the given digits",
                json!({
                    "type": "object",
                    "properties": {
                        "number": {
                            "type": "string",
                            "description": "One to six digits"
                        }
                    },
                    "required": ["number"]
                }),
            ),
            tool(
                "sync_year",
                "Scrape and store every past draw of a year",
                year_only,
            ),
            tool("delete_draw", "Remove a stored draw", date_only),
            tool(
                "get_draw_calendar",
                "Current and next draw dates",
                json!({
                    "type": "object",
                    "properties": {
                        "today": {
                            "type": "string",
                            "description": "Reference date in YYYY-MM-DD format (default: today)"
                        }
                    }
                }),
            ),
        ]
    }
}

pub fn stdio() -> (BufReader<io::Stdin>, io::Stdout) {
    (BufReader::new(io::stdin()), io::stdout())
}
