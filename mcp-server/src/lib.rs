// MCP tools over the lottery checker library
pub mod mcp_handler;
pub mod use_cases;
