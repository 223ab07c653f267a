pub mod flights;
pub mod mcp;
