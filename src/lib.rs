//! isitdown MCP Server Library
//!
//! A Model Context Protocol (MCP) server that checks whether a website is up
//! or down by scraping isitdownrightnow.com.

pub mod config;
pub mod error;
pub mod mcp;
pub mod status;

pub use config::Config;
pub use error::{IsitdownMcpError, Result};
