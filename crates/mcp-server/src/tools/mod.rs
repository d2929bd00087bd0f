//! File Ops MCP tool surface.
//!
//! Schemas describe the tool parameters; dispatch owns the service and the per-tool handlers.

mod dispatch;
mod schemas;

pub use dispatch::FileOpsService;
