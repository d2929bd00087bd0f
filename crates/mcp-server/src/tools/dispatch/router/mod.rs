// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod read_file;
pub(super) mod result;
pub(super) mod search_files;
pub(super) mod write_file;

mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::FileOpsService>
{
    tool_router::build_tool_router()
}
