use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    fileops_mcp::main_entry().await
}
