#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vkbackup_lib::main().await
}
