#[tokio::main]
async fn main() -> anyhow::Result<()> {
    codepad_lib::run().await
}
