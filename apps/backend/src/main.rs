#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prepmate_backend::run().await
}
