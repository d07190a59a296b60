#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quake_feed_lib::run().await
}
