pub mod fetcher;
pub mod parser;
pub mod scale;
pub mod types;

use fetcher::{fetch_history, FetchError};
use parser::{parse_history_bytes, HistoryParseError};
use types::QuakeRecord;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] FetchError),
    #[error("upstream response malformed: {0}")]
    UpstreamMalformed(#[from] HistoryParseError),
}

pub async fn fetch_and_normalize(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<QuakeRecord>, FeedError> {
    let body = fetch_history(client, url).await?;
    let records = parse_history_bytes(&body)?;
    tracing::debug!(count = records.len(), "normalized earthquake history");
    Ok(records)
}
