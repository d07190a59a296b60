use reqwest::header::ACCEPT;

use super::types::EARTHQUAKE_REPORT_CODE;

pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

pub async fn fetch_history(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url)
        .query(&[
            ("codes", EARTHQUAKE_REPORT_CODE.to_string()),
            ("limit", HISTORY_LIMIT.to_string()),
        ])
        .header(ACCEPT, "application/json")
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?.to_vec();
    Ok(body)
}
