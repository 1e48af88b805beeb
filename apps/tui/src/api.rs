use crate::config::AppConfig;
use crate::domain::StampCardRecord;
use crate::location::CardId;
use reqwest::{Client, StatusCode, Url};
use std::future::Future;

/// Message shown for any non-2xx response unless detailed errors are on.
pub const NOT_FOUND_MESSAGE: &str = "User not found";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Any non-2xx response. No error body is read.
    #[error("Request failed with status {code} {reason}")]
    Status { code: u16, reason: String },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Parse(String),
}

impl FetchError {
    pub fn status(status: StatusCode) -> Self {
        Self::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Text shown in place of the card.
    pub fn user_message(&self, detailed: bool) -> String {
        match self {
            Self::Status { .. } if !detailed => NOT_FOUND_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

/// Where stamp cards come from.
pub trait CardSource: Send + Sync + 'static {
    fn fetch_card(
        &self,
        id: &CardId,
    ) -> impl Future<Output = Result<StampCardRecord, FetchError>> + Send;
}

/// `GET {api_url}/stamps/{id}` over reqwest.
#[derive(Debug, Clone)]
pub struct HttpCardSource {
    client: Client,
    api_url: Url,
}

impl HttpCardSource {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.api_url.clone(),
        })
    }

    pub fn card_url(&self, id: &CardId) -> Result<Url, FetchError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::Transport(format!("cannot build a path on {}", self.api_url)))?
            .pop_if_empty()
            .push("stamps")
            .push(id.as_str());
        Ok(url)
    }
}

impl CardSource for HttpCardSource {
    async fn fetch_card(&self, id: &CardId) -> Result<StampCardRecord, FetchError> {
        let url = self.card_url(id)?;
        tracing::debug!(%url, "fetching stamp card");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::info!(card = %id, %status, "stamp card request rejected");
            return Err(FetchError::status(status));
        }

        let body = response.bytes().await?;
        let record = serde_json::from_slice::<StampCardRecord>(&body)?;
        tracing::debug!(
            card = %id,
            stamps = record.total_stamps(),
            "stamp card received"
        );
        Ok(record)
    }
}
