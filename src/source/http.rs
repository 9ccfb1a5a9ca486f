use async_trait::async_trait;
use reqwest::Client;

use crate::config::SourceConfig;
use crate::rates::CurrencyRow;
use crate::source::{RateSource, SourceError};

const DATE_PLACEHOLDER: &str = "{date}";

/// Rates backend reached over HTTP.
///
/// `GET {base_url}{rates_path}` with `{date}` substituted; the body is a
/// JSON array of rows. No request timeout and no retry.
pub struct HttpRateSource {
    client: Client,
    base_url: String,
    rates_path: String,
}

impl HttpRateSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!("ratesview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rates_path: config.rates_path.clone(),
        })
    }

    /// Full URL requested for `date`.
    pub fn url_for(&self, date: &str) -> String {
        let path = self.rates_path.replace(DATE_PLACEHOLDER, date);
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn table_data(&self, date: &str) -> Result<Vec<CurrencyRow>, SourceError> {
        let url = self.url_for(date);
        tracing::debug!(%url, "Requesting rates");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<CurrencyRow>>()
            .await
            .map_err(|e| SourceError::Decode { url, source: e })
    }
}
