use crate::domain::model::RawRow;
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{Result, TourError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Shape of the spreadsheet values API: first row headers, then data rows.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Catalog source backed by a Google Sheets values endpoint.
pub struct SheetsCatalogSource {
    client: Client,
    endpoint: String,
    sheet_id: String,
    api_key: String,
}

impl SheetsCatalogSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.sheets_endpoint().trim_end_matches('/').to_string(),
            sheet_id: config.sheet_id().to_string(),
            api_key: config.sheets_api_key().to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for SheetsCatalogSource {
    fn is_configured(&self) -> bool {
        !self.sheet_id.is_empty() && !self.api_key.is_empty()
    }

    async fn fetch_rows(&self) -> Result<Vec<RawRow>> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/A:P",
            self.endpoint, self.sheet_id
        );

        tracing::debug!("Fetching catalog rows from {}", url);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TourError::SourceError {
                message: format!("sheets API returned {}", status),
            });
        }

        let body: ValuesResponse = response.json().await?;
        let mut rows = body.values.into_iter();

        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row
                .iter()
                .map(|h| h.trim().to_lowercase().replace(' ', "_"))
                .collect(),
            None => return Ok(Vec::new()),
        };

        let raw_rows = rows
            .map(|cells| {
                let mut fields = HashMap::new();
                for (i, header) in headers.iter().enumerate() {
                    fields.insert(header.clone(), cells.get(i).cloned().unwrap_or_default());
                }
                RawRow { fields }
            })
            .collect();

        Ok(raw_rows)
    }
}
