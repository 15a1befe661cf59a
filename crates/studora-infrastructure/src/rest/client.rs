//! HTTP client for the hosted document database.

use std::collections::HashMap;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use studora_core::error::{Result, StudoraError};

/// Client for a JSON-document REST database.
///
/// Documents live at `{base}/{collection}/{id}.json`; reading an absent
/// document yields a `null` body or a 404, both reported as `None`. An
/// optional auth token is appended as a query parameter.
#[derive(Clone, Debug)]
pub struct DocumentApiClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl DocumentApiClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(StudoraError::config(
                "document database base URL is not configured",
            ));
        }

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: None,
        })
    }

    /// Attaches an auth token sent with every request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn url(&self, resource: &str) -> String {
        match &self.auth_token {
            Some(token) => format!("{}/{}.json?auth={}", self.base_url, resource, token),
            None => format!("{}/{}.json", self.base_url, resource),
        }
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        self.url(&format!("{}/{}", collection, id))
    }

    fn collection_url(&self, collection: &str) -> String {
        self.url(collection)
    }

    /// Reads one document by key.
    pub async fn get_document<T>(&self, collection: &str, id: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(self.document_url(collection, id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response.text().await?;
        // An absent document comes back as a JSON `null` body.
        let document: Option<T> = serde_json::from_str(&body)?;
        Ok(document)
    }

    /// Creates or overwrites one document by key.
    pub async fn put_document<T>(&self, collection: &str, id: &str, document: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let response = self
            .client
            .put(self.document_url(collection, id))
            .json(document)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// Writes several documents of one collection in a single request.
    pub async fn patch_collection<T>(
        &self,
        collection: &str,
        documents: &HashMap<String, T>,
    ) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let response = self
            .client
            .patch(self.collection_url(collection))
            .json(documents)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// Reads a whole collection as an id-to-document map.
    ///
    /// An empty collection comes back as `null` and is reported as an
    /// empty map.
    pub async fn list_collection<T>(&self, collection: &str) -> Result<HashMap<String, T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(self.collection_url(collection))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(HashMap::new());
        }
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response.text().await?;
        let documents: Option<HashMap<String, T>> = serde_json::from_str(&body)?;
        Ok(documents.unwrap_or_default())
    }
}

async fn error_from_response(response: reqwest::Response) -> StudoraError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    map_http_error(status, &body)
}

fn map_http_error(status: StatusCode, body: &str) -> StudoraError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string());

    StudoraError::api(Some(status.as_u16()), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_base_url() {
        assert!(DocumentApiClient::new("").is_err());
        assert!(DocumentApiClient::new("   ").is_err());
    }

    #[test]
    fn test_document_url() {
        let client = DocumentApiClient::new("https://db.example.com/").unwrap();
        assert_eq!(
            client.document_url("users", "u-1"),
            "https://db.example.com/users/u-1.json"
        );
        assert_eq!(
            client.collection_url("colleges"),
            "https://db.example.com/colleges.json"
        );
    }

    #[test]
    fn test_document_url_with_auth_token() {
        let client = DocumentApiClient::new("https://db.example.com")
            .unwrap()
            .with_auth_token("tok");
        assert_eq!(
            client.document_url("users", "u-1"),
            "https://db.example.com/users/u-1.json?auth=tok"
        );
    }

    #[test]
    fn test_map_http_error_extracts_message() {
        let err = map_http_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Permission denied"}"#,
        );
        assert_eq!(
            err.to_string(),
            "API error (401): Permission denied"
        );
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "API error (502): upstream down");
    }
}
