use crate::domain::model::Collection;
use crate::utils::error::FetchError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// 抓取單一集合的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct CollectionClient {
    client: Client,
    timeout: Option<Duration>,
}

impl CollectionClient {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// GET 端點並將回應解析為物件陣列，保留遠端回傳的順序
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        collection: Collection,
        endpoint: &str,
    ) -> Result<Vec<T>, FetchError> {
        tracing::debug!(
            "📡 Requesting {} (field `{}`) from {}",
            collection,
            collection.field(),
            endpoint
        );

        let mut request = self.client.get(endpoint);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|source| FetchError::Request { collection, source })?;

        let status = response.status();
        tracing::debug!("📡 {} response status: {}", collection, status);

        if !status.is_success() {
            return Err(FetchError::Status { collection, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request { collection, source })?;

        // 先以物件解析，陣列或純量元素一律視為格式錯誤
        let objects: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_slice(&body)
                .map_err(|source| FetchError::Decode { collection, source })?;

        let records = objects
            .into_iter()
            .map(|object| serde_json::from_value::<T>(serde_json::Value::Object(object)))
            .collect::<Result<Vec<T>, _>>()
            .map_err(|source| FetchError::Decode { collection, source })?;

        tracing::debug!("📡 Received {} {} records", records.len(), collection);
        Ok(records)
    }
}

impl Default for CollectionClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::UserRecord;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_preserves_order() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 1, "name": "Leanne"},
                    {"id": 2, "name": "Ervin"},
                    {"id": 3}
                ]));
        });

        let client = CollectionClient::default();
        let users: Vec<UserRecord> = client
            .fetch(Collection::Users, &server.url("/users"))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].name, Some(serde_json::json!("Leanne")));
        assert_eq!(users[1].name, Some(serde_json::json!("Ervin")));
        assert_eq!(users[2].name, None);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(503);
        });

        let client = CollectionClient::default();
        let err = client
            .fetch::<UserRecord>(Collection::Users, &server.url("/users"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FetchError::Status { collection: Collection::Users, status } if status.as_u16() == 503
        ));
        assert!(err
            .to_string()
            .starts_with("Failed to fetch data from one or more APIs"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"name": "not an array"}));
        });

        let client = CollectionClient::default();
        let err = client
            .fetch::<UserRecord>(Collection::Users, &server.url("/users"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }));
        assert_eq!(err.collection(), Collection::Users);
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_object_elements() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/arrays");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([["Alice"], []]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/scalars");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([1, "Bob"]));
        });

        let client = CollectionClient::default();
        for path in ["/arrays", "/scalars"] {
            let err = client
                .fetch::<UserRecord>(Collection::Users, &server.url(path))
                .await
                .unwrap_err();

            assert!(matches!(err, FetchError::Decode { .. }), "{}", path);
        }
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(serde_json::json!([]));
        });

        let client = CollectionClient::new(Some(Duration::from_millis(100)));
        let err = client
            .fetch::<UserRecord>(Collection::Users, &server.url("/slow"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Request { .. }));
    }
}
