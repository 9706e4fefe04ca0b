//! Paged listings
//!
//! Page 1 is always requested. Each response reports `total_count`, from
//! which the number of pages is recomputed; the loop stops once the next
//! page number exceeds it. A request count of `max(1, ceil(total / size))`
//! follows.

use serde::de::DeserializeOwned;
use tracing::debug;

use dnssync_core::{Error, Result};

use crate::CloudflareProvider;
use crate::transport::Method;
use crate::types::Page;

impl CloudflareProvider {
    /// Fetch every page of `path` and return the concatenated items
    ///
    /// Any failing page fails the whole fetch; items from earlier pages
    /// are dropped.
    pub(crate) async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        action: &str,
        path: &str,
        page_size: u32,
    ) -> Result<Vec<T>> {
        if page_size == 0 {
            return Err(Error::invalid_input("Page size must be greater than zero"));
        }

        let mut items = Vec::new();
        let mut page: u64 = 1;

        loop {
            let request = self
                .requests
                .build(Method::Get, &page_path(path, page, page_size));
            let response = self.execute(action, request).await?;
            let decoded: Page<T> = self.check_response(action, &response)?;

            let total_pages = decoded
                .result_info
                .total_count
                .div_ceil(u64::from(page_size));

            debug!(
                action,
                page,
                total_pages,
                items = decoded.result.len(),
                "Fetched page"
            );

            items.extend(decoded.result);
            page += 1;

            if page > total_pages {
                break;
            }
        }

        Ok(items)
    }
}

/// Append paging and ordering parameters to `path`
fn page_path(path: &str, page: u64, page_size: u32) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!(
        "{}{}page={}&per_page={}&order=name&direction=asc",
        path, separator, page, page_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{ApiRequest, ApiResponse, HttpTransport};
    use dnssync_core::AuthConfig;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTransport(Arc<AtomicUsize>);

    #[async_trait::async_trait]
    impl HttpTransport for CountingTransport {
        async fn send(&self, _request: ApiRequest) -> anyhow::Result<ApiResponse> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(ApiResponse::new(200, r#"{"result":[],"result_info":{"total_count":0}}"#))
        }
    }

    #[tokio::test]
    async fn zero_page_size_is_rejected_before_any_request() {
        let sent = Arc::new(AtomicUsize::new(0));
        let provider = CloudflareProvider::with_transport(
            AuthConfig::ApiToken {
                token: "t".to_string(),
            },
            "https://api.example.invalid/client/v4/",
            Box::new(CountingTransport(sent.clone())),
        );

        let result: Result<Vec<serde_json::Value>> =
            provider.fetch_all_pages("Listing zones", "zones", 0).await;

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(sent.load(Ordering::SeqCst), 0);

        let result: Result<Vec<serde_json::Value>> =
            provider.fetch_all_pages("Listing zones", "zones", 50).await;
        assert!(result.unwrap().is_empty());
        assert_eq!(sent.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn page_path_extends_existing_query() {
        assert_eq!(
            page_path("zones?status=active", 2, 50),
            "zones?status=active&page=2&per_page=50&order=name&direction=asc"
        );
    }

    #[test]
    fn page_path_starts_query_when_missing() {
        assert_eq!(
            page_path("zones", 1, 50),
            "zones?page=1&per_page=50&order=name&direction=asc"
        );
    }
}
