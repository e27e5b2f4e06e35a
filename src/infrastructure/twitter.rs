//! Twitter API access
//!
//! [`TwitterService`] is the boundary the command executor talks to.
//! [`HttpTwitterService`] implements it over HTTPS with a bearer token.

pub mod parser;

use std::time::Duration;

use futures::future::{self, BoxFuture, FutureExt};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode, Url,
};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    domain::{Image, TimelineResponse, TwitterOperationError},
    infrastructure::config::Config,
};

pub type TwitterResult<T> = Result<T, TwitterOperationError>;

/// Network collaborator consumed by the command executor
pub trait TwitterService: Send + Sync {
    fn fetch_timeline(&self) -> BoxFuture<'static, TwitterResult<TimelineResponse>>;
    fn fetch_image(&self, url: &Url) -> BoxFuture<'static, TwitterResult<Image>>;
}

/// Settings needed to reach the API
#[derive(Clone, Debug)]
pub struct TwitterSettings {
    pub timeline_url: String,
    pub bearer_token: SecretString,
    pub request_timeout: Duration,
}

impl From<&Config> for TwitterSettings {
    fn from(config: &Config) -> Self {
        Self {
            timeline_url: config.timeline_url.clone(),
            bearer_token: config.bearer_token.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// `TwitterService` over HTTPS
#[derive(Clone, Debug)]
pub struct HttpTwitterService {
    client: Client,
    settings: TwitterSettings,
}

impl HttpTwitterService {
    pub fn new(settings: TwitterSettings) -> TwitterResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self { client, settings })
    }

    /// Checks the account before any request is made
    fn authorization(&self) -> TwitterResult<HeaderValue> {
        let token = self.settings.bearer_token.expose_secret();
        if token.trim().is_empty() {
            return Err(TwitterOperationError::AccountUnavailable);
        }
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|e| TwitterOperationError::AccountAccessFailure(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }

    fn timeline_request(&self) -> TwitterResult<(Url, HeaderMap)> {
        let url = Url::parse(&self.settings.timeline_url)
            .map_err(|_| TwitterOperationError::InvalidRequest)?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization()?);
        Ok((url, headers))
    }
}

impl TwitterService for HttpTwitterService {
    fn fetch_timeline(&self) -> BoxFuture<'static, TwitterResult<TimelineResponse>> {
        let (url, headers) = match self.timeline_request() {
            Ok(request) => request,
            Err(e) => return future::ready(Err(e)).boxed(),
        };
        let client = self.client.clone();

        async move {
            log::debug!("GET {url}");
            let response = client.get(url).headers(headers).send().await?;
            match response.status() {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    return Err(TwitterOperationError::AccountAccessDenied);
                }
                status if !status.is_success() => {
                    return Err(TwitterOperationError::RequestFailure(format!(
                        "unexpected status {status}"
                    )));
                }
                _ => {}
            }
            let body = response.bytes().await?;
            parser::parse_timeline(&body)
        }
        .boxed()
    }

    fn fetch_image(&self, url: &Url) -> BoxFuture<'static, TwitterResult<Image>> {
        let client = self.client.clone();
        let url = url.clone();

        async move {
            let response = client.get(url).send().await?.error_for_status()?;
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let bytes = response.bytes().await?;
            Ok::<_, TwitterOperationError>(Image::new(bytes.to_vec(), content_type))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(url: &str, token: &str) -> TwitterSettings {
        TwitterSettings {
            timeline_url: url.to_string(),
            bearer_token: SecretString::from(token.to_string()),
            request_timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_empty_token_is_account_unavailable() {
        let service =
            HttpTwitterService::new(settings("https://api.example.com/timeline.json", "  "))
                .unwrap();

        assert_eq!(
            service.timeline_request().unwrap_err(),
            TwitterOperationError::AccountUnavailable
        );
    }

    #[test]
    fn test_unusable_token_is_access_failure() {
        let service =
            HttpTwitterService::new(settings("https://api.example.com/timeline.json", "a\nb"))
                .unwrap();

        assert!(matches!(
            service.timeline_request().unwrap_err(),
            TwitterOperationError::AccountAccessFailure(_)
        ));
    }

    #[test]
    fn test_bad_url_is_invalid_request() {
        let service = HttpTwitterService::new(settings("not a url", "token")).unwrap();

        assert_eq!(
            service.timeline_request().unwrap_err(),
            TwitterOperationError::InvalidRequest
        );
    }

    #[test]
    fn test_timeline_request_carries_bearer_token() {
        let service =
            HttpTwitterService::new(settings("https://api.example.com/timeline.json", "abc"))
                .unwrap();

        let (url, headers) = service.timeline_request().unwrap();

        assert_eq!(url.as_str(), "https://api.example.com/timeline.json");
        assert_eq!(headers[AUTHORIZATION].to_str().unwrap(), "Bearer abc");
    }

    #[tokio::test]
    async fn test_fetch_timeline_without_token_fails_before_network() {
        let service =
            HttpTwitterService::new(settings("https://api.example.com/timeline.json", ""))
                .unwrap();

        assert_eq!(
            service.fetch_timeline().await.unwrap_err(),
            TwitterOperationError::AccountUnavailable
        );
    }
}
