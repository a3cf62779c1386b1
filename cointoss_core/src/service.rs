use std::time::Duration;

use async_trait::async_trait;

use crate::error::FlipError;
use crate::outcome::FlipOutcome;

/// Source of flip outcomes, typically the `/flip` endpoint.
#[async_trait(?Send)]
pub trait OutcomeService {
    async fn fetch_outcome(&self) -> Result<FlipOutcome, FlipError>;
}

/// Timer used to hold the reveal until the coin animation has finished.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

#[cfg(feature = "http")]
pub use self::http::HttpOutcomeService;

#[cfg(feature = "http")]
mod http {
    use async_trait::async_trait;

    use super::OutcomeService;
    use crate::error::FlipError;
    use crate::outcome::FlipOutcome;

    #[derive(serde::Deserialize)]
    struct FlipBody {
        result: FlipOutcome,
    }

    /// `GET {base_url}/flip` over reqwest.
    #[derive(Debug, Clone)]
    pub struct HttpOutcomeService {
        client: reqwest::Client,
        url: String,
    }

    impl HttpOutcomeService {
        pub fn new(base_url: &str) -> Self {
            Self {
                client: reqwest::Client::new(),
                url: format!("{}/flip", base_url.trim_end_matches('/')),
            }
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    #[async_trait(?Send)]
    impl OutcomeService for HttpOutcomeService {
        async fn fetch_outcome(&self) -> Result<FlipOutcome, FlipError> {
            let resp = self
                .client
                .get(&self.url)
                .send()
                .await
                .map_err(|e| FlipError::Request(e.to_string()))?;
            let status = resp.status();
            if !status.is_success() {
                return Err(FlipError::Status(status.as_u16()));
            }
            let body = resp
                .text()
                .await
                .map_err(|e| FlipError::Request(e.to_string()))?;
            let parsed: FlipBody =
                serde_json::from_str(&body).map_err(|e| FlipError::Decode(e.to_string()))?;
            Ok(parsed.result)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn url_joins_base_without_double_slash() {
            assert_eq!(
                HttpOutcomeService::new("http://127.0.0.1:5000/").url(),
                "http://127.0.0.1:5000/flip"
            );
        }
    }
}
