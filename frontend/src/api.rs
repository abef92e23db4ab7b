use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use course_chat::{ChatApi, ChatError, ClientConfig, CourseStats, QueryRequest, QueryResponse};
use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// `ChatApi` over `fetch`, relative to the configured API base.
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ChatApi for HttpApi {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ChatError> {
        let url = self.config.query_url();
        let send = async {
            let resp = Request::post(&url)
                .json(request)
                .map_err(|e| ChatError::transport(format!("Serialize error: {e}")))?
                .send()
                .await
                .map_err(|e| ChatError::transport(e.to_string()))?;

            if !resp.ok() {
                return Err(ChatError::QueryStatus { status: resp.status() });
            }

            resp.json::<QueryResponse>()
                .await
                .map_err(|e| ChatError::decode(e.to_string()))
        };
        with_timeout(self.config.request_timeout, send).await
    }

    async fn course_stats(&self) -> Result<CourseStats, ChatError> {
        let url = self.config.courses_url();
        let fetch = async {
            let resp = Request::get(&url)
                .send()
                .await
                .map_err(|e| ChatError::transport(e.to_string()))?;

            if !resp.ok() {
                return Err(ChatError::StatsStatus { status: resp.status() });
            }

            resp.json::<CourseStats>()
                .await
                .map_err(|e| ChatError::decode(e.to_string()))
        };
        with_timeout(self.config.request_timeout, fetch).await
    }
}

/// Races `call` against a timer so a silent backend cannot keep the UI disabled.
async fn with_timeout<T>(
    limit: Option<Duration>,
    call: impl Future<Output = Result<T, ChatError>>,
) -> Result<T, ChatError> {
    let Some(limit) = limit else {
        return call.await;
    };

    let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
    let call = pin!(call);
    let timer = pin!(TimeoutFuture::new(millis));

    match select(call, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("Request abandoned after {}s", limit.as_secs());
            Err(ChatError::Timeout { seconds: limit.as_secs() })
        }
    }
}
