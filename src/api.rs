use std::future::Future;

use crate::errors::ChatError;
use crate::models::{CourseStats, QueryRequest, QueryResponse};

/// The backend as seen by the client: one query endpoint and one status endpoint.
///
/// Futures are not required to be `Send`; in the browser every call runs on
/// the single event loop.
pub trait ChatApi {
    /// `POST {base}/query`. Non-success statuses map to [`ChatError::QueryStatus`].
    fn query(&self, request: &QueryRequest) -> impl Future<Output = Result<QueryResponse, ChatError>>;

    /// `GET {base}/courses`. Non-success statuses map to [`ChatError::StatsStatus`].
    fn course_stats(&self) -> impl Future<Output = Result<CourseStats, ChatError>>;
}
