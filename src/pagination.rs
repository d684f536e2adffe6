//! Cursor-based pagination: the [`Pager`] state machine.

use std::marker::PhantomData;
use std::sync::Arc;

use http::Method;
use serde::de::DeserializeOwned;

use crate::client::ClientInner;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{ListParams, Paginated};
use crate::request::RequestSpec;

#[derive(Debug)]
enum PagerState {
    /// At least one more fetch is expected (including the first).
    Ready,
    /// The server returned a page without a continuation token.
    Exhausted,
    /// A fetch failed. Terminal; the display of the original error is kept
    /// so later calls can point back at it.
    Failed(String),
}

/// A stateful, single-pass iterator over a paginated list endpoint.
///
/// The pager owns the continuation cursor: it snapshots the caller's
/// [`ListParams`] at construction, merges the current cursor into a copy of
/// them for each fetch, and reads the next cursor out of each response.
/// Items come back in server order; nothing is re-sorted or deduplicated.
///
/// Once `Exhausted` or `Failed` a pager cannot be reset; build a fresh one
/// from the same params to iterate again. The `&mut self` API makes
/// concurrent sharing a compile error rather than a data race.
pub struct Pager<C: HttpClient, Page: Paginated + DeserializeOwned> {
    inner: Arc<ClientInner<C>>,
    path: String,
    path_params: Vec<(String, String)>,
    limit: Option<u32>,
    extra_query: Vec<(String, String)>,
    cursor: Option<String>,
    state: PagerState,
    _page: PhantomData<fn() -> Page>,
}

impl<C: HttpClient, Page: Paginated + DeserializeOwned> std::fmt::Debug for Pager<C, Page> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("path", &self.path)
            .field("path_params", &self.path_params)
            .field("limit", &self.limit)
            .field("extra_query", &self.extra_query)
            .field("cursor", &self.cursor)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<C: HttpClient, Page: Paginated + DeserializeOwned> Pager<C, Page> {
    /// Create a pager over `path` with the given list options.
    ///
    /// Fails with [`SkiffError::Validation`] if the options carry a
    /// prefilled `start` cursor (cursor state belongs to the pager, and a
    /// cursor is only valid for the exact options it was produced from) or a
    /// zero `limit`.
    pub(crate) fn new(
        inner: Arc<ClientInner<C>>,
        path: String,
        path_params: Vec<(String, String)>,
        params: &ListParams,
        extra_query: Vec<(String, String)>,
    ) -> Result<Self, SkiffError> {
        if params.start.is_some() {
            return Err(SkiffError::Validation(
                "list options for a pager must not set `start`: the pager owns cursor state"
                    .to_owned(),
            ));
        }
        if params.limit == Some(0) {
            return Err(SkiffError::Validation(
                "list option `limit` must be at least 1".to_owned(),
            ));
        }
        Ok(Self {
            inner,
            path,
            path_params,
            limit: params.limit,
            extra_query,
            cursor: None,
            state: PagerState::Ready,
            _page: PhantomData,
        })
    }

    /// Whether at least one more fetch is expected.
    ///
    /// Cheap and synchronous; reflects expectation, not whether the next
    /// fetch will succeed.
    pub fn has_next(&self) -> bool {
        matches!(self.state, PagerState::Ready)
    }

    /// Fetch exactly one page and return its items in server order.
    ///
    /// Transitions to `Exhausted` when the response has no continuation
    /// token. On failure the pager transitions to `Failed` and the error
    /// propagates; further calls error immediately without touching the
    /// network.
    pub async fn get_next(&mut self) -> Result<Vec<Page::Item>, SkiffError> {
        match &self.state {
            PagerState::Ready => {}
            PagerState::Exhausted => {
                return Err(SkiffError::Validation(
                    "pager is exhausted; construct a new pager to iterate again".to_owned(),
                ));
            }
            PagerState::Failed(original) => {
                return Err(SkiffError::Validation(format!(
                    "pager previously failed and is terminal: {original}"
                )));
            }
        }

        let mut spec = RequestSpec::new(Method::GET, self.path.clone());
        for (name, value) in &self.path_params {
            spec = spec.path_param(name.clone(), value.clone());
        }
        for (name, value) in &self.extra_query {
            spec = spec.query(name.clone(), value.clone());
        }
        spec = spec.query_opt("limit", self.limit);
        spec = spec.query_opt("start", self.cursor.as_deref());

        let page: Page = match self.inner.request(spec).await {
            Ok(page) => page,
            Err(e) => {
                self.state = PagerState::Failed(e.to_string());
                return Err(e);
            }
        };

        self.cursor = page.next_start().map(ToOwned::to_owned);
        if self.cursor.is_none() {
            self.state = PagerState::Exhausted;
        }
        Ok(page.items())
    }

    /// Drain every remaining page, concatenating items in page order.
    ///
    /// All-or-nothing: the first failed fetch propagates its error and no
    /// partial results are returned.
    pub async fn get_all(&mut self) -> Result<Vec<Page::Item>, SkiffError> {
        let mut all = Vec::new();
        while self.has_next() {
            all.extend(self.get_next().await?);
        }
        Ok(all)
    }
}
