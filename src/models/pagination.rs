//! Pagination wire types.

use serde::Deserialize;

/// Options accepted by every list endpoint.
///
/// `start` exists for callers driving pagination by hand with direct `list`
/// calls. When handing options to a [`Pager`](crate::Pager), leave it unset:
/// the pager owns cursor state and rejects prefilled cursors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of items per page.
    pub limit: Option<u32>,
    /// Continuation token from a previous page's `next.start`.
    pub start: Option<String>,
}

impl ListParams {
    /// Options with a page-size limit.
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// The continuation block a list response carries while more pages exist.
#[derive(Debug, Clone, Deserialize)]
pub struct ListNext {
    /// Opaque continuation token for the next page. Absent on the final page.
    pub start: Option<String>,
    /// Fully-formed URL of the next page, when the server provides one.
    pub href: Option<String>,
}

/// Implemented by every list response so the [`Pager`](crate::Pager) can
/// drive iteration generically.
pub trait Paginated {
    /// The item type within a page.
    type Item;

    /// Consume the page, yielding its items in server order.
    fn items(self) -> Vec<Self::Item>;

    /// The continuation token, if more pages exist.
    fn next_start(&self) -> Option<&str>;
}

/// Implement [`Paginated`] for a list response whose items live in `$field`
/// and whose continuation block is the conventional `next` member.
macro_rules! impl_paginated {
    ($response:ty, $field:ident, $item:ty) => {
        impl $crate::models::Paginated for $response {
            type Item = $item;

            fn items(self) -> Vec<$item> {
                self.$field
            }

            fn next_start(&self) -> Option<&str> {
                self.next.as_ref().and_then(|n| n.start.as_deref())
            }
        }
    };
}
pub(crate) use impl_paginated;
