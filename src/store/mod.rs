//! Document store adapter.
//!
//! Thin collection-style operations over the `game` and `review` tables, keyed by the
//! application-assigned string `id`. Every function is generic over [`ConnectionTrait`]
//! so callers can pass either the pooled connection or an open transaction.
//!
//! [`ConnectionTrait`]: sea_orm::ConnectionTrait

pub mod games;
pub mod reviews;

use sea_orm::Order;

/// Ordering applied to `find_all` style queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => Self::Asc,
            SortDirection::Descending => Self::Desc,
        }
    }
}
