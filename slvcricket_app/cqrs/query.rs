use std::sync::Arc;

use slvcricket_game::models::match_state::MatchState;
use slvcricket_types::errors::ApplicationError;

use crate::config::Config;

/// A marker trait for Query structs.
/// Queries are operations that read the state of the match.
pub trait Query {
    /// The data type that this query will return.
    type Output;
}

/// A trait for handlers that execute Queries.
/// It receives the query and a read-only view of the match.
pub trait QueryHandler<Q: Query> {
    fn handle(
        &self,
        query: Q,
        state: &MatchState,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
