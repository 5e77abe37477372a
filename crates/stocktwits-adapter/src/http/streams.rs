/*
[INPUT]:  Stream identifiers and paging window parameters
[OUTPUT]: Time-ordered message lists (returned as-is from the API)
[POS]:    HTTP layer - message stream endpoints (require access token)
[UPDATE]: When adding new stream endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{Result, StocktwitsClient};
use crate::types::StreamParams;

impl StocktwitsClient {
    /// Most recent messages for the specified user (id or handle)
    ///
    /// GET streams/user/{user}.json?since={since}&max={max}&limit={limit}
    pub async fn stream_user(&self, user: &str, params: StreamParams) -> Result<Vec<Value>> {
        let envelope = self
            .get_json(&format!("streams/user/{user}"), &params.to_query())
            .await?;
        envelope.payload("/messages")
    }

    /// Most recent messages for the specified symbol
    ///
    /// GET streams/symbol/{symbol}.json?since={since}&max={max}&limit={limit}
    pub async fn stream_symbol(&self, symbol: &str, params: StreamParams) -> Result<Vec<Value>> {
        let envelope = self
            .get_json(&format!("streams/symbol/{symbol}"), &params.to_query())
            .await?;
        envelope.payload("/messages")
    }

    /// Most recent messages for the specified watch list of the
    /// authenticating user
    ///
    /// GET streams/watchlist/{id}.json?since={since}&max={max}&limit={limit}
    pub async fn stream_watchlist(
        &self,
        watchlist_id: u64,
        params: StreamParams,
    ) -> Result<Vec<Value>> {
        let envelope = self
            .get_json(&format!("streams/watchlist/{watchlist_id}"), &params.to_query())
            .await?;
        envelope.payload("/messages")
    }

    /// Most recent messages carrying symbols trending in the last 5 minutes
    ///
    /// GET streams/trending.json?since={since}&max={max}&limit={limit}
    pub async fn stream_trending(&self, params: StreamParams) -> Result<Vec<Value>> {
        let envelope = self.get_json("streams/trending", &params.to_query()).await?;
        envelope.payload("/messages")
    }
}
