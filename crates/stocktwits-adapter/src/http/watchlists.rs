/*
[INPUT]:  Watch list ids, names, and ticker symbols
[OUTPUT]: Watch list CRUD results for the authenticating user
[POS]:    HTTP layer - watch list endpoints (require access token)
[UPDATE]: When adding new watch list endpoints or changing response format
*/

use crate::http::{Result, StocktwitsClient};
use crate::types::{WatchedSymbol, Watchlist};

impl StocktwitsClient {
    /// List the private watch lists of the authenticating user
    ///
    /// GET watchlists.json
    pub async fn watchlists(&self) -> Result<Vec<Watchlist>> {
        let envelope = self.get_json("watchlists", &[]).await?;
        envelope.payload("/watchlists")
    }

    /// Create a private watch list, returning its id
    ///
    /// POST watchlists/create.json
    pub async fn create_watchlist(&self, name: &str) -> Result<u64> {
        let envelope = self
            .post_json("watchlists/create", &[("name", name.to_string())])
            .await?;
        Ok(envelope.payload::<Watchlist>("/watchlist")?.id)
    }

    /// Rename the specified watch list
    ///
    /// POST watchlists/update/{id}.json
    pub async fn update_watchlist(&self, watchlist_id: u64, new_name: &str) -> Result<Watchlist> {
        let envelope = self
            .post_json(
                &format!("watchlists/update/{watchlist_id}"),
                &[("name", new_name.to_string())],
            )
            .await?;
        envelope.payload("/watchlist")
    }

    /// Delete the specified watch list, returning the deleted id
    ///
    /// POST watchlists/destroy/{id}.json
    pub async fn delete_watchlist(&self, watchlist_id: u64) -> Result<u64> {
        let envelope = self
            .post_json(&format!("watchlists/destroy/{watchlist_id}"), &[])
            .await?;
        Ok(envelope.payload::<Watchlist>("/watchlist")?.id)
    }

    /// List the ticker symbols held by the specified watch list
    ///
    /// GET watchlists/show/{id}.json
    pub async fn show_watchlist_symbols(&self, watchlist_id: u64) -> Result<Vec<String>> {
        let envelope = self
            .get_json(&format!("watchlists/show/{watchlist_id}"), &[])
            .await?;
        let symbols: Vec<WatchedSymbol> = envelope.payload("/watchlist/symbols")?;
        Ok(symbols.into_iter().map(|entry| entry.symbol).collect())
    }

    /// Add one or more ticker symbols to the specified watch list
    ///
    /// POST watchlists/{id}/symbols/create.json
    pub async fn add_watchlist_symbols(&self, watchlist_id: u64, symbols: &[&str]) -> Result<()> {
        self.post_json(
            &format!("watchlists/{watchlist_id}/symbols/create"),
            &[("symbols", symbols.join(","))],
        )
        .await?;
        Ok(())
    }

    /// Remove one or more ticker symbols from the specified watch list
    ///
    /// POST watchlists/{id}/symbols/destroy.json
    pub async fn remove_watchlist_symbols(
        &self,
        watchlist_id: u64,
        symbols: &[&str],
    ) -> Result<()> {
        self.post_json(
            &format!("watchlists/{watchlist_id}/symbols/destroy"),
            &[("symbols", symbols.join(","))],
        )
        .await?;
        Ok(())
    }
}
