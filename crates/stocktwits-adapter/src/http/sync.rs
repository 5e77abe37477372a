/*
[INPUT]:  Destination file paths for bulk CSV resources
[OUTPUT]: Raw CSV bytes written verbatim to disk
[POS]:    HTTP layer - unauthenticated bulk download endpoints
[UPDATE]: When the CSV resource locations change
*/

use std::path::Path;

use chrono::Utc;

use crate::http::{Result, StocktwitsClient};

impl StocktwitsClient {
    /// Download the sectors/industries CSV and write it to `csv_path`,
    /// overwriting any existing file. The content is not parsed or validated.
    ///
    /// GET /sectors/StockTwits-sectors-industries.csv (unauthenticated)
    pub async fn sync_sectors_and_industries(&self, csv_path: impl AsRef<Path>) -> Result<()> {
        self.download_csv("sectors/StockTwits-sectors-industries.csv", csv_path.as_ref())
            .await
    }

    /// Download the full symbol list CSV (regenerated daily under the current
    /// UTC date) and write it to `csv_path`, overwriting any existing file.
    ///
    /// GET /symbol-sync/{YYYY-MM-DD}.csv (unauthenticated)
    pub async fn sync_symbols(&self, csv_path: impl AsRef<Path>) -> Result<()> {
        let today = Utc::now().format("%Y-%m-%d");
        self.download_csv(&format!("symbol-sync/{today}.csv"), csv_path.as_ref())
            .await
    }
}
