/*
[INPUT]:  Access token (no per-call parameters)
[OUTPUT]: Currently trending symbols, refreshed server-side every 5 minutes
[POS]:    HTTP layer - trending symbol endpoints (require access token)
[UPDATE]: When adding new trending endpoints or changing response format
*/

use crate::http::{Result, StocktwitsClient};
use crate::types::TrendingSymbol;

impl StocktwitsClient {
    /// All symbols trending at the moment of the request, equities and
    /// non-equities (futures, forex) alike
    ///
    /// GET trending/symbols.json
    pub async fn trending_symbols(&self) -> Result<Vec<TrendingSymbol>> {
        let envelope = self.get_json("trending/symbols", &[]).await?;
        envelope.payload("/symbols")
    }

    /// Trending equities only; the API filters to prices above $5
    ///
    /// GET trending/symbols/equities.json
    pub async fn trending_equities(&self) -> Result<Vec<TrendingSymbol>> {
        let envelope = self.get_json("trending/symbols/equities", &[]).await?;
        envelope.payload("/symbols")
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, StocktwitsClient, StocktwitsError};
    use crate::types::TrendingSymbol;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> StocktwitsClient {
        StocktwitsClient::with_config_and_base_urls(
            ClientConfig::default(),
            "token",
            &server.uri(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_trending_symbols_projects_symbol_and_title() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/trending/symbols.json"))
            .and(query_param("access_token", "token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": {"status": 200},
                "symbols": [
                    {"id": 686, "symbol": "AAPL", "title": "Apple Inc.", "exchange": "NASDAQ"},
                    {"id": 11917, "symbol": "ES_F", "title": "E-Mini S&P 500 Futures"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client.trending_symbols().await.expect("trending_symbols failed");

        assert_eq!(
            result,
            vec![
                TrendingSymbol {
                    symbol: "AAPL".to_string(),
                    title: "Apple Inc.".to_string()
                },
                TrendingSymbol {
                    symbol: "ES_F".to_string(),
                    title: "E-Mini S&P 500 Futures".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_trending_equities_uses_equities_path() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/trending/symbols/equities.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": {"status": 200},
                "symbols": [
                    {"id": 686, "symbol": "AAPL", "title": "Apple Inc."}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client.trending_equities().await.expect("trending_equities failed");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn test_trending_rate_limited_envelope() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/trending/symbols.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": {"status": 429},
                "errors": [{"message": "Rate limit exceeded"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.trending_symbols().await.expect_err("should fail");
        assert!(matches!(err, StocktwitsError::Api { status: 429, .. }));
    }
}
