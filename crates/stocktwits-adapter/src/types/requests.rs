/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

/// Paging window for stream endpoints.
///
/// `since`/`max` bound the returned message ids; `limit` caps the page size
/// (the API default and maximum is 30). The fields stay typed until the
/// transport boundary, where they flatten into query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamParams {
    /// Only messages with an id greater than this value
    pub since: Option<u64>,
    /// Only messages with an id less than or equal to this value
    pub max: Option<u64>,
    /// Page size, capped server-side at 30
    pub limit: u32,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            since: None,
            max: None,
            limit: 30,
        }
    }
}

impl StreamParams {
    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if let Some(since) = self.since {
            params.push(("since", since.to_string()));
        }
        if let Some(max) = self.max {
            params.push(("max", max.to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        params
    }
}
