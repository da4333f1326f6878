//! Paginated listing envelope

use serde::{Deserialize, Serialize};

/// One page of a listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token to request the following page; absent on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,
}
