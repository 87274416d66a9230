use super::group_validation::validate_group;
use crate::ports::outbound::{DependencyRepository, FetchPage, FetchQuery};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://search.maven.org/solrsearch";

/// Rows requested per search page, kept small to go easy on the server
pub const ROWS_PER_PAGE: u32 = 200;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: SearchResult,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(rename = "numFound", default)]
    num_found: u64,
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    g: String,
    a: String,
}

/// MavenCentralClient adapter for listing artifacts through the Maven Central search API
///
/// This adapter implements the DependencyRepository port using the
/// `solrsearch/select` JSON endpoint. A recursive query also lists every
/// group nested under the requested one.
pub struct MavenCentralClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl MavenCentralClient {
    /// Creates a new Maven Central client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("deps-mapper/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: 3,
        })
    }

    /// Points the client at a mirror of the search API
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Solr query selecting the group, or the group and everything below it
    fn search_query(query: &FetchQuery) -> String {
        if query.recursive {
            format!("g:\"{0}\" OR g:{0}.*", query.group)
        } else {
            format!("g:\"{}\"", query.group)
        }
    }

    fn search_url(&self, query: &FetchQuery, page: u32) -> String {
        format!(
            "{}/select?q={}&start={}&rows={}&wt=json",
            self.base_url,
            urlencoding::encode(&Self::search_query(query)),
            page as u64 * ROWS_PER_PAGE as u64,
            ROWS_PER_PAGE
        )
    }

    /// Fetches one search page with retry logic (async)
    async fn fetch_with_retry(&self, query: &FetchQuery, page: u32) -> Result<SearchResponse> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_from_search(query, page).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("Maven Central request was not attempted")))
    }

    async fn fetch_from_search(&self, query: &FetchQuery, page: u32) -> Result<SearchResponse> {
        let url = self.search_url(query, page);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Maven Central API returned status code {}", response.status());
        }

        let search: SearchResponse = response.json().await?;
        Ok(search)
    }
}

/// Converts a search response into a page, keeping only matching groups
fn to_page(query: &FetchQuery, page: u32, search: SearchResponse) -> FetchPage {
    let nested_prefix = format!("{}.", query.group);
    let docs_len = search.response.docs.len() as u64;
    let notations = search
        .response
        .docs
        .into_iter()
        .filter(|doc| doc.g == query.group || (query.recursive && doc.g.starts_with(&nested_prefix)))
        .map(|doc| format!("{}:{}", doc.g, doc.a))
        .collect();

    let seen = page as u64 * ROWS_PER_PAGE as u64 + docs_len;
    let next_page = (docs_len > 0 && seen < search.response.num_found).then_some(page + 1);

    FetchPage {
        notations,
        next_page,
    }
}

#[async_trait]
impl DependencyRepository for MavenCentralClient {
    fn name(&self) -> &str {
        "Maven Central"
    }

    async fn fetch_page(&self, query: &FetchQuery, page: u32) -> Result<FetchPage> {
        // Security: Validate the group before it goes into the query string
        validate_group(&query.group)?;

        let search = self.fetch_with_retry(query, page).await?;
        Ok(to_page(query, page, search))
    }
}
