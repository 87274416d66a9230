use super::group_validation::validate_group;
use crate::ports::outbound::{DependencyRepository, FetchPage, FetchQuery};
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::StatusCode;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://maven.google.com";

/// Maximum number of group indexes fetched at the same time
const MAX_CONCURRENT_GROUPS: usize = 8;

/// GoogleMavenClient adapter for listing artifacts of Google's Maven repository
///
/// This adapter implements the DependencyRepository port by reading the
/// repository's XML indexes:
///
/// ```text
/// master-index.xml                 <metadata><androidx.core/>...</metadata>
/// androidx/core/group-index.xml    <androidx.core><core/><core-ktx/></androidx.core>
/// ```
///
/// The whole listing fits in a single page.
pub struct GoogleMavenClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl GoogleMavenClient {
    /// Creates a new Google Maven client with default configuration
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

    /// Points the client at a mirror of the repository
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn group_index_url(&self, group: &str) -> String {
        format!("{}/{}/group-index.xml", self.base_url, group.replace('.', "/"))
    }

    /// Fetches an index document, `None` when the repository has no such index
    async fn fetch_with_retry(&self, url: &str) -> Result<Option<String>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_document(url).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("Google Maven request was not attempted")))
    }

    async fn fetch_document(&self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!("Google Maven returned status code {}", response.status());
        }

        Ok(Some(response.text().await?))
    }

    async fn fetch_group(&self, group: &str) -> Result<Vec<String>> {
        let document = self.fetch_with_retry(&self.group_index_url(group)).await?;
        match document {
            Some(xml) => parse_group_index(group, &xml),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_groups_under(&self, group: &str) -> Result<Vec<String>> {
        let url = format!("{}/master-index.xml", self.base_url);
        let groups = match self.fetch_with_retry(&url).await? {
            Some(xml) => parse_master_index(&xml)?,
            None => Vec::new(),
        };

        let nested_prefix = format!("{}.", group);
        Ok(groups
            .into_iter()
            .filter(|g| g == group || g.starts_with(&nested_prefix))
            .collect())
    }
}

/// Group names listed by `master-index.xml`
fn parse_master_index(xml: &str) -> Result<Vec<String>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| anyhow::anyhow!("Failed to parse master-index.xml: {}", e))?;

    Ok(child_tag_names(&doc.root_element()))
}

/// Notations listed by a `group-index.xml`
fn parse_group_index(group: &str, xml: &str) -> Result<Vec<String>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| anyhow::anyhow!("Failed to parse group index of `{}`: {}", group, e))?;

    Ok(child_tag_names(&doc.root_element())
        .into_iter()
        .map(|artifact| format!("{}:{}", group, artifact))
        .collect())
}

fn child_tag_names(node: &roxmltree::Node<'_, '_>) -> Vec<String> {
    node.children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name().to_string())
        .collect()
}

#[async_trait]
impl DependencyRepository for GoogleMavenClient {
    fn name(&self) -> &str {
        "Google Maven"
    }

    async fn fetch_page(&self, query: &FetchQuery, _page: u32) -> Result<FetchPage> {
        // Security: Validate the group before it becomes a URL path
        validate_group(&query.group)?;

        if !query.recursive {
            return Ok(FetchPage::last(self.fetch_group(&query.group).await?));
        }

        let groups = self.fetch_groups_under(&query.group).await?;
        let per_group: Vec<Vec<String>> = stream::iter(groups)
            .map(|group| async move { self.fetch_group(&group).await })
            .buffered(MAX_CONCURRENT_GROUPS)
            .try_collect()
            .await?;

        Ok(FetchPage::last(per_group.into_iter().flatten().collect()))
    }
}
