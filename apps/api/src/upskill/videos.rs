//! Video search collaborator (YouTube Data API v3).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::upskill::db::Video;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Titles containing any of these are dropped.
const EXCLUDED_TITLE_WORDS: &[&str] = &["shorts", "funny", "meme"];

const EXPLANATION: &str = "Recommended based on your interest and beginner relevance.";

/// Finds learning videos for a query. Implementations never fail: an
/// unavailable backend yields an empty list.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Vec<Video>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Clone)]
pub struct YouTubeSearch {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YouTubeSearch {
    pub fn new(api_key: Option<String>, base_url: String, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, api_key: &str, query: &str, max_results: usize) -> reqwest::Result<Vec<Video>> {
        let max_results = max_results.to_string();
        let response: SearchResponse = self
            .client
            .get(format!("{}/youtube/v3/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("key", api_key),
                ("videoDuration", "medium"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.items.into_iter().filter_map(to_video).collect())
    }
}

fn to_video(item: SearchItem) -> Option<Video> {
    let title = item.snippet.title.to_lowercase();
    if EXCLUDED_TITLE_WORDS.iter().any(|w| title.contains(w)) {
        return None;
    }
    let video_id = item.id.video_id?;
    Some(Video {
        platform: "YouTube".to_string(),
        url: format!("https://www.youtube.com/watch?v={video_id}"),
        thumbnail: item.snippet.thumbnails.high.map(|t| t.url),
        explanation: EXPLANATION.to_string(),
    })
}

#[async_trait]
impl VideoSearch for YouTubeSearch {
    async fn search(&self, query: &str, max_results: usize) -> Vec<Video> {
        let Some(api_key) = self.api_key.as_deref() else {
            return vec![];
        };
        match self.fetch(api_key, query, max_results).await {
            Ok(videos) => {
                debug!("Video search for '{query}' returned {} results", videos.len());
                videos
            }
            Err(e) => {
                warn!("Video search failed: {e}");
                vec![]
            }
        }
    }
}
