use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

const BLOG_POST_CONTENT_TYPE: &str = "blogPost";

/// Read-only client for the headless CMS delivery API.
#[derive(Clone)]
pub struct ContentStoreClient {
    http_client: Client,
    base_url: Url,
    space_id: String,
    access_token: SecretString,
}

/// Local shape of a blog post, mapped from a remote entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub date: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub content: serde_json::Value,
    pub status: String,
}

#[derive(Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    items: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    sys: EntrySys,
    #[serde(default)]
    fields: EntryFields,
}

#[derive(Deserialize)]
struct EntrySys {
    id: String,
    #[serde(rename = "createdAt", default)]
    created_at: String,
}

#[derive(Deserialize, Default)]
struct EntryFields {
    title: Option<String>,
    slug: Option<String>,
    date: Option<String>,
    subtitle: Option<String>,
    content: Option<serde_json::Value>,
}

impl BlogPost {
    // Missing remote fields fall back to fixed defaults instead of failing
    // the whole fetch.
    fn from_entry(entry: Entry) -> Self {
        Self {
            id: entry.sys.id,
            title: entry.fields.title.unwrap_or_else(|| "Untitled".into()),
            slug: entry.fields.slug.unwrap_or_default(),
            date: entry
                .fields
                .date
                .filter(|d| !d.is_empty())
                .unwrap_or(entry.sys.created_at),
            tags: Vec::new(),
            excerpt: entry.fields.subtitle.unwrap_or_default(),
            content: entry.fields.content.unwrap_or(serde_json::Value::Null),
            status: "published".into(),
        }
    }
}

impl ContentStoreClient {
    pub fn new(
        base_url: String,
        space_id: String,
        access_token: SecretString,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: Client::builder().timeout(timeout).build().unwrap(),
            base_url: Url::parse(&base_url).expect("Failed parsing base content store url."),
            space_id,
            access_token,
        }
    }

    /// Fetches all blog posts, newest first (remote ordering).
    pub async fn fetch_posts(&self) -> Result<Vec<BlogPost>, reqwest::Error> {
        let response: EntriesResponse = self
            .entries_request(&[
                ("content_type", BLOG_POST_CONTENT_TYPE),
                ("order", "-sys.createdAt"),
            ])
            .await?;

        Ok(response.items.into_iter().map(BlogPost::from_entry).collect())
    }

    /// Fetches the first post whose slug matches, if any.
    pub async fn fetch_post_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<BlogPost>, reqwest::Error> {
        let response: EntriesResponse = self
            .entries_request(&[
                ("content_type", BLOG_POST_CONTENT_TYPE),
                ("fields.slug", slug),
                ("limit", "1"),
            ])
            .await?;

        Ok(response.items.into_iter().next().map(BlogPost::from_entry))
    }

    async fn entries_request(
        &self,
        query: &[(&str, &str)],
    ) -> Result<EntriesResponse, reqwest::Error> {
        let url = self
            .base_url
            .join(&format!(
                "spaces/{}/environments/master/entries",
                self.space_id
            ))
            .expect("Failed joining route to content store url.");

        self.http_client
            .get(url)
            .query(query)
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.access_token.expose_secret(),
            )
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
