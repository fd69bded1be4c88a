use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::content_store::{BlogPost, ContentStoreClient};

/// Read-through cache over the content store. Entries expire after `ttl` and
/// can be dropped eagerly via `invalidate`. Remote failures degrade to an
/// empty list or not-found and are never cached.
pub struct CachedContentStore {
    client: ContentStoreClient,
    ttl: Duration,
    posts: RwLock<Option<CachedAt<Arc<Vec<BlogPost>>>>>,
    by_slug: RwLock<HashMap<String, CachedAt<Option<BlogPost>>>>,
}

struct CachedAt<T> {
    stored_at: Instant,
    value: T,
}

impl<T> CachedAt<T> {
    fn new(value: T) -> Self {
        Self {
            stored_at: Instant::now(),
            value,
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

impl CachedContentStore {
    pub fn new(client: ContentStoreClient, ttl: Duration) -> Self {
        Self {
            client,
            ttl,
            posts: RwLock::new(None),
            by_slug: RwLock::new(HashMap::new()),
        }
    }

    /// All posts, newest first. Served from cache while fresh.
    pub async fn posts(&self) -> Arc<Vec<BlogPost>> {
        if let Some(slot) = self.posts.read().await.as_ref() {
            if slot.is_fresh(self.ttl) {
                return Arc::clone(&slot.value);
            }
        }

        let fetched = match self.client.fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to fetch posts from the content store"
                );
                return Arc::new(Vec::new());
            }
        };

        let value = Arc::new(fetched);
        *self.posts.write().await = Some(CachedAt::new(Arc::clone(&value)));
        value
    }

    /// One post by slug, or `None` for an unknown slug or a remote failure.
    pub async fn post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        if let Some(slot) = self.by_slug.read().await.get(slug) {
            if slot.is_fresh(self.ttl) {
                return slot.value.clone();
            }
        }

        let fetched = match self.client.fetch_post_by_slug(slug).await {
            Ok(post) => post,
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    slug,
                    "Failed to fetch a post from the content store"
                );
                return None;
            }
        };

        let mut by_slug = self.by_slug.write().await;
        // Slugs are caller-controlled, so the map would otherwise grow with
        // every unknown slug for the process lifetime.
        by_slug.retain(|_, slot| slot.is_fresh(self.ttl));
        by_slug.insert(slug.to_owned(), CachedAt::new(fetched.clone()));
        fetched
    }

    /// Drops every cached value so the next read hits the remote store.
    pub async fn invalidate(&self) {
        *self.posts.write().await = None;
        self.by_slug.write().await.clear();
    }
}
