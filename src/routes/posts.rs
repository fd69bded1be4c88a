use actix_web::{HttpResponse, web};

use crate::content_cache::CachedContentStore;

#[tracing::instrument(name = "Listing blog posts", skip(content_store))]
pub async fn list_posts(content_store: web::Data<CachedContentStore>) -> HttpResponse {
    let posts = content_store.posts().await;
    HttpResponse::Ok().json(&*posts)
}

#[tracing::instrument(name = "Fetching a blog post by slug", skip(content_store))]
pub async fn get_post(
    slug: web::Path<String>,
    content_store: web::Data<CachedContentStore>,
) -> HttpResponse {
    match content_store.post_by_slug(&slug).await {
        Some(post) => HttpResponse::Ok().json(post),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Post not found."
        })),
    }
}
