//! HTTP client for the board backend.
//!
//! One reqwest-backed client implements the three remote collaborator
//! traits (posts, comments, sessions). Reads are JSON; create/update
//! operations send multipart form bodies, which is what the backend
//! consumes. Every request carries the `session_id` cookie from the
//! injected jar, mirroring the browser's credentials-include behavior.

use async_trait::async_trait;
use b04rd_core::comment::{Comment, CommentRepository, CommentUpdate, NewComment};
use b04rd_core::error::{BoardError, Result};
use b04rd_core::post::{ImageUpload, NewPost, Post, PostRepository, PostUpdate};
use b04rd_core::session::{CookieJar, Session, SessionRepository, SessionUpdate, SESSION_COOKIE_NAME};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::config::ApiConfig;

/// Client for the board backend REST API.
pub struct HttpBoardApi {
    client: Client,
    base_url: String,
    cookies: Arc<dyn CookieJar>,
}

impl HttpBoardApi {
    /// Creates a client from configuration and a cookie collaborator.
    pub fn new(config: &ApiConfig, cookies: Arc<dyn CookieJar>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| BoardError::config(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            cookies,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, url);
        if let Some(id) = self.cookies.session_id() {
            builder = builder.header("Cookie", format!("{SESSION_COOKIE_NAME}={id}"));
        }
        builder
    }

    /// Sends a request expecting a JSON body on success.
    async fn expect_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        entity: &'static str,
        id: String,
    ) -> Result<T> {
        let response = builder.send().await.map_err(BoardError::from)?;
        let response = check_status(response, entity, id).await?;
        response.json::<T>().await.map_err(BoardError::from)
    }

    /// Sends a request tolerating an empty response body on success.
    async fn expect_empty(
        &self,
        builder: RequestBuilder,
        entity: &'static str,
        id: String,
    ) -> Result<()> {
        let response = builder.send().await.map_err(BoardError::from)?;
        check_status(response, entity, id).await?;
        Ok(())
    }

    /// Backend health probe (`GET /health`).
    pub async fn health(&self) -> Result<HealthStatus> {
        self.expect_json(
            self.request(Method::GET, "/health"),
            "health",
            String::new(),
        )
        .await
    }
}

/// Response of the backend health endpoint.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

async fn check_status(response: Response, entity: &'static str, id: String) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(BoardError::not_found(entity, id));
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "failed to read error body".to_string());
    Err(BoardError::http(status.as_u16(), body))
}

/// Parses a comment listing body, tolerating `null` and empty responses.
fn parse_comment_list(body: &str) -> Result<Vec<Comment>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let comments: Option<Vec<Comment>> = serde_json::from_str(body)?;
    Ok(comments.unwrap_or_default())
}

fn image_part(image: ImageUpload) -> Part {
    Part::bytes(image.bytes).file_name(image.file_name)
}

#[async_trait]
impl PostRepository for HttpBoardApi {
    async fn list(&self, limit: u32, offset: u32, include_archived: bool) -> Result<Vec<Post>> {
        let builder = self
            .request(Method::GET, "/api/posts")
            .query(&[("limit", limit.to_string()), ("offset", offset.to_string())])
            .query(&[("include_archived", include_archived.to_string())]);
        self.expect_json(builder, "post", String::new()).await
    }

    async fn get(&self, id: i64) -> Result<Post> {
        let builder = self.request(Method::GET, &format!("/api/posts/{id}"));
        self.expect_json(builder, "post", id.to_string()).await
    }

    async fn list_by_author(&self, author_id: &str, limit: u32, offset: u32) -> Result<Vec<Post>> {
        let builder = self.request(Method::GET, "/api/posts/author").query(&[
            ("author_id", author_id.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ]);
        self.expect_json(builder, "post", author_id.to_string())
            .await
    }

    async fn create(&self, post: NewPost) -> Result<Post> {
        let mut form = Form::new()
            .text("title", post.title)
            .text("content", post.content);
        if let Some(image) = post.image {
            form = form.part("image", image_part(image));
        }
        if let Some(expires_at) = post.expires_at {
            form = form.text("expires_at", expires_at);
        }
        if let Some(author_id) = post.author_id {
            form = form.text("author_id", author_id);
        }
        if let Some(author_name) = post.author_name {
            form = form.text("author_name", author_name);
        }

        debug!("creating post");
        let builder = self.request(Method::POST, "/api/posts").multipart(form);
        self.expect_json(builder, "post", String::new()).await
    }

    async fn update(&self, update: PostUpdate) -> Result<Post> {
        let id = update.id;
        let mut form = Form::new()
            .text("id", id.to_string())
            .text("title", update.title)
            .text("content", update.content);
        if let Some(image) = update.image {
            form = form.part("image", image_part(image));
        }
        if let Some(author_id) = update.author_id {
            form = form.text("author_id", author_id);
        }
        if let Some(author_name) = update.author_name {
            form = form.text("author_name", author_name);
        }

        let builder = self
            .request(Method::PUT, &format!("/api/posts/{id}"))
            .multipart(form);
        self.expect_json(builder, "post", id.to_string()).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/posts/{id}"));
        self.expect_empty(builder, "post", id.to_string()).await
    }

    async fn archive(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::POST, &format!("/api/posts/{id}/archive"));
        self.expect_empty(builder, "post", id.to_string()).await
    }

    async fn unarchive(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::POST, &format!("/api/posts/{id}/unarchive"));
        self.expect_empty(builder, "post", id.to_string()).await
    }
}

#[async_trait]
impl CommentRepository for HttpBoardApi {
    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        let builder = self
            .request(Method::GET, "/api/comments/post")
            .query(&[("post_id", post_id.to_string())]);
        let response = builder.send().await.map_err(BoardError::from)?;
        let response = check_status(response, "comment", post_id.to_string()).await?;
        let body = response.text().await.map_err(BoardError::from)?;
        parse_comment_list(&body)
    }

    async fn get(&self, id: i64) -> Result<Comment> {
        let builder = self.request(Method::GET, &format!("/api/comments/{id}"));
        self.expect_json(builder, "comment", id.to_string()).await
    }

    async fn create(&self, comment: NewComment) -> Result<Comment> {
        let mut form = Form::new()
            .text("post_id", comment.post_id.to_string())
            .text("title", comment.title)
            .text("content", comment.content);
        if let Some(image) = comment.image {
            form = form.part("image", image_part(image));
        }
        if let Some(parent) = comment.reply_to_comment_id {
            form = form.text("reply_to_comment_id", parent.to_string());
        }

        let builder = self.request(Method::POST, "/api/comments").multipart(form);
        self.expect_json(builder, "comment", String::new()).await
    }

    async fn update(&self, update: CommentUpdate) -> Result<Comment> {
        let id = update.id;
        let mut form = Form::new().text("id", id.to_string());
        if let Some(title) = update.title {
            form = form.text("title", title);
        }
        if let Some(content) = update.content {
            form = form.text("content", content);
        }
        if let Some(image) = update.image {
            form = form.part("image", image_part(image));
        }

        let builder = self
            .request(Method::PUT, &format!("/api/comments/{id}"))
            .multipart(form);
        self.expect_json(builder, "comment", id.to_string()).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/comments/{id}"));
        self.expect_empty(builder, "comment", id.to_string()).await
    }
}

#[async_trait]
impl SessionRepository for HttpBoardApi {
    async fn create(&self) -> Result<Session> {
        // The server assigns the display identity; the form is empty.
        let builder = self
            .request(Method::POST, "/api/sessions")
            .multipart(Form::new());
        self.expect_json(builder, "session", String::new()).await
    }

    async fn get(&self, id: &str) -> Result<Session> {
        let builder = self.request(Method::GET, &format!("/api/sessions/{id}"));
        self.expect_json(builder, "session", id.to_string()).await
    }

    async fn update(&self, id: &str, update: SessionUpdate) -> Result<Session> {
        let mut form = Form::new();
        if let Some(name) = update.name {
            form = form.text("name", name);
        }
        if let Some(gender) = update.gender {
            form = form.text("gender", gender);
        }
        if let Some(age) = update.age {
            form = form.text("age", age);
        }

        let builder = self
            .request(Method::PUT, &format!("/api/sessions/{id}"))
            .multipart(form);
        self.expect_json(builder, "session", id.to_string()).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/sessions/{id}"));
        self.expect_empty(builder, "session", id.to_string()).await
    }
}
