//! Crate-level tests
//!
//! Exercises the session codec, the identity middleware, and the full HTTP
//! surface against an in-memory repository.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use crate::application::config::WebConfig;
use crate::application::session::{SessionCodec, signature_digest};
use crate::domain::entity::{Blog, Comment, User};
use crate::domain::repository::{BlogRepository, CommentRepository, UserRepository};
use crate::domain::value_object::{
    BlogId, CommentId, Email, PasswordDigest, UserId, UserName,
};
use crate::error::ApiResult;
use crate::presentation::router::blog_router_generic;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Default)]
struct MemoryInner {
    users: HashMap<String, User>,
    blogs: HashMap<String, Blog>,
    comments: HashMap<String, Comment>,
}

/// In-memory repository shared between the router and the test body.
#[derive(Clone, Default)]
struct MemoryRepository {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryRepository {
    fn new() -> Self {
        Self::default()
    }

    /// Replace a stored user wholesale (e.g. to flip the admin flag or
    /// simulate a password change).
    fn put_user(&self, user: User) {
        let mut inner = self.inner.lock().unwrap();
        inner.users.insert(user.user_id.as_str().to_string(), user);
    }

    fn get_user(&self, user_id: &str) -> Option<User> {
        let inner = self.inner.lock().unwrap();
        inner.users.get(user_id).cloned()
    }
}

impl UserRepository for MemoryRepository {
    async fn create(&self, user: &User) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .users
            .insert(user.user_id.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> ApiResult<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.get(user_id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> ApiResult<Vec<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .values()
            .filter(|user| user.email.as_str() == email)
            .cloned()
            .collect())
    }

    async fn count(&self) -> ApiResult<i64> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.len() as i64)
    }

    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<User>> {
        let inner = self.inner.lock().unwrap();
        let mut users: Vec<User> = inner.users.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

impl BlogRepository for MemoryRepository {
    async fn create(&self, blog: &Blog) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .blogs
            .insert(blog.blog_id.as_str().to_string(), blog.clone());
        Ok(())
    }

    async fn find_by_id(&self, blog_id: &BlogId) -> ApiResult<Option<Blog>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.blogs.get(blog_id.as_str()).cloned())
    }

    async fn update(&self, blog: &Blog) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .blogs
            .insert(blog.blog_id.as_str().to_string(), blog.clone());
        Ok(())
    }

    async fn delete(&self, blog_id: &BlogId) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.blogs.remove(blog_id.as_str());
        Ok(())
    }

    async fn count(&self) -> ApiResult<i64> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.blogs.len() as i64)
    }

    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<Blog>> {
        let inner = self.inner.lock().unwrap();
        let mut blogs: Vec<Blog> = inner.blogs.values().cloned().collect();
        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(blogs
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

impl CommentRepository for MemoryRepository {
    async fn create(&self, comment: &Comment) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .comments
            .insert(comment.comment_id.as_str().to_string(), comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> ApiResult<Option<Comment>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.comments.get(comment_id.as_str()).cloned())
    }

    async fn delete(&self, comment_id: &CommentId) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.comments.remove(comment_id.as_str());
        Ok(())
    }

    async fn count(&self) -> ApiResult<i64> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.comments.len() as i64)
    }

    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<Comment>> {
        let inner = self.inner.lock().unwrap();
        let mut comments: Vec<Comment> = inner.comments.values().cloned().collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn list_for_blog(&self, blog_id: &BlogId) -> ApiResult<Vec<Comment>> {
        let inner = self.inner.lock().unwrap();
        let mut comments: Vec<Comment> = inner
            .comments
            .values()
            .filter(|comment| comment.blog_id == *blog_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn client_digest(password: &str) -> String {
    platform::crypto::sha1_hex(password.as_bytes())
}

fn stored_user(name: &str, email: &str, password: &str) -> User {
    let digest = PasswordDigest::from_client(client_digest(password)).unwrap();
    User::new(
        UserName::new(name).unwrap(),
        Email::new(email).unwrap(),
        &digest,
    )
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

fn test_app(repo: MemoryRepository, config: WebConfig) -> Router {
    blog_router_generic(repo, config)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request_with_cookie(
    method: &str,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_request_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Pull the `session=...` pair out of a Set-Cookie header.
fn session_cookie_pair(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie name=value pair")
        .to_string()
}

// ============================================================================
// Session codec
// ============================================================================

#[tokio::test]
async fn test_codec_roundtrip_masks_digest() {
    let repo = MemoryRepository::new();
    let user = stored_user("Alice", "alice@example.com", "hunter2");
    repo.put_user(user.clone());

    let codec = SessionCodec::new("secret");
    let cookie = codec.encode(&user, Duration::from_secs(86400));

    let decoded = codec.decode(&repo, &cookie).await.expect("valid cookie");
    assert_eq!(decoded.user_id, user.user_id);
    assert!(decoded.passwd.is_masked());
}

#[tokio::test]
async fn test_codec_rejects_malformed_values() {
    let repo = MemoryRepository::new();
    let codec = SessionCodec::new("secret");

    assert!(codec.decode(&repo, "").await.is_none());
    assert!(codec.decode(&repo, "justonefield").await.is_none());
    assert!(codec.decode(&repo, "two-fields").await.is_none());
    assert!(codec.decode(&repo, "a-b-c-d").await.is_none());
    assert!(codec.decode(&repo, "uid-notanumber-sig").await.is_none());
}

#[tokio::test]
async fn test_codec_rejects_expired_cookie() {
    let repo = MemoryRepository::new();
    let user = stored_user("Alice", "alice@example.com", "hunter2");
    repo.put_user(user.clone());

    let expires = (unix_now() - 10).to_string();
    let signature = signature_digest(&[
        user.user_id.as_str(),
        user.passwd.as_str(),
        &expires,
        "secret",
    ]);
    let cookie = format!("{}-{}-{}", user.user_id.as_str(), expires, signature);

    let codec = SessionCodec::new("secret");
    assert!(codec.decode(&repo, &cookie).await.is_none());
}

#[tokio::test]
async fn test_codec_rejects_tampered_signature() {
    let repo = MemoryRepository::new();
    let user = stored_user("Alice", "alice@example.com", "hunter2");
    repo.put_user(user.clone());

    let codec = SessionCodec::new("secret");
    let cookie = codec.encode(&user, Duration::from_secs(86400));

    // Flip the last signature character.
    let mut tampered = cookie.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == '0' { '1' } else { '0' });

    assert!(codec.decode(&repo, &tampered).await.is_none());
}

#[tokio::test]
async fn test_codec_rejects_unknown_user() {
    let repo = MemoryRepository::new();
    let user = stored_user("Alice", "alice@example.com", "hunter2");
    // Not stored in the repository.

    let codec = SessionCodec::new("secret");
    let cookie = codec.encode(&user, Duration::from_secs(86400));
    assert!(codec.decode(&repo, &cookie).await.is_none());
}

#[tokio::test]
async fn test_codec_rejects_wrong_secret() {
    let repo = MemoryRepository::new();
    let user = stored_user("Alice", "alice@example.com", "hunter2");
    repo.put_user(user.clone());

    let cookie = SessionCodec::new("secret-a").encode(&user, Duration::from_secs(86400));
    assert!(
        SessionCodec::new("secret-b")
            .decode(&repo, &cookie)
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_password_change_revokes_outstanding_cookies() {
    let repo = MemoryRepository::new();
    let user = stored_user("Alice", "alice@example.com", "hunter2");
    repo.put_user(user.clone());

    let codec = SessionCodec::new("secret");
    let cookie = codec.encode(&user, Duration::from_secs(86400));
    assert!(codec.decode(&repo, &cookie).await.is_some());

    let mut changed = user.clone();
    changed.passwd = PasswordDigest::derive(
        &changed.user_id,
        &PasswordDigest::from_client(client_digest("new password")).unwrap(),
    );
    repo.put_user(changed);

    assert!(codec.decode(&repo, &cookie).await.is_none());
}

// ============================================================================
// HTTP surface
// ============================================================================

#[tokio::test]
async fn test_register_sets_cookie_and_masks_digest() {
    let app = test_app(MemoryRepository::new(), WebConfig::development());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "passwd": client_digest("hunter2"),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=86400"));

    let body = body_json(response).await;
    assert_eq!(body["passwd"], "******");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["admin"], false);
    assert!(
        body["image"]
            .as_str()
            .unwrap()
            .starts_with("https://www.gravatar.com/avatar/")
    );
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let repo = MemoryRepository::new();
    repo.put_user(stored_user("Alice", "alice@example.com", "hunter2"));
    let app = test_app(repo, WebConfig::development());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            serde_json::json!({
                "name": "Other Alice",
                "email": "alice@example.com",
                "passwd": client_digest("different"),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_invalid_fields() {
    let cases = [
        serde_json::json!({ "name": "  ", "email": "a@b.c", "passwd": client_digest("x") }),
        serde_json::json!({ "name": "A", "email": "not-an-email", "passwd": client_digest("x") }),
        serde_json::json!({ "name": "A", "email": "a@b.c", "passwd": "tooshort" }),
    ];

    for body in cases {
        let app = test_app(MemoryRepository::new(), WebConfig::development());
        let response = app
            .oneshot(json_request("POST", "/api/users", body.clone()))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "expected 400 for {body}"
        );
    }
}

#[tokio::test]
async fn test_authenticate_issues_decodable_cookie() {
    let repo = MemoryRepository::new();
    let user = stored_user("Alice", "alice@example.com", "hunter2");
    repo.put_user(user.clone());
    let config = WebConfig::development();
    let secret = config.session_secret.clone();
    let app = test_app(repo.clone(), config);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/authenticate",
            serde_json::json!({
                "email": "alice@example.com",
                "passwd": client_digest("hunter2"),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let pair = session_cookie_pair(&response);
    let value = pair.strip_prefix("session=").unwrap();

    let decoded = SessionCodec::new(secret)
        .decode(&repo, value)
        .await
        .expect("cookie decodes");
    assert_eq!(decoded.user_id, user.user_id);

    let body = body_json(response).await;
    assert_eq!(body["passwd"], "******");
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    let repo = MemoryRepository::new();
    repo.put_user(stored_user("Alice", "alice@example.com", "hunter2"));
    let app = test_app(repo, WebConfig::development());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/authenticate",
            serde_json::json!({
                "email": "alice@example.com",
                "passwd": client_digest("wrong"),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_authenticate_unknown_email() {
    let app = test_app(MemoryRepository::new(), WebConfig::development());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/authenticate",
            serde_json::json!({
                "email": "nobody@example.com",
                "passwd": client_digest("whatever"),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signout_clears_cookie_and_redirects_to_referer() {
    let app = test_app(MemoryRepository::new(), WebConfig::development());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/signout")
                .header(header::REFERER, "/somewhere")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/somewhere"
    );
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("session=-deleted-"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_signout_without_referer_redirects_home() {
    let app = test_app(MemoryRepository::new(), WebConfig::development());

    let response = app.oneshot(get_request("/signout")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

/// Register through the API and return the session cookie pair plus the
/// created user id. Optionally promote the user to admin afterwards.
async fn register_via_api(
    repo: &MemoryRepository,
    config: WebConfig,
    email: &str,
    admin: bool,
) -> (String, String) {
    let app = test_app(repo.clone(), config);
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            serde_json::json!({
                "name": "Someone",
                "email": email,
                "passwd": client_digest("hunter2"),
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = session_cookie_pair(&response);
    let body = body_json(response).await;
    let user_id = body["id"].as_str().unwrap().to_string();

    if admin {
        let mut user = repo.get_user(&user_id).expect("registered user");
        user.admin = true;
        repo.put_user(user);
    }

    (cookie, user_id)
}

#[tokio::test]
async fn test_admin_listing_requires_admin() {
    let repo = MemoryRepository::new();
    let config = WebConfig::development();
    let (cookie, _) = register_via_api(&repo, config.clone(), "bob@example.com", false).await;

    // Anonymous.
    let app = test_app(repo.clone(), config.clone());
    let response = app.oneshot(get_request("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Signed in but not admin.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(get_request_with_cookie("/api/users", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Admin.
    let (admin_cookie, _) =
        register_via_api(&repo, config.clone(), "admin@example.com", true).await;
    let app = test_app(repo.clone(), config);
    let response = app
        .oneshot(get_request_with_cookie("/api/users", &admin_cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"]["item_count"], 2);
    for user in body["users"].as_array().unwrap() {
        assert_eq!(user["passwd"], "******");
    }
}

#[tokio::test]
async fn test_blog_crud_flow() {
    let repo = MemoryRepository::new();
    let config = WebConfig::development();
    let (admin_cookie, admin_id) =
        register_via_api(&repo, config.clone(), "admin@example.com", true).await;

    // Create.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/blogs",
            &admin_cookie,
            serde_json::json!({
                "name": "First Post",
                "summary": "A summary",
                "content": "Some content",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let blog_id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["user_id"], admin_id.as_str());
    assert_eq!(created["user_name"], "Someone");

    // Fetch (public).
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(get_request(&format!("/api/blogs/{blog_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "First Post");

    // Update.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            &format!("/api/blogs/{blog_id}"),
            &admin_cookie,
            serde_json::json!({
                "name": "Renamed",
                "summary": "A summary",
                "content": "Some content",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Renamed");

    // List (public).
    let app = test_app(repo.clone(), config.clone());
    let response = app.oneshot(get_request("/api/blogs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listing = body_json(response).await;
    assert_eq!(listing["page"]["item_count"], 1);
    assert_eq!(listing["blogs"][0]["name"], "Renamed");

    // Delete, then the fetch 404s.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            &format!("/api/blogs/{blog_id}/delete"),
            &admin_cookie,
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = test_app(repo, config);
    let response = app
        .oneshot(get_request(&format!("/api/blogs/{blog_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blog_mutations_require_admin() {
    let repo = MemoryRepository::new();
    let config = WebConfig::development();
    let (cookie, _) = register_via_api(&repo, config.clone(), "bob@example.com", false).await;

    let payload = serde_json::json!({
        "name": "Post",
        "summary": "Summary",
        "content": "Content",
    });

    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request("POST", "/api/blogs", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = test_app(repo, config);
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/blogs",
            &cookie,
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_comment_flow() {
    let repo = MemoryRepository::new();
    let config = WebConfig::development();
    let (admin_cookie, _) =
        register_via_api(&repo, config.clone(), "admin@example.com", true).await;
    let (user_cookie, _) =
        register_via_api(&repo, config.clone(), "bob@example.com", false).await;

    // Admin creates a blog.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/blogs",
            &admin_cookie,
            serde_json::json!({
                "name": "Post",
                "summary": "Summary",
                "content": "Content",
            }),
        ))
        .await
        .unwrap();
    let blog_id = body_json(response).await["id"].as_str().unwrap().to_string();

    // Anonymous comments are rejected.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/blogs/{blog_id}/comments"),
            serde_json::json!({ "content": "Nice post" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A signed-in non-admin can comment.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            &format!("/api/blogs/{blog_id}/comments"),
            &user_cookie,
            serde_json::json!({ "content": "Nice post" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let comment = body_json(response).await;
    let comment_id = comment["id"].as_str().unwrap().to_string();
    assert_eq!(comment["content"], "Nice post");

    // Commenting on a missing blog 404s.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/blogs/nosuchblog/comments",
            &user_cookie,
            serde_json::json!({ "content": "Lost" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The blog's comment listing is public.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(get_request(&format!("/api/blogs/{blog_id}/comments")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["comments"][0]["content"], "Nice post");

    // The global listing is admin-only.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(get_request_with_cookie("/api/comments", &user_cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(get_request_with_cookie("/api/comments", &admin_cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["page"]["item_count"], 1);

    // Deleting a comment is admin-only.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            &format!("/api/comments/{comment_id}/delete"),
            &user_cookie,
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(json_request_with_cookie(
            "POST",
            &format!("/api/comments/{comment_id}/delete"),
            &admin_cookie,
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = test_app(repo, config);
    let response = app
        .oneshot(get_request(&format!("/api/blogs/{blog_id}/comments")))
        .await
        .unwrap();
    assert!(body_json(response).await["comments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_garbage_cookie_degrades_to_anonymous() {
    let repo = MemoryRepository::new();
    let config = WebConfig::development();
    register_via_api(&repo, config.clone(), "alice@example.com", false).await;

    // A tampered cookie on a public route still serves the page.
    let app = test_app(repo.clone(), config.clone());
    let response = app
        .oneshot(get_request_with_cookie("/api/blogs", "session=not-a-valid-cookie"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // On a protected route it acts as anonymous.
    let app = test_app(repo, config);
    let response = app
        .oneshot(get_request_with_cookie("/api/users", "session=not-a-valid-cookie"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
