use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenPurpose;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use social_service::domain::post::errors::PostError;
use social_service::domain::post::models::Comment;
use social_service::domain::post::models::Post;
use social_service::domain::post::models::PostLike;
use social_service::domain::post::models::PostSorting;
use social_service::domain::post::models::PostWithLikes;
use social_service::domain::post::ports::PostRepository;
use social_service::domain::post::service::PostService;
use social_service::domain::user::errors::EmailSenderError;
use social_service::domain::user::errors::UserError;
use social_service::domain::user::models::EmailAddress;
use social_service::domain::user::models::User;
use social_service::domain::user::ports::EmailSender;
use social_service::domain::user::ports::UserRepository;
use social_service::domain::user::service::UserService;
use social_service::inbound::http::router::create_router;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const PUBLIC_URL: &str = "http://localhost:8000";

/// Test application driving the real router in-process over in-memory
/// ports, so no database or mail API is needed.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub mailer: Arc<RecordingEmailSender>,
    pub authenticator: Authenticator,
}

impl TestApp {
    pub fn spawn() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let posts = Arc::new(InMemoryPostRepository::default());
        let mailer = Arc::new(RecordingEmailSender::default());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&mailer),
            Arc::new(Authenticator::new(TEST_SECRET)),
            PUBLIC_URL.to_string(),
        ));
        let post_service = Arc::new(PostService::new(posts));

        Self {
            router: create_router(user_service, post_service),
            users,
            mailer,
            authenticator: Authenticator::new(TEST_SECRET),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        (status, json)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, path, Some(body), token).await
    }

    /// Register a user and return the confirmation URL from the response.
    pub async fn register(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/users/register",
                serde_json::json!({ "email": email, "password": password }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
        body["confirmation"].as_str().unwrap().to_string()
    }

    /// Log a registered user in and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/users/token",
                serde_json::json!({ "email": email, "password": password }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["access_token"].as_str().unwrap().to_string()
    }

    /// Issue an access token directly, bypassing login (e.g. expired ones).
    pub fn issue_access_token(&self, email: &str, ttl_minutes: i64) -> String {
        self.authenticator
            .issue_token(email, TokenPurpose::Access, ttl_minutes)
            .unwrap()
    }
}

/// Path of a confirmation URL, as the router expects it.
pub fn confirmation_path(confirmation_url: &str) -> String {
    confirmation_url
        .strip_prefix(PUBLIC_URL)
        .expect("Confirmation URL should start with the public URL")
        .to_string()
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn get(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.get(email))
    }

    async fn insert(&self, email: &EmailAddress, password_hash: &str) -> Result<i64, UserError> {
        let mut users = self.users.lock().unwrap();
        // Same behavior as the store's unique email constraint
        if users.iter().any(|u| u.email == *email) {
            return Err(UserError::EmailAlreadyRegistered);
        }
        let id = users.len() as i64 + 1;
        users.push(User {
            id,
            email: email.clone(),
            password_hash: password_hash.to_string(),
            confirmed: false,
        });
        Ok(id)
    }

    async fn set_confirmed(&self, email: &str) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.email.as_str() == email) {
            user.confirmed = true;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Default)]
pub struct RecordingEmailSender {
    pub sent: Mutex<Vec<SentMail>>,
    pub fail_next: Mutex<bool>,
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSenderError> {
        if std::mem::take(&mut *self.fail_next.lock().unwrap()) {
            return Err(EmailSenderError::DeliveryFailed("boom".to_string()));
        }
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    comments: Mutex<Vec<Comment>>,
    likes: Mutex<Vec<PostLike>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert_post(&self, user_id: i64, body: &str) -> Result<Post, PostError> {
        let mut posts = self.posts.lock().unwrap();
        let post = Post {
            id: posts.len() as i64 + 1,
            user_id,
            body: body.to_string(),
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn find_post(&self, post_id: i64) -> Result<Option<Post>, PostError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == post_id)
            .cloned())
    }

    async fn list_posts(&self, sorting: PostSorting) -> Result<Vec<PostWithLikes>, PostError> {
        let posts = self.posts.lock().unwrap();
        let likes = self.likes.lock().unwrap();

        let mut listed: Vec<PostWithLikes> = posts
            .iter()
            .map(|p| PostWithLikes {
                id: p.id,
                user_id: p.user_id,
                body: p.body.clone(),
                likes: likes.iter().filter(|l| l.post_id == p.id).count() as i64,
            })
            .collect();

        match sorting {
            PostSorting::New => listed.sort_by(|a, b| b.id.cmp(&a.id)),
            PostSorting::Old => listed.sort_by(|a, b| a.id.cmp(&b.id)),
            PostSorting::MostLikes => listed.sort_by(|a, b| b.likes.cmp(&a.likes)),
        }

        Ok(listed)
    }

    async fn insert_comment(
        &self,
        user_id: i64,
        post_id: i64,
        body: &str,
    ) -> Result<Comment, PostError> {
        let mut comments = self.comments.lock().unwrap();
        let comment = Comment {
            id: comments.len() as i64 + 1,
            post_id,
            user_id,
            body: body.to_string(),
        };
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn comments_on_post(&self, post_id: i64) -> Result<Vec<Comment>, PostError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn insert_like(&self, user_id: i64, post_id: i64) -> Result<PostLike, PostError> {
        let mut likes = self.likes.lock().unwrap();
        let like = PostLike {
            id: likes.len() as i64 + 1,
            post_id,
            user_id,
        };
        likes.push(like.clone());
        Ok(like)
    }
}
