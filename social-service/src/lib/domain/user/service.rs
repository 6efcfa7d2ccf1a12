use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenPurpose;

use crate::user::errors::UserError;
use crate::user::models::RegisterUserCommand;
use crate::user::models::RegisteredUser;
use crate::user::models::User;
use crate::user::ports::EmailSender;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration, login, email
/// confirmation, and bearer-token resolution.
///
/// Password hashing and verification are CPU-expensive by design and run on
/// the blocking pool so request tasks never stall the async scheduler.
pub struct UserService<UR, ES>
where
    UR: UserRepository,
    ES: EmailSender,
{
    repository: Arc<UR>,
    mailer: Arc<ES>,
    authenticator: Arc<Authenticator>,
    /// Public base URL used to build confirmation links.
    public_url: String,
}

impl<UR, ES> UserService<UR, ES>
where
    UR: UserRepository,
    ES: EmailSender,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `mailer` - Outbound email delivery implementation
    /// * `authenticator` - Password hashing and token codec facade
    /// * `public_url` - Base URL for confirmation links
    pub fn new(
        repository: Arc<UR>,
        mailer: Arc<ES>,
        authenticator: Arc<Authenticator>,
        public_url: String,
    ) -> Self {
        Self {
            repository,
            mailer,
            authenticator,
            public_url,
        }
    }

    fn confirmation_url(&self, token: &str) -> String {
        format!(
            "{}/users/confirm/{}",
            self.public_url.trim_end_matches('/'),
            token
        )
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let hash = tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(e.to_string()))??;
        Ok(hash)
    }

    async fn verify_password(&self, password: String, stored_hash: String) -> Result<bool, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        tokio::task::spawn_blocking(move || authenticator.verify_password(&password, &stored_hash))
            .await
            .map_err(|e| UserError::Unknown(e.to_string()))
    }
}

#[async_trait]
impl<UR, ES> UserServicePort for UserService<UR, ES>
where
    UR: UserRepository,
    ES: EmailSender,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<RegisteredUser, UserError> {
        let email = command.email;

        if self.repository.find_by_email(email.as_str()).await?.is_some() {
            return Err(UserError::EmailAlreadyRegistered);
        }

        let password_hash = self.hash_password(command.password).await?;

        // A concurrent registration of the same email loses here instead,
        // via the store's unique constraint.
        let user_id = self.repository.insert(&email, &password_hash).await?;

        let token = self.authenticator.issue_confirmation_token(email.as_str())?;
        let confirmation_url = self.confirmation_url(&token);

        // Delivery is transactional: a mailer failure fails the registration.
        self.mailer
            .send(
                email.as_str(),
                "Successfully signed up!",
                &format!(
                    "hi {}! You have successfully signed up to the social media. \
                     Please click the link below to confirm your email address: \
                     {}\n\nThanks",
                    email.as_str(),
                    confirmation_url
                ),
            )
            .await?;

        tracing::info!(user_id, email = %email, "User registered");

        Ok(RegisteredUser {
            user_id,
            confirmation_url,
        })
    }

    async fn confirm_email(&self, token: &str) -> Result<(), UserError> {
        let email = self
            .authenticator
            .subject_for_token(token, TokenPurpose::Confirmation)?;

        self.repository.set_confirmed(&email).await?;

        tracing::info!(email, "Email confirmed");
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        tracing::debug!(email, "Authenticating user");

        // Unknown email and wrong password must be indistinguishable to the
        // caller, so both paths end in the same InvalidCredentials value.
        let Some(user) = self.repository.find_by_email(email).await? else {
            return Err(UserError::InvalidCredentials);
        };

        let valid = self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?;
        if !valid {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, UserError> {
        // Confirmation is deliberately not required to log in.
        let user = self.authenticate(email, password).await?;
        let token = self.authenticator.issue_access_token(user.email.as_str())?;

        tracing::debug!(email = %user.email, "Access token issued");
        Ok(token)
    }

    async fn current_user(&self, token: &str) -> Result<User, UserError> {
        let email = self
            .authenticator
            .subject_for_token(token, TokenPurpose::Access)?;

        self.repository
            .find_by_email(&email)
            .await?
            .ok_or(UserError::UserNotFound)
    }
}
