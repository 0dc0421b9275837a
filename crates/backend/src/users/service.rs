use chrono::Utc;
use contracts::users::{SignupRequest, SignupResponse};
use sqlx::SqlitePool;

use super::{password, repository};
use crate::error::SignupError;

/// Register a new customer from the signup form fields.
///
/// Rejects duplicate email addresses before inserting; the password is
/// stored hashed, never as submitted.
pub async fn signup(pool: &SqlitePool, request: SignupRequest) -> Result<SignupResponse, SignupError> {
    let name = request.name.trim();
    let surname = request.surname.trim();
    let email = request.email.trim();

    if name.is_empty() || surname.is_empty() {
        return Err(SignupError::Invalid("Name cannot be empty".to_string()));
    }
    if !email.contains('@') {
        return Err(SignupError::Invalid("Invalid email format".to_string()));
    }
    if request.password.is_empty() {
        return Err(SignupError::Invalid("Password cannot be empty".to_string()));
    }

    if repository::email_exists(pool, email).await? {
        return Err(SignupError::EmailTaken);
    }

    let password_hash = password::hash_password(&request.password)?;

    let customer = repository::Customer {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        password_hash,
        created_at: Utc::now().to_rfc3339(),
    };

    repository::insert(pool, &customer).await?;
    tracing::info!("registered customer {}", customer.id);

    Ok(SignupResponse {
        id: customer.id,
        email: customer.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    fn request(email: &str) -> SignupRequest {
        SignupRequest {
            name: "Alice".to_string(),
            surname: "Liddell".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn registers_a_new_customer() {
        let pool = db::connect_in_memory().await.unwrap();

        let response = signup(&pool, request("alice@example.com")).await.unwrap();
        assert_eq!(response.email, "alice@example.com");

        let stored = repository::get_by_email(&pool, "alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, response.id);
        assert_ne!(stored.password_hash, "secret");
        assert!(password::verify_password("secret", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn rejects_a_taken_email() {
        let pool = db::connect_in_memory().await.unwrap();

        signup(&pool, request("alice@example.com")).await.unwrap();
        let err = signup(&pool, request("alice@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, SignupError::EmailTaken));
    }

    #[tokio::test]
    async fn rejects_an_email_without_at_sign() {
        let pool = db::connect_in_memory().await.unwrap();

        let err = signup(&pool, request("not-an-email")).await.unwrap_err();
        assert!(matches!(err, SignupError::Invalid(_)));
    }

    #[tokio::test]
    async fn trims_whitespace_before_storing() {
        let pool = db::connect_in_memory().await.unwrap();

        let mut req = request("  alice@example.com  ");
        req.name = "  Alice ".to_string();
        signup(&pool, req).await.unwrap();

        let stored = repository::get_by_email(&pool, "alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Alice");
    }
}
