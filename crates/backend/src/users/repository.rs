use anyhow::Result;
use sqlx::SqlitePool;

/// A customer row as stored in SQLite.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

pub async fn insert(pool: &SqlitePool, customer: &Customer) -> Result<()> {
    sqlx::query(
        "INSERT INTO customers (id, name, surname, email, password_hash, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&customer.id)
    .bind(&customer.name)
    .bind(&customer.surname)
    .bind(&customer.email)
    .bind(&customer.password_hash)
    .bind(&customer.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>(
        "SELECT id, name, surname, email, password_hash, created_at
         FROM customers WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(customer)
}
