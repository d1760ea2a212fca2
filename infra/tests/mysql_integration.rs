//! Integration tests for the MySQL verification store and user directory
//!
//! Require a reachable MySQL database in `DATABASE_URL`; run with
//! `cargo test -p sh_infra -- --ignored`.

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use sh_core::domain::entities::Account;
    use sh_core::repositories::{UserDirectory, VerificationStore};
    use sh_infra::database::{DatabasePool, MySqlUserDirectory, MySqlVerificationStore};
    use sh_shared::config::DatabaseConfig;

    async fn pool() -> DatabasePool {
        dotenvy::dotenv().ok();
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
        let pool = DatabasePool::new(DatabaseConfig::new(url).with_max_connections(5))
            .await
            .expect("connect to test database");
        pool.run_migrations().await.expect("apply migrations");
        pool
    }

    fn unique_email() -> String {
        format!("reset-{}@example.com", Uuid::new_v4().simple())
    }

    async fn insert_account(pool: &DatabasePool, email: &str) -> Account {
        let account = Account::new(email.to_string(), Some("Ada".to_string()), "old-hash".to_string());
        sqlx::query("INSERT INTO users (id, email, name, password) VALUES (?, ?, ?, ?)")
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.name)
            .bind(&account.password_hash)
            .execute(pool.get_pool())
            .await
            .expect("insert account");
        account
    }

    #[tokio::test]
    #[ignore] // Requires MySQL to be running
    async fn test_health_check() {
        let pool = pool().await;
        assert!(pool.health_check().await.unwrap());
    }

    #[tokio::test]
    #[ignore] // Requires MySQL to be running
    async fn test_upsert_replaces_and_resets_verified() {
        let pool = pool().await;
        let store = MySqlVerificationStore::new(pool.get_pool().clone());
        let email = unique_email();
        let expires_at = Utc::now() + Duration::minutes(10);

        store.upsert(&email, "AAAAAA", expires_at).await.unwrap();
        let first = store.find(&email, "AAAAAA").await.unwrap().unwrap();
        assert!(store.mark_verified(&first).await.unwrap());

        store.upsert(&email, "BBBBBB", expires_at).await.unwrap();

        assert!(store.find(&email, "AAAAAA").await.unwrap().is_none());
        let second = store.find(&email, "BBBBBB").await.unwrap().unwrap();
        assert!(!second.verified);
        assert!(store.is_valid(Some(&second), Utc::now()));
    }

    #[tokio::test]
    #[ignore] // Requires MySQL to be running
    async fn test_find_is_case_sensitive_on_code() {
        let pool = pool().await;
        let store = MySqlVerificationStore::new(pool.get_pool().clone());
        let email = unique_email();

        store.upsert(&email, "AB12CD", Utc::now() + Duration::minutes(10)).await.unwrap();

        assert!(store.find(&email, "AB12CD").await.unwrap().is_some());
        assert!(store.find(&email, "ab12cd").await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore] // Requires MySQL to be running
    async fn test_mark_verified_only_once() {
        let pool = pool().await;
        let store = MySqlVerificationStore::new(pool.get_pool().clone());
        let email = unique_email();

        store.upsert(&email, "AB12CD", Utc::now() + Duration::minutes(10)).await.unwrap();
        let record = store.find(&email, "AB12CD").await.unwrap().unwrap();

        assert!(store.mark_verified(&record).await.unwrap());
        assert!(!store.mark_verified(&record).await.unwrap());
    }

    #[tokio::test]
    #[ignore] // Requires MySQL to be running
    async fn test_purge_expired() {
        let pool = pool().await;
        let store = MySqlVerificationStore::new(pool.get_pool().clone());
        let live = unique_email();
        let stale = unique_email();

        store.upsert(&live, "AAAAAA", Utc::now() + Duration::minutes(10)).await.unwrap();
        store.upsert(&stale, "BBBBBB", Utc::now() - Duration::minutes(1)).await.unwrap();

        let removed = store.purge_expired(Utc::now()).await.unwrap();

        assert!(removed >= 1);
        assert!(store.find(&stale, "BBBBBB").await.unwrap().is_none());
        assert!(store.find(&live, "AAAAAA").await.unwrap().is_some());
    }

    #[tokio::test]
    #[ignore] // Requires MySQL to be running
    async fn test_user_directory_password_update() {
        let pool = pool().await;
        let directory = MySqlUserDirectory::new(pool.get_pool().clone());
        let email = unique_email();
        let account = insert_account(&pool, &email).await;

        let found = directory.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.id, account.id);
        assert_eq!(found.display_name(), Some("Ada"));

        let hash = bcrypt::hash("new-password", 4).unwrap();
        directory.set_password_hash(&found, &hash).await.unwrap();

        let updated = directory.find_by_email(&email).await.unwrap().unwrap();
        assert!(bcrypt::verify("new-password", &updated.password_hash).unwrap());

        assert!(directory.find_by_email(&unique_email()).await.unwrap().is_none());
    }
}
