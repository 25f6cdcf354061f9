use api::{ApiError, ClubBackend};

/// Toggle the session user's favorite on `club` and return the fresh count.
pub async fn toggle_and_count<B: ClubBackend>(backend: &B, club: &str) -> Result<u32, ApiError> {
    backend.toggle_favorite(club).await?;
    backend.favorite_count(club).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Credentials, MemoryBackend};

    #[tokio::test]
    async fn test_toggle_requires_login() {
        let backend = MemoryBackend::with_demo_data();
        let err = toggle_and_count(&backend, "Water Club").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(backend.favorite_count("Water Club").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_toggle_counts() {
        let backend = MemoryBackend::with_demo_data();
        backend
            .login(&Credentials {
                username: "demo".into(),
                password: "demo".into(),
            })
            .await
            .unwrap();
        assert_eq!(toggle_and_count(&backend, "Water Club").await.unwrap(), 1);
        assert_eq!(toggle_and_count(&backend, "Water Club").await.unwrap(), 0);
    }
}
