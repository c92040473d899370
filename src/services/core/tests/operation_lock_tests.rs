use super::*;

#[tokio::test]
async fn test_lock_acquisition() {
    let lock = OperationLock::new();
    let guard = lock.acquire().await;
    assert!(guard.is_ok(), "First acquisition should succeed");
}

#[tokio::test]
async fn test_lock_contention() {
    let lock = Arc::new(OperationLock::new());
    let _guard = lock.acquire().await.unwrap();

    // Second acquisition should fail (timeout)
    let lock2 = lock.clone();
    let result = lock2.acquire().await;
    assert!(matches!(result, Err(PackError::Busy)));
}

#[tokio::test]
async fn test_lock_release_on_drop() {
    let lock = OperationLock::new();
    {
        let _guard = lock.acquire().await.unwrap();
    }
    let result = lock.acquire().await;
    assert!(result.is_ok(), "Should succeed after guard is dropped");
}
