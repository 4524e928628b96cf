use std::sync::Arc;

use creation_recipe::model::SharedResource;
use creation_recipe::singleton::{reset_shared, shared, shared_state, Lifecycle, Singleton};

/// The only test in this binary that touches the process-wide resource, so
/// parallel tests cannot reset it underneath each other.
#[test]
fn test_shared_resource_lifecycle() {
    assert_eq!(shared_state(), Lifecycle::Uninitialized);

    let first = shared();
    let again = shared();
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(first.tell(), "<> This is Singleton");
    assert_eq!(again.hits(), 1);
    assert_eq!(shared_state(), Lifecycle::Active);

    assert!(reset_shared());
    assert_eq!(shared_state(), Lifecycle::Destroyed);
    assert!(!reset_shared());

    // A fresh instance starts over.
    let fresh = shared();
    assert!(!Arc::ptr_eq(&first, &fresh));
    assert_eq!(fresh.generation(), first.generation() + 1);
    assert_eq!(fresh.hits(), 0);

    // The stale handle still works but is no longer the shared state.
    first.touch();
    assert_eq!(fresh.hits(), 0);
}

static RACED: Singleton<SharedResource> = Singleton::new(SharedResource::new);

/// Many threads racing on the first `get` see exactly one instance.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_get_creates_one_instance() {
    let mut handles = vec![];
    for _ in 0..16 {
        handles.push(tokio::task::spawn_blocking(|| {
            let resource = RACED.get();
            resource.touch();
            resource
        }));
    }

    let mut instances = vec![];
    for handle in handles {
        instances.push(handle.await.unwrap());
    }

    assert_eq!(RACED.generation(), 1, "Expected a single creation");
    assert!(instances.iter().all(|r| Arc::ptr_eq(r, &instances[0])));
    assert_eq!(instances[0].hits(), 16);
}
