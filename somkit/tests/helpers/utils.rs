use crate::utils::{DefaultRandom, Environment, Quota, Random};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const TEST_SEED: u64 = 42;

pub fn create_test_random() -> Arc<dyn Random + Send + Sync> {
    Arc::new(DefaultRandom::new_with_seed(TEST_SEED))
}

pub fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment::new_silent(create_test_random()))
}

/// Creates an environment which collects all log messages.
pub fn create_test_environment_with_logs() -> (Arc<Environment>, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (Arc::new(Environment::new(create_test_random(), None, logger)), messages)
}

/// Creates an environment with a quota which is reached after given amount of checks.
pub fn create_test_environment_with_quota(checks: usize) -> Arc<Environment> {
    let quota = Arc::new(CountingQuota { limit: checks, checks: AtomicUsize::new(0) });

    Arc::new(Environment::new(create_test_random(), Some(quota), Arc::new(|_: &str| {})))
}

struct CountingQuota {
    limit: usize,
    checks: AtomicUsize,
}

impl Quota for CountingQuota {
    fn is_reached(&self) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst) >= self.limit
    }
}
