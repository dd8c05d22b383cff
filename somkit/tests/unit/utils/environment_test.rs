use super::*;
use std::sync::Mutex;

struct FixedQuota(bool);

impl Quota for FixedQuota {
    fn is_reached(&self) -> bool {
        self.0
    }
}

#[test]
fn can_check_quota() {
    let random: Arc<dyn Random + Send + Sync> = Arc::new(DefaultRandom::default());
    let create = |quota: Option<Arc<dyn Quota + Send + Sync>>| {
        Environment::new(random.clone(), quota, Arc::new(|_: &str| {}))
    };

    assert!(!create(None).is_quota_reached());
    assert!(!create(Some(Arc::new(FixedQuota(false)))).is_quota_reached());
    assert!(create(Some(Arc::new(FixedQuota(true)))).is_quota_reached());
}

#[test]
fn can_use_time_quota() {
    assert!(TimeQuota::new(-1.).is_reached());
    assert!(!TimeQuota::new(3600.).is_reached());
}

#[test]
fn can_use_custom_logger() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let environment = Environment::new(Arc::new(DefaultRandom::default()), None, logger);

    (environment.logger)("hello");
    (environment.clone().logger)("world");

    assert_eq!(*messages.lock().unwrap(), vec!["hello".to_string(), "world".to_string()]);
}

#[test]
fn can_create_silent_environment() {
    let environment = Environment::new_silent(Arc::new(DefaultRandom::new_with_seed(1)));

    (environment.logger)("ignored");

    assert!(environment.quota.is_none());
    assert!(get_cpus() > 0);
}
