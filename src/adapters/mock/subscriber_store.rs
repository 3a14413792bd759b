use crate::domain::Subscriber;
use crate::ports::subscriber_store::{Result, SubscriberStore as SubscriberStoreTrait};
use async_trait::async_trait;
use std::sync::Mutex;

/// テスト用のインメモリSubscriberStore実装
#[allow(dead_code)]
pub struct SubscriberStore {
    rows: Mutex<Vec<Subscriber>>,
    fail_inserts: Mutex<bool>,
}

#[allow(dead_code)]
impl SubscriberStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_inserts: Mutex::new(false),
        }
    }

    /// ロード前に会員を仕込む
    pub fn seed(&self, subscriber: Subscriber) {
        self.rows.lock().unwrap().push(subscriber);
    }

    /// 以降のinsertを失敗させる
    pub fn fail_inserts(&self) {
        *self.fail_inserts.lock().unwrap() = true;
    }

    pub fn stored_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl Default for SubscriberStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriberStoreTrait for SubscriberStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Subscriber>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, subscriber: &Subscriber) -> Result<()> {
        if *self.fail_inserts.lock().unwrap() {
            return Err(Box::new(std::io::Error::other("injected insert failure")));
        }
        self.rows.lock().unwrap().push(subscriber.clone());
        Ok(())
    }
}
