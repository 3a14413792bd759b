use crate::domain::Book;
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// テスト用のインメモリBookStore実装
///
/// 挿入された書籍をVecに保持する。`fail_inserts`を立てると
/// 以降のinsertが失敗し、永続化エラー経路を試せる。
#[allow(dead_code)]
pub struct BookStore {
    rows: Mutex<Vec<Book>>,
    fail_inserts: Mutex<bool>,
}

#[allow(dead_code)]
impl BookStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_inserts: Mutex::new(false),
        }
    }

    /// ロード前に書籍を仕込む（保存済みデータの再現用）
    pub fn seed(&self, book: Book) {
        self.rows.lock().unwrap().push(book);
    }

    /// 以降のinsertを失敗させる
    pub fn fail_inserts(&self) {
        *self.fail_inserts.lock().unwrap() = true;
    }

    pub fn stored_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Book>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, book: &Book) -> Result<()> {
        if *self.fail_inserts.lock().unwrap() {
            return Err(Box::new(std::io::Error::other("injected insert failure")));
        }
        self.rows.lock().unwrap().push(book.clone());
        Ok(())
    }
}
