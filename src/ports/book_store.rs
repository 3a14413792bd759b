use crate::domain::book::Book;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストアポート
///
/// 書籍レコードの永続化を抽象化する。重複IDの事前検査は呼び出し側
/// （カタログ）の責務で、ストアは渡されたものを保存するだけ。
#[async_trait]
pub trait BookStore: Send + Sync {
    /// 書籍テーブルを用意する
    ///
    /// 既に存在する場合は何もしない（冪等）。
    async fn ensure_schema(&self) -> Result<()>;

    /// 永続化済みの全書籍を読み込む
    ///
    /// 起動時のキャッシュ構築に使用される。
    async fn load_all(&self) -> Result<Vec<Book>>;

    /// 新しい書籍を1件保存する
    async fn insert(&self, book: &Book) -> Result<()>;
}
