use crate::domain::subscriber::Subscriber;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員ストアポート
///
/// 永続化されるのは会員の識別情報（IDと名前）のみ。貸出記録は
/// セッション内のメモリ状態であり、ストアには書き込まれない。
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// 会員テーブルを用意する
    ///
    /// 既に存在する場合は何もしない（冪等）。
    async fn ensure_schema(&self) -> Result<()>;

    /// 永続化済みの全会員を読み込む
    async fn load_all(&self) -> Result<Vec<Subscriber>>;

    /// 新しい会員を1件保存する
    async fn insert(&self, subscriber: &Subscriber) -> Result<()>;
}
