use thiserror::Error;

/// 蔵書管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 会員が存在しない
    #[error("Subscriber not found")]
    SubscriberNotFound,

    /// 書籍が見つからない
    #[error("Book not found")]
    BookNotFound,

    /// 同じIDの書籍が登録済み
    #[error("A book with this ID already exists")]
    DuplicateBookId,

    /// 同じIDの会員が登録済み
    #[error("A subscriber with this ID already exists")]
    DuplicateSubscriberId,

    /// 貸出上限（3冊）を超えている
    #[error("Borrow limit exceeded (max 3 books)")]
    BorrowLimitExceeded,

    /// 貸出可能な在庫がない
    #[error("No available copies")]
    NoAvailableCopies,

    /// この会員はその書籍を借りていない
    #[error("Book is not borrowed by this subscriber")]
    NotBorrowedBySubscriber,

    /// 検索結果からの選択が不正
    #[error("Invalid book selection")]
    InvalidSelection,

    /// ストレージのエラー
    #[error("Storage error")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
