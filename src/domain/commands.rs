use super::{BookId, SubscriberId};

/// コマンド：書籍を登録する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBook {
    pub id: BookId,
    pub name: String,
    pub writer: String,
    pub genre: String,
    pub available_copies: u32,
    pub loanable: bool,
}

/// コマンド：会員を登録する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSubscriber {
    pub id: SubscriberId,
    pub name: String,
}

/// 貸出対象の指定方法
///
/// ID指定か、書籍名の部分一致検索か。入力の解釈はシェル境界で一度だけ
/// 行い、カタログ側で入力文字列を再解釈することはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookQuery {
    ById(BookId),
    ByName(String),
}

/// コマンド：書籍を借りる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowBook {
    pub subscriber_id: SubscriberId,
    pub book: BookQuery,
}

/// コマンド：書籍を返す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnBook {
    pub subscriber_id: SubscriberId,
    pub book_id: BookId,
}
