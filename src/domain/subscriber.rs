use std::fmt;

use super::{BookId, SubscriberId};

/// 会員1人あたりの同時貸出の上限冊数
pub const BORROW_LIMIT: usize = 3;

/// 会員エンティティ
///
/// 不変条件：
/// - borrowed の件数は BORROW_LIMIT を超えない（record_borrow のガードで保証）
/// - borrowed は借りた順序を保持する
///
/// 貸出記録は書籍IDの参照のみを持ち、書籍の実体はカタログ側が所有する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    id: SubscriberId,
    name: String,
    borrowed: Vec<BookId>,
}

impl Subscriber {
    pub fn new(id: SubscriberId, name: String) -> Self {
        Self {
            id,
            name,
            borrowed: Vec::new(),
        }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// まだ借りられるか（上限未満か）
    pub fn can_borrow(&self) -> bool {
        self.borrowed.len() < BORROW_LIMIT
    }

    /// 貸出を記録する
    ///
    /// 上限に達している場合は何もしない。呼び出し側が can_borrow() を
    /// 確認してから呼ぶこと。
    pub fn record_borrow(&mut self, book_id: BookId) {
        if self.can_borrow() {
            self.borrowed.push(book_id);
        }
    }

    /// 返却を記録する
    ///
    /// 最初に見つかった1件だけを取り除く。借りていないIDなら何もしない。
    pub fn record_return(&mut self, book_id: BookId) {
        if let Some(pos) = self.borrowed.iter().position(|id| *id == book_id) {
            self.borrowed.remove(pos);
        }
    }

    /// この書籍を借用中か
    pub fn has_borrowed(&self, book_id: BookId) -> bool {
        self.borrowed.contains(&book_id)
    }

    /// 借用中の書籍ID（借りた順）
    pub fn borrowed_books(&self) -> &[BookId] {
        &self.borrowed
    }
}

impl fmt::Display for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subscriber ID: {}, Name: {}, Borrowed Books: {}",
            self.id,
            self.name,
            self.borrowed.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber() -> Subscriber {
        Subscriber::new(SubscriberId::new(10), "Sam".to_string())
    }

    #[test]
    fn test_new_subscriber_can_borrow() {
        let subscriber = subscriber();

        assert!(subscriber.can_borrow());
        assert!(subscriber.borrowed_books().is_empty());
    }

    #[test]
    fn test_record_borrow_keeps_order() {
        let mut subscriber = subscriber();

        subscriber.record_borrow(BookId::new(30));
        subscriber.record_borrow(BookId::new(10));
        subscriber.record_borrow(BookId::new(20));

        // ID順ではなく借りた順
        assert_eq!(
            subscriber.borrowed_books(),
            &[BookId::new(30), BookId::new(10), BookId::new(20)]
        );
    }

    #[test]
    fn test_cannot_borrow_at_limit() {
        let mut subscriber = subscriber();
        for id in 1..=BORROW_LIMIT as u32 {
            subscriber.record_borrow(BookId::new(id));
        }

        assert!(!subscriber.can_borrow());
    }

    #[test]
    fn test_record_borrow_is_guarded_at_limit() {
        let mut subscriber = subscriber();
        for id in 1..=BORROW_LIMIT as u32 {
            subscriber.record_borrow(BookId::new(id));
        }

        // 上限到達後の記録は無視される
        subscriber.record_borrow(BookId::new(99));

        assert_eq!(subscriber.borrowed_books().len(), BORROW_LIMIT);
        assert!(!subscriber.has_borrowed(BookId::new(99)));
    }

    #[test]
    fn test_record_return_removes_first_occurrence_only() {
        let mut subscriber = subscriber();
        subscriber.record_borrow(BookId::new(7));
        subscriber.record_borrow(BookId::new(8));

        subscriber.record_return(BookId::new(7));

        assert!(!subscriber.has_borrowed(BookId::new(7)));
        assert!(subscriber.has_borrowed(BookId::new(8)));
    }

    #[test]
    fn test_record_return_is_noop_when_not_borrowed() {
        let mut subscriber = subscriber();
        subscriber.record_borrow(BookId::new(7));

        subscriber.record_return(BookId::new(99));

        assert_eq!(subscriber.borrowed_books(), &[BookId::new(7)]);
    }

    #[test]
    fn test_can_borrow_again_after_return() {
        let mut subscriber = subscriber();
        for id in 1..=BORROW_LIMIT as u32 {
            subscriber.record_borrow(BookId::new(id));
        }
        assert!(!subscriber.can_borrow());

        subscriber.record_return(BookId::new(1));

        assert!(subscriber.can_borrow());
    }

    #[test]
    fn test_display_shows_borrowed_count() {
        let mut subscriber = subscriber();
        subscriber.record_borrow(BookId::new(1));
        subscriber.record_borrow(BookId::new(2));

        assert_eq!(
            subscriber.to_string(),
            "Subscriber ID: 10, Name: Sam, Borrowed Books: 2"
        );
    }
}
