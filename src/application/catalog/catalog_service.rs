use crate::domain::{Book, BookId, Subscriber, SubscriberId, commands::*};
use crate::ports::book_store::BookStore;
use crate::ports::subscriber_store::SubscriberStore;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::errors::{CatalogError, Result};

/// 貸出要求の処理結果
///
/// ID指定ならその場で貸出が確定する。名前検索は候補の提示までで、
/// 確定には borrow_selected による選択が必要になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// 貸出が確定した
    Borrowed(BookId),
    /// 候補の説明文を提示し、選択待ち
    SelectionNeeded(Vec<String>),
}

/// 蔵書カタログ
///
/// 書籍と会員の全件をメモリ上のマップに保持し、セッション中の
/// 唯一の正とする。登録操作だけをストアへ書き戻し、貸出・返却の
/// 状態はセッション内で完結する。
///
/// 不変条件：
/// - 登録は永続化の成功後にのみキャッシュへ反映される
/// - マップのキーは各エンティティ自身のIDと一致する
pub struct Catalog {
    books: BTreeMap<BookId, Book>,
    subscribers: BTreeMap<SubscriberId, Subscriber>,
    book_store: Arc<dyn BookStore>,
    subscriber_store: Arc<dyn SubscriberStore>,
}

impl Catalog {
    /// ストアからカタログを初期化する
    ///
    /// # 引数
    /// * `book_store` - 書籍ストア
    /// * `subscriber_store` - 会員ストア
    ///
    /// # 戻り値
    /// 保存済みデータを読み込んだカタログ
    ///
    /// # エラー
    /// - Persistence: スキーマ作成または読み込みの失敗
    pub async fn load(
        book_store: Arc<dyn BookStore>,
        subscriber_store: Arc<dyn SubscriberStore>,
    ) -> Result<Self> {
        // 1. スキーマを整える（既にあれば何もしない）
        book_store
            .ensure_schema()
            .await
            .map_err(CatalogError::Persistence)?;
        subscriber_store
            .ensure_schema()
            .await
            .map_err(CatalogError::Persistence)?;

        // 2. 保存済みの書籍と会員を全件読み込む
        let books = book_store
            .load_all()
            .await
            .map_err(CatalogError::Persistence)?
            .into_iter()
            .map(|book| (book.id(), book))
            .collect();

        let subscribers = subscriber_store
            .load_all()
            .await
            .map_err(CatalogError::Persistence)?
            .into_iter()
            .map(|subscriber| (subscriber.id(), subscriber))
            .collect();

        Ok(Self {
            books,
            subscribers,
            book_store,
            subscriber_store,
        })
    }

    // ==================== 登録 ====================

    /// 書籍を登録する
    ///
    /// ビジネスルール：
    /// - 書籍IDが未使用であること
    ///
    /// 永続化が成功した場合のみキャッシュへ反映する。失敗時は
    /// カタログの状態は変化しない。
    ///
    /// # エラー
    /// - DuplicateBookId: IDが登録済み
    /// - Persistence: ストアへの書き込み失敗
    pub async fn add_book(&mut self, cmd: AddBook) -> Result<()> {
        // 1. ID重複の確認
        if self.books.contains_key(&cmd.id) {
            return Err(CatalogError::DuplicateBookId);
        }

        // 2. エンティティを構築
        let book = Book::new(
            cmd.id,
            cmd.name,
            cmd.writer,
            cmd.genre,
            cmd.available_copies,
            cmd.loanable,
        );

        // 3. 先に永続化し、成功した場合のみキャッシュへ反映
        self.book_store
            .insert(&book)
            .await
            .map_err(CatalogError::Persistence)?;
        self.books.insert(book.id(), book);

        Ok(())
    }

    /// 会員を登録する
    ///
    /// ビジネスルール：
    /// - 会員IDが未使用であること
    ///
    /// # エラー
    /// - DuplicateSubscriberId: IDが登録済み
    /// - Persistence: ストアへの書き込み失敗
    pub async fn add_subscriber(&mut self, cmd: AddSubscriber) -> Result<()> {
        // 1. ID重複の確認
        if self.subscribers.contains_key(&cmd.id) {
            return Err(CatalogError::DuplicateSubscriberId);
        }

        // 2. エンティティを構築
        let subscriber = Subscriber::new(cmd.id, cmd.name);

        // 3. 先に永続化し、成功した場合のみキャッシュへ反映
        self.subscriber_store
            .insert(&subscriber)
            .await
            .map_err(CatalogError::Persistence)?;
        self.subscribers.insert(subscriber.id(), subscriber);

        Ok(())
    }

    // ==================== 貸出・返却 ====================

    /// 書籍を貸し出す
    ///
    /// ビジネスルール：
    /// - 会員が存在すること
    /// - 会員の貸出冊数が上限未満であること
    /// - ID指定の場合、その書籍が存在し在庫があること
    ///
    /// 名前検索の場合は候補の説明文を返すだけで、在庫は変化しない。
    /// 確定は borrow_selected が行う。
    ///
    /// # 戻り値
    /// 確定した貸出、または選択待ちの候補一覧
    ///
    /// # エラー
    /// - SubscriberNotFound: 会員が存在しない
    /// - BorrowLimitExceeded: 貸出上限に達している
    /// - BookNotFound: ID不一致、または検索結果が空
    /// - NoAvailableCopies: 在庫切れか貸出不可
    pub fn borrow_book(&mut self, cmd: BorrowBook) -> Result<BorrowOutcome> {
        // 1. 会員の存在と貸出上限を確認
        let subscriber = self
            .subscribers
            .get(&cmd.subscriber_id)
            .ok_or(CatalogError::SubscriberNotFound)?;

        if !subscriber.can_borrow() {
            return Err(CatalogError::BorrowLimitExceeded);
        }

        match cmd.book {
            // 2a. ID指定は即時に貸出を確定する
            BookQuery::ById(book_id) => {
                if !self.books.contains_key(&book_id) {
                    return Err(CatalogError::BookNotFound);
                }
                self.lend(cmd.subscriber_id, book_id)?;
                Ok(BorrowOutcome::Borrowed(book_id))
            }
            // 2b. 名前検索は候補の提示まで
            BookQuery::ByName(query) => {
                let matches: Vec<String> = self
                    .books
                    .values()
                    .filter(|book| book.matches_name(&query))
                    .map(|book| book.to_string())
                    .collect();

                if matches.is_empty() {
                    return Err(CatalogError::BookNotFound);
                }
                Ok(BorrowOutcome::SelectionNeeded(matches))
            }
        }
    }

    /// 名前検索の候補から選択された書籍の貸出を確定する
    ///
    /// 選択はカタログ全体に対して検証する。提示した候補に含まれて
    /// いたかどうかまでは照合しない。
    ///
    /// # エラー
    /// - SubscriberNotFound: 会員が存在しない
    /// - BorrowLimitExceeded: 貸出上限に達している
    /// - InvalidSelection: 選択されたIDの書籍が存在しない
    /// - NoAvailableCopies: 在庫切れか貸出不可
    pub fn borrow_selected(
        &mut self,
        subscriber_id: SubscriberId,
        book_id: BookId,
    ) -> Result<()> {
        // 1. 選択待ちの間に状態は変わらないが、前提を再確認する
        let subscriber = self
            .subscribers
            .get(&subscriber_id)
            .ok_or(CatalogError::SubscriberNotFound)?;

        if !subscriber.can_borrow() {
            return Err(CatalogError::BorrowLimitExceeded);
        }

        // 2. 選択されたIDの存在確認
        if !self.books.contains_key(&book_id) {
            return Err(CatalogError::InvalidSelection);
        }

        // 3. 貸出を確定
        self.lend(subscriber_id, book_id)
    }

    /// 貸出を1件確定する
    ///
    /// 在庫の減算と会員側の記録を1ステップで行う。途中で失敗した
    /// 場合はどちらの状態も変化しない。
    fn lend(&mut self, subscriber_id: SubscriberId, book_id: BookId) -> Result<()> {
        let subscriber = self
            .subscribers
            .get_mut(&subscriber_id)
            .ok_or(CatalogError::SubscriberNotFound)?;
        let book = self
            .books
            .get_mut(&book_id)
            .ok_or(CatalogError::BookNotFound)?;

        if !book.borrow_copy() {
            return Err(CatalogError::NoAvailableCopies);
        }
        subscriber.record_borrow(book_id);

        Ok(())
    }

    /// 書籍を返却する
    ///
    /// ビジネスルール：
    /// - 会員と書籍が存在すること
    /// - その会員がその書籍を借りていること
    ///
    /// # エラー
    /// - SubscriberNotFound: 会員が存在しない
    /// - BookNotFound: 書籍が存在しない
    /// - NotBorrowedBySubscriber: この会員の貸出記録がない
    pub fn return_book(&mut self, cmd: ReturnBook) -> Result<()> {
        // 1. 会員と書籍の存在確認
        let subscriber = self
            .subscribers
            .get_mut(&cmd.subscriber_id)
            .ok_or(CatalogError::SubscriberNotFound)?;
        let book = self
            .books
            .get_mut(&cmd.book_id)
            .ok_or(CatalogError::BookNotFound)?;

        // 2. 貸出記録の確認
        if !subscriber.has_borrowed(cmd.book_id) {
            return Err(CatalogError::NotBorrowedBySubscriber);
        }

        // 3. 記録を取り除き、在庫を戻す
        subscriber.record_return(cmd.book_id);
        book.return_copy();

        Ok(())
    }

    // ==================== 照会 ====================

    /// 全書籍の説明文をID昇順で返す
    pub fn list_books(&self) -> impl Iterator<Item = String> {
        self.books.values().map(|book| book.to_string())
    }

    /// ジャンルが一致する書籍の説明文をID昇順で返す
    ///
    /// 比較は大文字小文字を区別しない。一致がなければ空になる。
    pub fn list_books_by_genre(&self, genre: &str) -> impl Iterator<Item = String> {
        let genre = genre.to_owned();
        self.books
            .values()
            .filter(move |book| book.genre_matches(&genre))
            .map(|book| book.to_string())
    }

    /// 会員が借用中の書籍の説明文を借りた順で返す
    ///
    /// # エラー
    /// - SubscriberNotFound: 会員が存在しない
    pub fn list_subscriber_books(
        &self,
        subscriber_id: SubscriberId,
    ) -> Result<impl Iterator<Item = String>> {
        let subscriber = self
            .subscribers
            .get(&subscriber_id)
            .ok_or(CatalogError::SubscriberNotFound)?;

        // 書籍は削除されないため通常は全件見つかる。見つからないIDは読み飛ばす。
        Ok(subscriber
            .borrowed_books()
            .iter()
            .filter_map(|id| self.books.get(id))
            .map(|book| book.to_string()))
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    pub fn subscriber(&self, id: SubscriberId) -> Option<&Subscriber> {
        self.subscribers.get(&id)
    }

    pub fn has_book(&self, id: BookId) -> bool {
        self.books.contains_key(&id)
    }

    pub fn has_subscriber(&self, id: SubscriberId) -> bool {
        self.subscribers.contains_key(&id)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
