use std::fmt;

use super::BookId;

/// 書籍エンティティ
///
/// 不変条件：
/// - available_copies は負にならない（符号なし型と borrow_copy のガードで保証）
/// - loanable は作成後に変更されない
///
/// フィールドは非公開。在庫の増減は borrow_copy / return_copy だけが行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    name: String,
    writer: String,
    genre: String,
    available_copies: u32,
    loanable: bool,
}

impl Book {
    pub fn new(
        id: BookId,
        name: String,
        writer: String,
        genre: String,
        available_copies: u32,
        loanable: bool,
    ) -> Self {
        Self {
            id,
            name,
            writer,
            genre,
            available_copies,
            loanable,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn writer(&self) -> &str {
        &self.writer
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    pub fn is_loanable(&self) -> bool {
        self.loanable
    }

    /// 在庫を1冊貸し出す
    ///
    /// ビジネスルール：
    /// - 在庫が1冊以上あること
    /// - 貸出可能フラグが立っていること
    ///
    /// 条件を満たさない場合は在庫を変更せず false を返す。
    #[must_use]
    pub fn borrow_copy(&mut self) -> bool {
        if self.available_copies > 0 && self.loanable {
            self.available_copies -= 1;
            return true;
        }
        false
    }

    /// 在庫を1冊戻す
    ///
    /// 上限は設けない。初期在庫を超えて増えることも許容する。
    pub fn return_copy(&mut self) {
        self.available_copies = self.available_copies.saturating_add(1);
    }

    /// 書籍名の部分一致判定（大文字小文字を区別しない）
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// ジャンルの完全一致判定（大文字小文字を区別しない）
    pub fn genre_matches(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {}, Name: {}, Writer: {}, Genre: {}, Available Copies: {}, Available for Loan: {}",
            self.id, self.name, self.writer, self.genre, self.available_copies, self.loanable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fantasy_book(copies: u32, loanable: bool) -> Book {
        Book::new(
            BookId::new(1),
            "The Hobbit".to_string(),
            "J.R.R. Tolkien".to_string(),
            "Fantasy".to_string(),
            copies,
            loanable,
        )
    }

    #[test]
    fn test_borrow_copy_decrements_stock() {
        let mut book = fantasy_book(2, true);

        assert!(book.borrow_copy());

        assert_eq!(book.available_copies(), 1);
    }

    #[test]
    fn test_borrow_copy_fails_when_out_of_stock() {
        let mut book = fantasy_book(0, true);

        assert!(!book.borrow_copy());

        // 在庫は変化しない
        assert_eq!(book.available_copies(), 0);
    }

    #[test]
    fn test_borrow_copy_fails_when_not_loanable() {
        // 在庫があっても貸出不可の書籍は借りられない
        let mut book = fantasy_book(5, false);

        assert!(!book.borrow_copy());

        assert_eq!(book.available_copies(), 5);
    }

    #[test]
    fn test_return_copy_increments_stock() {
        let mut book = fantasy_book(1, true);
        assert!(book.borrow_copy());

        book.return_copy();

        assert_eq!(book.available_copies(), 1);
    }

    #[test]
    fn test_return_copy_has_no_upper_bound() {
        // 初期在庫を超える返却も受け付ける
        let mut book = fantasy_book(1, true);

        book.return_copy();
        book.return_copy();

        assert_eq!(book.available_copies(), 3);
    }

    #[test]
    fn test_matches_name_is_case_insensitive_substring() {
        let book = fantasy_book(1, true);

        assert!(book.matches_name("hobbit"));
        assert!(book.matches_name("THE"));
        assert!(book.matches_name("The Hobbit"));
        assert!(!book.matches_name("Silmarillion"));
    }

    #[test]
    fn test_genre_matches_is_case_insensitive_exact() {
        let book = fantasy_book(1, true);

        assert!(book.genre_matches("fantasy"));
        assert!(book.genre_matches("FANTASY"));
        // 部分一致は不可
        assert!(!book.genre_matches("fan"));
    }

    #[test]
    fn test_display_format() {
        let book = fantasy_book(2, true);

        assert_eq!(
            book.to_string(),
            "Book ID: 1, Name: The Hobbit, Writer: J.R.R. Tolkien, Genre: Fantasy, Available Copies: 2, Available for Loan: true"
        );
    }
}
