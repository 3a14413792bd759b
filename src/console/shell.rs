use crate::application::catalog::{BorrowOutcome, Catalog, CatalogError};
use crate::domain::commands::{AddBook, AddSubscriber, BookQuery, BorrowBook, ReturnBook};
use crate::domain::{BookId, SubscriberId};
use crate::ports::console::{Console, Result};
use std::sync::Arc;

use super::prompts::{parse_book_query, read_valid_int, read_yes_no};

/// 各操作の後に出す区切り線
const SEPARATOR: &str = "-----------------------------------";

/// 対話シェル
///
/// メニューの表示、入力の検証と解釈、結果のメッセージ表示だけを担当
/// する。業務判断はすべてカタログ側にあり、シェルはその結果を利用者
/// 向けの文言に写すだけにとどめる。
///
/// read_lineの失敗（EOFなど）はセッションの打ち切りとしてrunから
/// そのまま返す。
pub struct Shell {
    catalog: Catalog,
    console: Arc<dyn Console>,
}

impl Shell {
    pub fn new(catalog: Catalog, console: Arc<dyn Console>) -> Self {
        Self { catalog, console }
    }

    /// メニューループを回す
    ///
    /// 終了の選択（8）で正常終了する。未定義の番号は何もせず次の
    /// ループへ進む。終了以外の選択の後には区切り線を出す。
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu();
            let choice = read_valid_int(self.console.as_ref())?;

            match choice {
                1 => self.add_book().await?,
                2 => self.add_subscriber().await?,
                3 => self.borrow_book()?,
                4 => self.return_book()?,
                5 => self.show_books(),
                6 => self.show_books_by_genre()?,
                7 => self.show_subscriber_books()?,
                8 => {
                    self.console.print_line("Goodbye!");
                    return Ok(());
                }
                _ => {}
            }

            self.console.print_line(SEPARATOR);
        }
    }

    fn print_menu(&self) {
        self.console.print_line("Choose an option:");
        self.console.print_line("1 - Add a new book");
        self.console.print_line("2 - Add a new subscriber");
        self.console.print_line("3 - Borrow a book");
        self.console.print_line("4 - Return a book");
        self.console.print_line("5 - Show all books");
        self.console.print_line("6 - Show books by genre");
        self.console.print_line("7 - Show subscriber's borrowed books");
        self.console.print_line("8 - Exit");
    }

    // ==================== 登録 ====================

    async fn add_book(&mut self) -> Result<()> {
        self.console.print_line("Enter Book ID (up to 5 digits):");
        let id = BookId::new(read_valid_int(self.console.as_ref())?);

        // 残りの項目を聞く前に重複だけ先に確認する
        if self.catalog.has_book(id) {
            self.console.print_line("A book with this ID already exists.");
            return Ok(());
        }

        self.console.print_line("Enter Book Name:");
        let name = self.console.read_line()?;

        self.console.print_line("Enter Author:");
        let writer = self.console.read_line()?;

        self.console.print_line("Enter Genre:");
        let genre = self.console.read_line()?;

        self.console.print_line("Enter Available Copies:");
        let available_copies = read_valid_int(self.console.as_ref())?;

        self.console.print_line("Is Available for Loan? (y/n):");
        let loanable = read_yes_no(self.console.as_ref())?;

        let cmd = AddBook {
            id,
            name,
            writer,
            genre,
            available_copies,
            loanable,
        };

        match self.catalog.add_book(cmd).await {
            Ok(()) => self.console.print_line("Book added successfully."),
            Err(CatalogError::DuplicateBookId) => {
                self.console.print_line("A book with this ID already exists.");
            }
            Err(err) => {
                // 詳細はログへ。利用者には一般的な文言だけを見せる。
                tracing::error!("Failed to add book: {:?}", err);
                self.console.print_line("Error adding book: storage error.");
            }
        }

        Ok(())
    }

    async fn add_subscriber(&mut self) -> Result<()> {
        self.console.print_line("Enter Subscriber ID (up to 5 digits):");
        let id = SubscriberId::new(read_valid_int(self.console.as_ref())?);

        if self.catalog.has_subscriber(id) {
            self.console.print_line("Subscriber with this ID already exists.");
            return Ok(());
        }

        self.console.print_line("Enter Subscriber Name:");
        let name = self.console.read_line()?;

        match self.catalog.add_subscriber(AddSubscriber { id, name }).await {
            Ok(()) => self.console.print_line("Subscriber added successfully."),
            Err(CatalogError::DuplicateSubscriberId) => {
                self.console.print_line("Subscriber with this ID already exists.");
            }
            Err(err) => {
                tracing::error!("Failed to add subscriber: {:?}", err);
                self.console.print_line("Error adding subscriber: storage error.");
            }
        }

        Ok(())
    }

    // ==================== 貸出・返却 ====================

    fn borrow_book(&mut self) -> Result<()> {
        self.console.print_line("Enter Subscriber ID:");
        let subscriber_id = SubscriberId::new(read_valid_int(self.console.as_ref())?);

        // 書籍を聞く前に会員側の前提を確認する
        let Some(subscriber) = self.catalog.subscriber(subscriber_id) else {
            self.console.print_line("Subscriber not found.");
            return Ok(());
        };
        if !subscriber.can_borrow() {
            self.console.print_line("Subscriber cannot borrow more books.");
            return Ok(());
        }

        self.console
            .print_line("Enter Book ID to Borrow (or enter book name to search by name):");
        let input = self.console.read_line()?;

        let query = parse_book_query(&input);
        let by_name = matches!(query, BookQuery::ByName(_));

        if by_name {
            self.console.print_line("Searching books by name...");
        }

        let cmd = BorrowBook {
            subscriber_id,
            book: query,
        };

        match self.catalog.borrow_book(cmd) {
            Ok(BorrowOutcome::Borrowed(_)) => {
                self.console.print_line("Book borrowed successfully.");
            }
            Ok(BorrowOutcome::SelectionNeeded(descriptions)) => {
                for description in &descriptions {
                    self.console.print_line(description);
                }
                self.select_and_borrow(subscriber_id)?;
            }
            // ID不一致と検索空振りで文言が異なる
            Err(CatalogError::BookNotFound) => {
                if by_name {
                    self.console.print_line("This book is not found.");
                } else {
                    self.console.print_line("Book not found.");
                }
            }
            Err(err) => self.print_borrow_error(&err),
        }

        Ok(())
    }

    /// 名前検索の候補提示に続く選択と貸出確定
    fn select_and_borrow(&mut self, subscriber_id: SubscriberId) -> Result<()> {
        self.console
            .print_line("Enter the Book ID of the selected book:");
        let book_id = BookId::new(read_valid_int(self.console.as_ref())?);

        match self.catalog.borrow_selected(subscriber_id, book_id) {
            Ok(()) => self.console.print_line("Book borrowed successfully."),
            Err(CatalogError::InvalidSelection) => {
                self.console.print_line("Invalid Book ID.");
            }
            Err(err) => self.print_borrow_error(&err),
        }

        Ok(())
    }

    fn print_borrow_error(&self, err: &CatalogError) {
        match err {
            CatalogError::NoAvailableCopies => {
                self.console.print_line("No available copies of the book.");
            }
            CatalogError::SubscriberNotFound => {
                self.console.print_line("Subscriber not found.");
            }
            CatalogError::BorrowLimitExceeded => {
                self.console.print_line("Subscriber cannot borrow more books.");
            }
            other => tracing::error!("Unexpected error while borrowing: {:?}", other),
        }
    }

    fn return_book(&mut self) -> Result<()> {
        self.console.print_line("Enter Subscriber ID:");
        let subscriber_id = SubscriberId::new(read_valid_int(self.console.as_ref())?);

        if !self.catalog.has_subscriber(subscriber_id) {
            self.console.print_line("Subscriber not found.");
            return Ok(());
        }

        self.console.print_line("Enter Book ID to Return:");
        let book_id = BookId::new(read_valid_int(self.console.as_ref())?);

        let cmd = ReturnBook {
            subscriber_id,
            book_id,
        };

        match self.catalog.return_book(cmd) {
            Ok(()) => self.console.print_line("Book returned successfully."),
            Err(CatalogError::BookNotFound) => self.console.print_line("Book not found."),
            Err(CatalogError::NotBorrowedBySubscriber) => {
                self.console
                    .print_line("This subscriber did not borrow this book.");
            }
            Err(CatalogError::SubscriberNotFound) => {
                self.console.print_line("Subscriber not found.");
            }
            Err(err) => tracing::error!("Unexpected error while returning: {:?}", err),
        }

        Ok(())
    }

    // ==================== 照会 ====================

    fn show_books(&self) {
        for line in self.catalog.list_books() {
            self.console.print_line(&line);
        }
    }

    fn show_books_by_genre(&self) -> Result<()> {
        self.console.print_line("Enter genre:");
        let genre = self.console.read_line()?;

        for line in self.catalog.list_books_by_genre(&genre) {
            self.console.print_line(&line);
        }

        Ok(())
    }

    fn show_subscriber_books(&self) -> Result<()> {
        self.console.print_line("Enter Subscriber ID:");
        let subscriber_id = SubscriberId::new(read_valid_int(self.console.as_ref())?);

        match self.catalog.list_subscriber_books(subscriber_id) {
            Ok(lines) => {
                self.console.print_line("Books borrowed by this subscriber:");
                for line in lines {
                    self.console.print_line(&line);
                }
            }
            Err(CatalogError::SubscriberNotFound) => {
                self.console.print_line("Subscriber not found.");
            }
            Err(err) => tracing::error!("Unexpected error while listing: {:?}", err),
        }

        Ok(())
    }
}
