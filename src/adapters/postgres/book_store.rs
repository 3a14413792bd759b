use crate::domain::book::Book;
use crate::domain::value_objects::BookId;
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
///
/// INT列はi32で返るため、book_idとavailable_copiesのu32への変換で
/// エラーハンドリングを行う。
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    let book_id_i32: i32 = row.get("book_id");
    let book_id: u32 = book_id_i32.try_into().map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("book_id out of range: {}", book_id_i32),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    let copies_i32: i32 = row.get("available_copies");
    let available_copies: u32 = copies_i32.try_into().map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("available_copies out of range: {}", copies_i32),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Book::new(
        BookId::new(book_id),
        row.get("name"),
        row.get("writer"),
        row.get("genre"),
        available_copies,
        row.get("loanable"),
    ))
}

/// BookStoreのPostgreSQL実装
///
/// 書籍1件を1行に対応させる。在庫数は登録時の値のみを保持し、
/// 貸出・返却による増減は書き戻さない。
pub struct BookStore {
    pool: PgPool,
}

impl BookStore {
    /// PostgreSQLコネクションプールから新しいBookStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    /// booksテーブルを作成する
    ///
    /// CREATE TABLE IF NOT EXISTSを使用して冪等性を保証する。
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                book_id INT PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                writer VARCHAR(100) NOT NULL,
                genre VARCHAR(50) NOT NULL,
                available_copies INT NOT NULL,
                loanable BOOLEAN NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 全書籍をID昇順で読み込む
    async fn load_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT book_id, name, writer, genre, available_copies, loanable
            FROM books
            ORDER BY book_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_book).collect()
    }

    /// 書籍を1件INSERTする
    ///
    /// 重複IDはPRIMARY KEY制約違反のエラーになる（呼び出し側が事前に
    /// 検査するため通常は到達しない）。
    async fn insert(&self, book: &Book) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO books (book_id, name, writer, genre, available_copies, loanable)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(book.id().value() as i32)
        .bind(book.name())
        .bind(book.writer())
        .bind(book.genre())
        .bind(book.available_copies() as i32)
        .bind(book.is_loanable())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
