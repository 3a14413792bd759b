pub mod book_store;
pub mod subscriber_store;

// パブリックに型を再エクスポート
pub use book_store::BookStore as PostgresBookStore;
pub use subscriber_store::SubscriberStore as PostgresSubscriberStore;
