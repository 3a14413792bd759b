use rusty_catalog::adapters::mock::{
    BookStore as MockBookStore, SubscriberStore as MockSubscriberStore,
};
use rusty_catalog::application::catalog::Catalog;
use std::sync::Arc;

/// 空のモックストアからカタログを初期化する
///
/// ストアも返すので、呼び出し側で仕込みや失敗注入、保存件数の確認が
/// できる。
pub async fn catalog_with_mocks() -> (Catalog, Arc<MockBookStore>, Arc<MockSubscriberStore>) {
    let book_store = Arc::new(MockBookStore::new());
    let subscriber_store = Arc::new(MockSubscriberStore::new());

    let catalog = Catalog::load(book_store.clone(), subscriber_store.clone())
        .await
        .expect("catalog should load from empty mock stores");

    (catalog, book_store, subscriber_store)
}
