pub mod book_store;
pub mod console;
pub mod subscriber_store;

#[allow(unused_imports)]
pub use book_store::BookStore;
#[allow(unused_imports)]
pub use console::ScriptedConsole;
#[allow(unused_imports)]
pub use subscriber_store::SubscriberStore;
