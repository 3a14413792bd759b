#[allow(unused_imports)]
pub mod book_store;
#[allow(unused_imports)]
pub mod console;
#[allow(unused_imports)]
pub mod subscriber_store;

#[allow(unused_imports)]
pub use book_store::*;
#[allow(unused_imports)]
pub use console::*;
#[allow(unused_imports)]
pub use subscriber_store::*;
