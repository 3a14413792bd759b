pub mod console;

// パブリックに型を再エクスポート
pub use console::Console as StdioConsole;
