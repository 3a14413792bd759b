pub mod prompts;
pub mod shell;

pub use shell::Shell;
