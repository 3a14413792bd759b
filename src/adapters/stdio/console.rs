use crate::ports::console::{Console as ConsoleTrait, Result};
use std::io::{self, BufRead, Write};

/// 標準入出力によるConsole実装
///
/// 行単位で読み書きする。EOFはエラーとして返し、シェル側で
/// セッションの打ち切りとして扱われる。
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTrait for Console {
    fn print_line(&self, line: &str) {
        println!("{}", line);
    }

    fn read_line(&self) -> Result<String> {
        // プロンプト直後の読み取りに備えて掃き出す
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(Box::new(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        Ok(line)
    }
}
