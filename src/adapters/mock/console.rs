use crate::ports::console::{Console as ConsoleTrait, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// テスト用のスクリプト駆動Console実装
///
/// あらかじめ与えた入力行を順番に返し、出力行をすべて記録する。
/// 入力が尽きた後のread_lineはEOF相当のエラーになる。
#[allow(dead_code)]
pub struct ScriptedConsole {
    inputs: Mutex<VecDeque<String>>,
    outputs: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: Mutex::new(inputs.iter().map(|line| line.to_string()).collect()),
            outputs: Mutex::new(Vec::new()),
        }
    }

    /// これまでに出力された行を取得する
    pub fn output(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }

    /// 指定の行が出力されたかどうか
    pub fn printed(&self, line: &str) -> bool {
        self.outputs.lock().unwrap().iter().any(|out| out == line)
    }
}

impl ConsoleTrait for ScriptedConsole {
    fn print_line(&self, line: &str) {
        self.outputs.lock().unwrap().push(line.to_string());
    }

    fn read_line(&self) -> Result<String> {
        self.inputs.lock().unwrap().pop_front().ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "script exhausted",
            )) as Box<dyn std::error::Error + Send + Sync>
        })
    }
}
