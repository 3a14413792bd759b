#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// コンソールポート
///
/// 対話セッションの入出力を抽象化する。テストではスクリプト実装に
/// 差し替えられる。
pub trait Console: Send + Sync {
    /// 1行出力する
    fn print_line(&self, line: &str);

    /// 1行読み込む
    ///
    /// 末尾の改行は取り除いて返す。入力が尽きた場合（EOF）はエラー。
    fn read_line(&self) -> Result<String>;
}
