use crate::domain::BookId;
use crate::domain::commands::BookQuery;
use crate::ports::console::{Console, Result};

/// 検証付きの整数入力
///
/// 1〜5桁の正の整数だけを受け付ける。桁数は入力をそのまま数え、数値の
/// 解釈では前後の空白を無視する。条件を満たすまでエラーメッセージを
/// 出して読み直す。読み取り自体の失敗（EOFなど）はそのまま呼び出し側へ
/// 返す。
///
/// # 戻り値
/// 検証を通過した整数
pub fn read_valid_int(console: &dyn Console) -> Result<u32> {
    loop {
        let input = console.read_line()?;

        if (1..=5).contains(&input.len()) {
            if let Ok(value) = input.trim().parse::<u32>() {
                if value > 0 {
                    return Ok(value);
                }
            }
        }

        console.print_line("Invalid input. Please enter a valid integer with between 1 and 5 digits.");
    }
}

/// y/n入力
///
/// 小文字化して "y" と一致すれば true。それ以外はすべて false として
/// 扱い、読み直しはしない。
pub fn read_yes_no(console: &dyn Console) -> Result<bool> {
    let answer = console.read_line()?;
    Ok(answer.to_lowercase() == "y")
}

/// 貸出対象入力の解釈
///
/// 前後の空白を除いて符号なし整数に解釈できればID指定、できなければ
/// 入力文字列そのままの名前検索として扱う。
pub fn parse_book_query(input: &str) -> BookQuery {
    match input.trim().parse::<u32>() {
        Ok(id) => BookQuery::ById(BookId::new(id)),
        Err(_) => BookQuery::ByName(input.to_string()),
    }
}
