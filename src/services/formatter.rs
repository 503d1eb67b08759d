//! 排序与排版服务 - 业务能力层
//!
//! 把打分结果按得分排序，并渲染成推送用的纯文本

use crate::models::ScoredResult;
use chrono::NaiveDate;

/// 摘要每行的最大字符数
pub const ABSTRACT_WIDTH: usize = 40;
/// 分隔横幅的长度
pub const BANNER_WIDTH: usize = 120;
const BANNER_MARK: char = '*';

/// 按得分从高到低排序
///
/// 稳定排序：得分相同的结果保持拉取顺序。
pub fn rank(mut results: Vec<ScoredResult>) -> Vec<ScoredResult> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

/// 把文本按宽度折行
///
/// 在空白处断行，超长的词按宽度硬切。断行处的空白被丢弃，其余字符原样保留。
/// 宽度按字符数计算。
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = split_chunks(text);
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();

    while !chunks.is_empty() {
        let mut current: Vec<String> = Vec::new();
        let mut current_len = 0;

        // 非首行丢弃行首空白
        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            let len = chunk.chars().count();
            if current_len + len > width {
                break;
            }
            current_len += len;
            current.extend(chunks.pop());
        }

        // 超长的词直接按剩余宽度切开
        if let Some(chunk) = chunks.pop() {
            if chunk.chars().count() > width {
                let space_left = width - current_len;
                let head: String = chunk.chars().take(space_left).collect();
                let tail: String = chunk.chars().skip(space_left).collect();
                current.push(head);
                chunks.push(tail);
            } else {
                chunks.push(chunk);
            }
        }

        if current.last().is_some_and(|c| is_blank(c)) {
            current.pop();
        }

        let line = current.concat();
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// 切分成连续的空白段和非空白段，空白统一替换成空格
fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut last_blank: Option<bool> = None;

    for ch in text.chars() {
        let blank = ch.is_whitespace();
        let ch = if blank { ' ' } else { ch };
        match chunks.last_mut() {
            Some(chunk) if last_blank == Some(blank) => chunk.push(ch),
            _ => chunks.push(ch.to_string()),
        }
        last_blank = Some(blank);
    }

    chunks
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(char::is_whitespace)
}

/// 分隔线
pub fn separator() -> String {
    BANNER_MARK.to_string().repeat(BANNER_WIDTH)
}

/// 推送开头的日期横幅
pub fn banner(date: NaiveDate) -> String {
    let line = separator();
    format!("{line}\n \t \t {date}\n{line}")
}

/// 渲染单条结果
pub fn render_result(result: &ScoredResult) -> String {
    format!(
        "\n score: `{:?}`\n hit keywords: `{}`\n url: {}\n title:    {}\n abstract:\n \t {}\n {}\n",
        result.score,
        format_keywords(&result.words),
        result.url,
        result.title,
        result.abstract_text,
        separator()
    )
}

/// 渲染整批推送消息：日期横幅在前，之后按得分从高到低每条结果一条消息
pub fn render_batch(date: NaiveDate, results: Vec<ScoredResult>) -> Vec<String> {
    std::iter::once(banner(date))
        .chain(rank(results).iter().map(render_result))
        .collect()
}

fn format_keywords(words: &[String]) -> String {
    let quoted: Vec<String> = words.iter().map(|w| format!("'{}'", w)).collect();
    format!("[{}]", quoted.join(", "))
}
