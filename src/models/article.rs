use chrono::{DateTime, Utc};

/// 从 arXiv 拉取到的论文条目
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// 论文摘要页地址
    pub url: String,
    pub title: String,
    /// 原始摘要
    pub summary: String,
    pub published: Option<DateTime<Utc>>,
}

/// 命中关键词后的打分结果
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub url: String,
    /// 翻译后的标题
    pub title: String,
    /// 翻译并按宽度换行后的摘要
    pub abstract_text: String,
    /// 命中的关键词，按权重表顺序
    pub words: Vec<String>,
    pub score: f64,
}
