/// arXiv API 客户端
///
/// 按提交日期窗口检索论文，解析 Atom 响应
use crate::config::ArxivSettings;
use crate::error::{ApiError, AppError};
use crate::models::Article;
use anyhow::Result;
use chrono::NaiveDate;
use feed_rs::parser;
use tracing::{debug, info};

/// arXiv 客户端
pub struct ArxivClient {
    http: reqwest::Client,
    api_url: String,
    max_results: usize,
}

impl ArxivClient {
    /// 创建新的 arXiv 客户端
    pub fn new(http: reqwest::Client, settings: &ArxivSettings) -> Self {
        Self {
            http,
            api_url: settings.api_url.clone(),
            max_results: settings.max_results,
        }
    }

    /// 检索指定日期提交的论文
    ///
    /// # 参数
    /// - `subject`: 检索条件，例如 `cat:cs.CV`
    /// - `date`: 提交日期
    pub async fn fetch_submitted_on(&self, subject: &str, date: NaiveDate) -> Result<Vec<Article>> {
        let query = build_query(subject, date);
        info!("📡 正在检索 arXiv: {}", query);

        let max_results = self.max_results.to_string();
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("search_query", query.as_str()),
                ("start", "0"),
                ("max_results", max_results.as_str()),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
            ])
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&self.api_url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api_bad_status(&self.api_url, status.as_u16()).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(&self.api_url, e))?;
        debug!("arXiv 响应长度: {} 字节", body.len());

        parse_atom(&self.api_url, &body)
    }
}

/// 某一天的提交时间窗口 `[YYYYMMDD000000, YYYYMMDD235959]`
pub fn submitted_window(date: NaiveDate) -> (String, String) {
    let day = date.format("%Y%m%d").to_string();
    (format!("{}000000", day), format!("{}235959", day))
}

/// 构建检索语句
pub fn build_query(subject: &str, date: NaiveDate) -> String {
    let (from, to) = submitted_window(date);
    format!("{} AND submittedDate:[{} TO {}]", subject, from, to)
}

/// 解析 arXiv 返回的 Atom 文本
pub fn parse_atom(endpoint: &str, body: &str) -> Result<Vec<Article>> {
    let feed = parser::parse(body.as_bytes()).map_err(|e| {
        AppError::Api(ApiError::ParseFailed {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    })?;

    let mut articles = Vec::with_capacity(feed.entries.len());
    for entry in feed.entries {
        let summary = entry
            .summary
            .map(|t| t.content.trim().to_string())
            .unwrap_or_default();

        // 检索语句非法时 arXiv 返回一条 id 指向 api/errors 的条目
        if entry.id.contains("/api/errors") {
            return Err(AppError::Api(ApiError::ParseFailed {
                endpoint: endpoint.to_string(),
                message: summary,
            })
            .into());
        }

        let url = entry
            .links
            .iter()
            .find(|link| link.rel.as_deref() == Some("alternate"))
            .map(|link| link.href.clone())
            .unwrap_or_else(|| entry.id.clone());

        let title = entry
            .title
            .map(|t| normalize_whitespace(&t.content))
            .unwrap_or_default();

        articles.push(Article {
            url,
            title,
            summary,
            published: entry.published,
        });
    }

    Ok(articles)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
