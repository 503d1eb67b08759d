//! 关键词打分服务 - 业务能力层
//!
//! 计算单篇论文的关键词得分，并把命中的论文翻译成推送用的结果

use crate::config::TranslationSettings;
use crate::models::{Article, KeywordWeights, ScoredResult};
use crate::services::formatter::{wrap_text, ABSTRACT_WIDTH};
use crate::services::translator::Translator;
use crate::utils::truncate_text;
use anyhow::Result;
use tracing::{debug, info, warn};

/// 计算摘要的关键词得分
///
/// 关键词小写后只要是摘要小写形式的子串即算命中，不考虑词边界。
///
/// # 返回
/// 返回 (总分, 命中关键词列表)，列表顺序与权重表一致
pub fn calc_score(abstract_text: &str, keywords: &KeywordWeights) -> (f64, Vec<String>) {
    let abstract_lower = abstract_text.to_lowercase();
    let mut sum_score = 0.0;
    let mut hit_keywords = Vec::new();

    for (word, weight) in keywords.iter() {
        if abstract_lower.contains(&word.to_lowercase()) {
            sum_score += weight;
            hit_keywords.push(word.to_string());
        }
    }

    (sum_score, hit_keywords)
}

/// 对所有论文打分，翻译得分不为 0 的论文
///
/// 总分恰好为 0 的论文会被丢弃，即使有权重为 0 的关键词命中。
/// 结果按论文拉取顺序排列。
pub async fn search_keyword(
    articles: &[Article],
    keywords: &KeywordWeights,
    translator: &dyn Translator,
    translation: &TranslationSettings,
) -> Result<Vec<ScoredResult>> {
    let mut results = Vec::new();

    for (idx, article) in articles.iter().enumerate() {
        let (score, hit_keywords) = calc_score(&article.summary, keywords);
        if score == 0.0 {
            continue;
        }

        info!(
            "[论文 {}] 🎯 命中 {:?}，得分 {:?}: {}",
            idx + 1,
            hit_keywords,
            score,
            truncate_text(&article.title, 60)
        );

        let title = translator
            .translate(&article.title, &translation.from_lang, &translation.to_lang)
            .await?;
        let summary = flatten_lines(&article.summary);
        let abstract_translated = translator
            .translate(&summary, &translation.from_lang, &translation.to_lang)
            .await?;

        if title.is_empty() || abstract_translated.is_empty() {
            warn!("[论文 {}] ⚠️ 译文为空: {}", idx + 1, article.url);
        }
        debug!("[论文 {}] 译文标题: {}", idx + 1, title);

        results.push(ScoredResult {
            url: article.url.clone(),
            title,
            abstract_text: wrap_text(&abstract_translated, ABSTRACT_WIDTH).join("\n"),
            words: hit_keywords,
            score,
        });
    }

    Ok(results)
}

/// 把摘要中的换行合并成单个空格
fn flatten_lines(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
