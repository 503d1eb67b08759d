use anyhow::Result;
use arxiv_notify::cli::Cli;
use arxiv_notify::models::Settings;
use arxiv_notify::orchestrator::run_digest;
use arxiv_notify::{Article, Config, Notifier, Translator};
use async_trait::async_trait;
use clap::Parser;
use std::sync::{Arc, Mutex};

const CONFIG: &str = r#"
subject = "cat:cs.CV"

[keywords]
diffusion = 2.0
transformer = 1.5
baseline = 0.0
"#;

/// 把文字转成大写，模拟翻译
struct UppercaseTranslator;

#[async_trait]
impl Translator for UppercaseTranslator {
    async fn translate(&self, text: &str, _from_lang: &str, _to_lang: &str) -> Result<String> {
        Ok(text.to_uppercase())
    }
}

/// 翻译页面一直没有结果
struct SilentTranslator;

#[async_trait]
impl Translator for SilentTranslator {
    async fn translate(&self, _text: &str, _from_lang: &str, _to_lang: &str) -> Result<String> {
        Ok(String::new())
    }
}

#[derive(Clone, Default)]
struct MemoryNotifier {
    name: &'static str,
    sent: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Notifier for MemoryNotifier {
    fn name(&self) -> &str {
        self.name
    }

    async fn notify(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    fn name(&self) -> &str {
        "broken"
    }

    async fn notify(&self, _text: &str) -> Result<()> {
        anyhow::bail!("webhook unreachable")
    }
}

fn config() -> Config {
    let settings = Settings::from_toml_str(CONFIG).unwrap();
    let cli = Cli::parse_from(["arxiv_notify", "--date", "2024-03-01"]);
    Config::from_sources(settings, &cli, |_| None)
}

fn article(id: &str, title: &str, summary: &str) -> Article {
    Article {
        url: format!("http://arxiv.org/abs/{}", id),
        title: title.to_string(),
        summary: summary.to_string(),
        published: None,
    }
}

fn articles() -> Vec<Article> {
    vec![
        article("2403.00001", "Only Diffusion", "A diffusion approach."),
        article("2403.00002", "Unrelated", "Graph coloring on planar graphs."),
        article(
            "2403.00003",
            "Both",
            "A Diffusion Transformer Model that beats every baseline.",
        ),
        article("2403.00004", "Zero Weight", "A simple baseline."),
    ]
}

#[tokio::test]
async fn test_digest_ranks_and_notifies_every_channel() {
    let slack = MemoryNotifier {
        name: "slack",
        ..Default::default()
    };
    let line = MemoryNotifier {
        name: "line",
        ..Default::default()
    };
    let notifiers: Vec<Box<dyn Notifier>> = vec![Box::new(slack.clone()), Box::new(line.clone())];

    let report = run_digest(&articles(), &config(), &UppercaseTranslator, &notifiers)
        .await
        .unwrap();

    assert_eq!(report.fetched, 4);
    assert_eq!(report.matched, 2);
    assert_eq!(report.channels, vec!["slack", "line"]);

    let sent = slack.sent.lock().unwrap().clone();
    assert_eq!(sent, *line.sent.lock().unwrap());
    assert_eq!(sent.len(), 3);

    assert!(sent[0].contains("2024-03-01"));
    assert!(sent[0].starts_with(&"*".repeat(120)));

    assert!(sent[1].contains("score: `3.5`"));
    assert!(sent[1].contains("hit keywords: `['diffusion', 'transformer', 'baseline']`"));
    assert!(sent[1].contains("url: http://arxiv.org/abs/2403.00003"));
    assert!(sent[1].contains("title:    BOTH"));

    assert!(sent[2].contains("score: `2.0`"));
    assert!(sent[2].contains("title:    ONLY DIFFUSION"));
}

#[tokio::test]
async fn test_digest_without_notifiers_still_renders() {
    let report = run_digest(&articles(), &config(), &UppercaseTranslator, &[])
        .await
        .unwrap();
    assert!(report.channels.is_empty());
    assert_eq!(report.messages.len(), 3);
}

#[tokio::test]
async fn test_digest_with_no_matches_sends_banner_only() {
    let notifier = MemoryNotifier {
        name: "slack",
        ..Default::default()
    };
    let notifiers: Vec<Box<dyn Notifier>> = vec![Box::new(notifier.clone())];
    let unrelated = vec![article("1", "Unrelated", "Graph coloring.")];

    let report = run_digest(&unrelated, &config(), &UppercaseTranslator, &notifiers)
        .await
        .unwrap();

    assert_eq!(report.matched, 0);
    assert_eq!(notifier.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_translation_is_not_an_error() {
    let report = run_digest(&articles(), &config(), &SilentTranslator, &[])
        .await
        .unwrap();
    assert_eq!(report.matched, 2);
    assert!(report.messages[1].contains("title:    \n"));
}

#[test]
fn test_notifier_failure_stops_run() {
    let notifiers: Vec<Box<dyn Notifier>> = vec![Box::new(FailingNotifier)];
    let result = tokio_test::block_on(run_digest(
        &articles(),
        &config(),
        &UppercaseTranslator,
        &notifiers,
    ));
    assert!(result.unwrap_err().to_string().contains("webhook unreachable"));
}

#[tokio::test]
#[ignore] // 需要网络和本机 Chrome：cargo test -- --ignored
async fn test_full_run_dry() {
    let settings = Settings::from_toml_str(CONFIG).unwrap();
    let cli = Cli::parse_from(["arxiv_notify", "--dry-run", "--no-translate"]);
    let config = Config::from_sources(settings, &cli, |_| None);

    let report = arxiv_notify::App::initialize(config)
        .unwrap()
        .run()
        .await
        .unwrap();
    assert_eq!(report.channels, vec!["stdout"]);
}
