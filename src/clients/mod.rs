pub mod arxiv_client;
pub mod deepl_client;
pub mod line_client;
pub mod slack_client;

pub use arxiv_client::ArxivClient;
pub use deepl_client::DeeplClient;
pub use line_client::LineClient;
pub use slack_client::SlackClient;
