pub mod article;
pub mod keywords;
pub mod loaders;

pub use article::{Article, ScoredResult};
pub use keywords::KeywordWeights;
pub use loaders::{load_settings, Settings};
