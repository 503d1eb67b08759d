pub mod formatter;
pub mod notifier;
pub mod scoring;
pub mod translator;

pub use formatter::{rank, render_batch, wrap_text};
pub use notifier::{Notifier, StdoutNotifier};
pub use scoring::{calc_score, search_keyword};
pub use translator::{PassthroughTranslator, Translator};
