//! AI adapter module. Implements NameClassifierPort.
//!
//! Provides the Ollama adapter, the rule-based mock adapter, and the shared reply parser.

pub mod mock_adapter;
pub mod ollama_adapter;
pub mod reply_parser;

pub use mock_adapter::{MockClassifierAdapter, mock_classify};
pub use ollama_adapter::OllamaAdapter;
pub use reply_parser::{analysis_from_reply, parse_reply};
