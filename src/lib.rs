// Thai Government Lottery result extraction and ticket checking
pub mod assembler;
pub mod config;
pub mod database;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod matcher;
pub mod parser;
pub mod pipeline;
pub mod reports;
pub mod service;
pub mod types;
pub mod utils;
pub mod validation;

pub use error::{LottoError, Result};
pub use fetcher::{DocumentSource, FileDocumentSource, SanookFetcher};
pub use matcher::{build_report, check_number};
pub use pipeline::{Extraction, extract_draw};
pub use service::{LotteryService, SyncOutcome};
pub use types::*;
