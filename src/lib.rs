pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{gemini::GeminiClient, sheets::SheetsCatalogSource};
pub use config::CliConfig;
pub use core::{cache::CatalogCache, engine::ChatEngine};
pub use domain::model::{FilterCriteria, Package, SelectionKey, Selections};
pub use domain::ports::SystemClock;
pub use utils::error::{Result, TourError};
