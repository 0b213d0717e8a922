pub mod assistant;
pub mod cache;
pub mod demo;
pub mod engine;
pub mod flow;
pub mod mapper;
pub mod recommend;

pub use crate::domain::model::{FilterCriteria, Package, Selections};
pub use crate::domain::ports::{AnswerGenerator, CatalogSource, Clock, ConfigProvider};
pub use crate::utils::error::Result;
