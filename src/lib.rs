pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, LogSink, MemorySink, WebhookSink};
pub use config::SiteConfig;
pub use crate::core::{
    contact::{ContactForm, ContactService, Notification},
    page::{Document, PageRenderer},
    publish::publish_static,
    radar::RadarChart,
    sections::LinkMode,
};
pub use domain::model::PortfolioContent;
pub use server::{create_router, AppState};
pub use utils::error::{PortfolioError, Result};
