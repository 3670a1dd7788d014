pub mod contact;
pub mod html;
pub mod page;
pub mod publish;
pub mod radar;
pub mod sections;

pub use crate::domain::model::{ContactMessage, PortfolioContent, SkillRatings};
pub use crate::domain::ports::{MessageSink, Storage};
pub use crate::utils::error::Result;
