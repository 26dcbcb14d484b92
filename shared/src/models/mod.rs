//! Domain models for the agricultural advisory platform

mod chat;
mod crop;
mod market;
mod profitability;
mod recommendation;
mod weather;

pub use chat::*;
pub use crop::*;
pub use market::*;
pub use profitability::*;
pub use recommendation::*;
pub use weather::*;
