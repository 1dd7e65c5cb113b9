//! Client-side pipeline behind the finance hub dashboard: a read cache of
//! the backend collections, the statistics derived from it, chart scenes and
//! the simulated investment ticker. Nothing in this crate touches the DOM.

pub mod aggregation;
pub mod animation;
pub mod api;
pub mod chart;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod messages;
pub mod storage;
pub mod store;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{Collection, Endpoint, FinanceApi};
pub use clock::{Clock, FixedClock, SystemClock, YearMonth};
pub use config::DashboardConfig;
pub use controller::{DashboardController, Notification, NotificationLevel, PageView};
pub use error::{DashboardError, Field, ValidationError};
pub use format::Locale;
pub use messages::Text;
pub use store::{DataStore, Snapshot};
