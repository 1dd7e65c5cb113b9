pub mod chart_canvas;
pub mod fields;
pub mod notification;
pub mod pages;
pub mod sidebar;
pub mod stat_card;

pub use chart_canvas::{ChartCanvas, ChartData};
pub use notification::NotificationBanner;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
