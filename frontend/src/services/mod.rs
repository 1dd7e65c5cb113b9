pub mod api;
pub mod config;
pub mod logging;
pub mod storage;

pub use api::GlooApi;
pub use logging::Logger;
pub use storage::LocalPageStorage;
