pub mod access;
pub mod camera;
pub mod config;
pub mod error;
pub mod metrics;
pub mod mock;
pub mod report;
pub mod session;

pub use access::*;
pub use camera::*;
pub use config::*;
pub use error::*;
pub use metrics::*;
pub use report::*;
pub use session::*;
