// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod page_header;

// Simple primitive wrappers
pub mod progress;
pub mod separator;
pub mod switch;

// Compound primitive wrappers
pub mod tabs;

// Overlay/popup wrappers
pub mod dialog;
pub mod dropdown_menu;

// Navigation & special
pub mod avatar;
pub mod navbar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use progress::*;
pub use separator::*;
pub use switch::*;
pub use tabs::*;
