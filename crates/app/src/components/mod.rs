pub mod auth_panel;
pub mod cctv_grid;
pub mod city_map;
pub mod metrics_dashboard;

pub use auth_panel::AuthPanel;
pub use cctv_grid::CctvGrid;
pub use city_map::CityMap;
pub use metrics_dashboard::MetricsDashboard;
