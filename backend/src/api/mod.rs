//! IR API endpoints and module exports.

mod meta;
pub use meta::get_meta;

mod kap;
pub use kap::{list_kap_notifications, sync_kap_notifications};

mod kpi;
pub use kpi::list_kpis;

mod portfolio;
pub use portfolio::list_portfolio;

mod assistant;
pub use assistant::ask_assistant;
