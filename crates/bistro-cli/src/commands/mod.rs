//! Command implementations.

pub mod ingest;
pub mod list;
pub mod run;

pub use self::ingest::{execute_customers, execute_orders};
pub use self::list::execute_list;
pub use self::run::execute_run;
