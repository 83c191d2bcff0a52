mod cache;
mod category;
mod config;
mod list;
mod search;
mod show;

pub use self::cache::cache;
pub use self::category::{categories, category};
pub use self::config::config;
pub use self::list::list;
pub use self::search::search;
pub use self::show::show;
