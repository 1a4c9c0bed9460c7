pub mod loader;
pub mod schema;

pub use loader::{DataLoadError, load_kitchen, load_shop};
