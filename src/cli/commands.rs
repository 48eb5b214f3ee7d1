pub mod predict;
pub mod schema;
pub mod serve;

pub use predict::{PredictArgs, predict};
pub use schema::print_schema;
pub use serve::serve;
