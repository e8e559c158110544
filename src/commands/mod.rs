pub mod refs;
pub mod schemas;
pub mod serve;
pub mod validate;

pub use refs::execute_refs;
pub use schemas::execute_schemas;
pub use serve::execute_serve;
pub use validate::execute_validate;
