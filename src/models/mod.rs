pub mod record;
pub mod reddit;
pub mod policy;
pub mod timestamp;

pub use record::*;
pub use policy::PolicyEvent;
