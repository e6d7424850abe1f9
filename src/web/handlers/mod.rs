pub mod jd_handlers;
pub mod reference_handlers;
pub mod system_handlers;

pub use jd_handlers::*;
pub use reference_handlers::*;
pub use system_handlers::*;
