pub mod application;
pub mod conversion;
pub mod set;
pub mod status;

pub use application::*;
pub use conversion::*;
pub use set::*;
pub use status::*;
