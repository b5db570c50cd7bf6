//! Request and response bodies used by API handlers.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
