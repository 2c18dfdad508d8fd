//! Pagination and response helpers used by the handlers.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginationParams};
pub use response::{Created, MessageResponse, NoContent};
