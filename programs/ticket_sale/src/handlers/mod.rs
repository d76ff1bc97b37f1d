pub mod sale_query;
pub mod sale_registry;
pub mod sale_resale;
pub mod sale_swap;
pub mod sale_ticket;
pub(crate) mod settlement;

pub use sale_query::*;
pub use sale_registry::*;
pub use sale_resale::*;
pub use sale_swap::*;
pub use sale_ticket::*;
