pub mod media;
pub mod menu;
pub mod order;

mod router;
pub use router::get_router;
