pub mod notification;
pub mod payfast;
pub mod reservation;

mod router;
pub use router::get_router;
