pub mod fields;
pub mod payment;
pub mod routes;
pub mod signature;
