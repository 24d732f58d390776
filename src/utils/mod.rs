pub mod html;
pub mod http;
pub mod name;
