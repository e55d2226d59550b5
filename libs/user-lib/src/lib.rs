pub mod entities;
pub mod repository;
pub mod util;
pub mod user_service;
pub mod errors_service;

pub use entities::*;
pub use user_service::*;
pub use errors_service::*;
