pub mod auth;
pub mod users;

pub use self::users::service::UserService;
