pub mod user;

pub use user::PostgresUserGateway;
