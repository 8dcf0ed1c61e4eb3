pub mod middleware;
pub mod password;
pub mod session;

pub use middleware::MaybeUser;
pub use password::{hash_password, verify_password};
pub use session::{generate_session_token, session_expires_at};
