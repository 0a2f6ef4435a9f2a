mod errors;
mod login;
mod logout;
mod navbar;
mod types;

pub use errors::LoginError;
pub use login::submit_login;
pub use logout::{sign_out, sign_out_hard};
pub use navbar::{auth_button, press_auth_button};
pub use types::{AuthButtonState, Navigation};
