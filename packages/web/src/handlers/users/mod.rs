mod account;
mod login;
mod logout;
mod register;

pub use account::{account, account_edit, account_edit_form};
pub use login::login;
pub use logout::logout;
pub use register::register;
