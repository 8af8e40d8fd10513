mod change_password;
mod login;
mod logout;
mod media;
mod refresh;
mod register;
mod service;
mod tokens;
mod update;

pub use change_password::ChangePasswordCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use media::UpdateMediaCommand;
pub use refresh::RefreshSessionCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateAccountCommand;
