mod club;
pub use club::ClubPage;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod submit;
pub use submit::Submit;
