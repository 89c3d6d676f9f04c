pub mod question;
pub mod quiz;
pub mod user;

pub use question::Question;
pub use quiz::Quiz;
pub use user::User;
