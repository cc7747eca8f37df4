mod home;
mod quiz;

pub use home::HomeView;
pub use quiz::QuizView;
