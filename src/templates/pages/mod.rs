pub mod home;
pub mod shoe;

pub use home::home_page;
pub use shoe::shoe_page;
