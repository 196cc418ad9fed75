pub mod company;
pub mod id;
pub mod movie;
