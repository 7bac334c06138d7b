pub mod landing;
pub mod results;
pub mod selecting;

pub use landing::Landing;
pub use results::Results;
pub use selecting::Selecting;
