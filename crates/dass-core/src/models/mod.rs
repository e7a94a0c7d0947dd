pub mod assessment;
pub mod response;
pub mod session;
