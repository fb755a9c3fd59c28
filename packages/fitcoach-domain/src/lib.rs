pub mod profile;
pub mod prompt;
pub mod routing;
