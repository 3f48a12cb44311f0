// Service exports
pub mod directory;
pub mod osrm;
pub mod routing;

pub use directory::{DirectoryError, HospitalDirectory};
pub use osrm::OsrmClient;
pub use routing::{FallbackRouter, RouteError, RouteProvider};
