pub mod api;
pub mod file;
pub mod traits;

pub use api::ApiSource;
pub use file::FileSource;
pub use traits::ListingSource;
