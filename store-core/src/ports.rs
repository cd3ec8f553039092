mod application;
mod product;

pub use application::Application;
pub use product::{ProductFailure, ProductRepository};

/// The base trait every repository extends.
///
/// `Error` is reserved for infrastructure failures (a lost connection, a
/// corrupt row). Expected domain outcomes are reported separately, see
/// [`ProductFailure`].
pub trait Repository {
    /// The infrastructure error type
    type Error: std::error::Error + Send + Sync + 'static;
}
