pub mod error;
pub mod model;

pub use error::SeirAhdError;
pub use model::seir_ahd::{evaluate, SeirAhdModel, SeirAhdParams, SeirAhdState};
