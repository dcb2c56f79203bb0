//! Domain types shared across the workspace.

pub mod baseline;
pub mod key;
pub mod method;
pub mod observation;
pub mod record;

pub use baseline::BaselineStat;
pub use key::BaselineKey;
pub use method::OutlierMethod;
pub use observation::Observation;
pub use record::Record;
