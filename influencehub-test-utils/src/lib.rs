pub mod builder;
pub mod error;
pub mod factory;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestError, TestSetup};
}
