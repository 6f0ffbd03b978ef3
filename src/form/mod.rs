pub mod controller;
pub mod error;
pub mod input;

pub use controller::FormController;
pub use error::{ErrorCategory, ValidationError};
pub use input::{Field, FormInput};
