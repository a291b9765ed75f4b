pub mod builder;
pub mod color;
pub mod shape;

pub use builder::{CardBuilder, CardConfig, CardPayload, Layout, TextTemplates};
pub use color::{Accent, Classification};
pub use shape::ShapesDocument;
