pub mod compose;
pub mod directory;
pub mod extension;
pub mod normalizer;
pub mod syntax;
