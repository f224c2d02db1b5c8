mod ast_loader;
mod load_error;

pub use ast_loader::load;
pub use ast_loader::load_with_fragments;
pub use load_error::LoadError;
