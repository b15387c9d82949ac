pub mod args;
pub mod rotate;
pub mod status;

pub use args::NotesArgs;
