mod args;

// re-export the public interface
pub use args::{RemoveArgs, RemoveArgsBuilder, Strategy, Validation};
