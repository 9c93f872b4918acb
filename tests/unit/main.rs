//! Unit tests mirroring the `src/` module tree

mod engine;
mod io;
