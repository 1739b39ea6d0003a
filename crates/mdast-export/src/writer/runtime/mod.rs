//! Runtime helpers shared by the writer and the rewriters.

pub mod diagnostics;
