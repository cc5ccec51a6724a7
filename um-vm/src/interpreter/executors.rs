//! The dispatch loop (`main`) and the per-instruction semantics it drives
//! (`instruction`), split the way the teacher splits its own executors.

mod instruction;
mod main;
