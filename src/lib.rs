// Autodocstring - keeps Python module docstrings current with an LLM
// Library exports

pub mod config;
pub mod docblock;
pub mod oracle;
pub mod refine;
pub mod runner;
