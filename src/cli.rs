pub mod command;
mod run;

pub use run::run_app;
