pub mod drivers;
mod wizard;

pub use wizard::run_wizard;
