// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod config;
pub mod objective;
pub mod series;
pub(crate) mod common;
pub(crate) mod signs; 

// algorithms 
pub mod relaxation;
pub mod newton;
pub mod secant;
pub mod bisection;
pub mod false_position;

pub use algorithms::Algorithm;
pub use config::IterationCfg;
pub use objective::{unary, Objective};
pub use report::{Stencil, Termination, Trace};

pub use relaxation::relaxation;
pub use newton::newton;
pub use secant::secant;
pub use bisection::bisection;
pub use false_position::false_position;
