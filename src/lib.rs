pub mod compute;
pub mod display;
pub mod entities;
pub mod frame;
