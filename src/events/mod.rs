pub mod pointer;
pub mod resize;
