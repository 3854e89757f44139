pub mod pipeline;
pub mod resize;
pub mod transparency;
pub mod trim;
