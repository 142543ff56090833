pub mod pulling;
pub mod sampler;
