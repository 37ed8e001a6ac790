// Adapters layer: concrete renderers for the computed report.

pub mod render;
