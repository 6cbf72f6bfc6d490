//! Default value functions for serde deserialization.

pub fn enabled() -> bool {
    true
}

pub fn block_chance() -> f64 {
    0.25
}
