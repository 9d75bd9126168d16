pub mod ceil_div;
pub mod floor_div;
pub mod safe_math;
