pub mod quant;
pub mod scan;
pub mod unique;
