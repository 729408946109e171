pub mod dataset;
pub mod sun_data;
