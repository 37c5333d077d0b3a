pub mod estimate_dish;
pub mod estimate_image;
