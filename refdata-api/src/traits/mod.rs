pub mod product;
pub mod record;
