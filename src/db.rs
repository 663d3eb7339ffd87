pub mod pix;
pub mod prod_db;
