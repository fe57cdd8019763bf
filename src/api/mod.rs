//! API route modules
//!
//! - [`orders`] - orders CRUD under /ecommerce/v1/orders
//! - [`products`] - products listing under /ecommerce/v1/products
//! - [`status`] - service status probe
//! - [`seed`] - dev-mode database seeding

pub mod orders;
pub mod products;
pub mod seed;
pub mod status;
