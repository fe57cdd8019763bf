//! Persisted data models

pub mod order;

pub use order::{
    Order, OrderCreate, OrderSave, OrderStatus, OrderUpdate, OrderUpdateInput, Product,
    ProductInput,
};
