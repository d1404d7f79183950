//! Domain models for the Cartwright API.

pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{Cart, CartItem, CartSnapshot, CheckoutSummary, LineItem};
pub use order::Order;
pub use product::Product;
pub use session::{CurrentUser, keys as session_keys};
pub use user::User;
