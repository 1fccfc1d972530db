//! Data models for the Vitrina platform
//!
//! Entity structs plus their `Create`/`Update` payloads. Rows come out of
//! SQLite via `sqlx::FromRow`; JSON-typed columns (variants, option groups,
//! order line snapshots) are declared with `#[sqlx(json)]` and serialized
//! at the repository boundary.

pub mod category;
pub mod delivery_zone;
pub mod order;
pub mod product;
pub mod store;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use delivery_zone::{DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate};
pub use order::{
    DeliveryMethod, Order, OrderItemLine, OrderStatus, OrderStatusUpdate, PaymentMethod,
};
pub use product::{
    OptionGroup, OptionItem, Product, ProductCreate, ProductUpdate, ProductVariant,
};
pub use store::{Coordinates, DeliveryCalculationMethod, Store, StoreCreate, StoreUpdate};
