//! Facility domain models.
//!
//! Core data types for the service facility, composed bottom-up:
//! [`ServiceClass`] is consumed by [`Unit`], which is held by
//! [`Station`] while in service.
//!
//! # Domain Mappings
//!
//! | stationq | Car Wash | Drive-through | Inspection Lane |
//! |----------|----------|---------------|-----------------|
//! | Unit | Car | Order | Vehicle |
//! | Station | Wash Bay | Pickup Window | Lane |
//! | ServiceClass | Wash Package | Menu Combo | Test Tier |

mod service_class;
mod station;
mod unit;

pub use service_class::ServiceClass;
pub use station::Station;
pub use unit::Unit;
