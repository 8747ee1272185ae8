//! Service class catalog.
//!
//! A service class is a named, fixed-duration service category. The
//! catalog is fixed at compile time; classes are never created or
//! destroyed at runtime.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A fixed-duration service category.
///
/// Durations are whole minutes, the crate's time unit throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceClass {
    /// Quick exterior service (15 min).
    Express,
    /// Standard full service (30 min).
    Standard,
    /// Extended service with finishing (45 min).
    Extended,
    /// Complete premium treatment (60 min).
    Premium,
}

impl ServiceClass {
    /// The full catalog, in menu order.
    pub const ALL: [ServiceClass; 4] = [
        ServiceClass::Express,
        ServiceClass::Standard,
        ServiceClass::Extended,
        ServiceClass::Premium,
    ];

    /// Service duration in minutes.
    pub fn duration_min(self) -> i64 {
        match self {
            ServiceClass::Express => 15,
            ServiceClass::Standard => 30,
            ServiceClass::Extended => 45,
            ServiceClass::Premium => 60,
        }
    }

    /// Human-readable description.
    pub fn label(self) -> &'static str {
        match self {
            ServiceClass::Express => "Express Wash",
            ServiceClass::Standard => "Standard Wash",
            ServiceClass::Extended => "Extended Wash",
            ServiceClass::Premium => "Premium Detail",
        }
    }

    /// Parses a catalog code (case-insensitive).
    ///
    /// Codes outside the catalog are an error, never defaulted.
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code.to_ascii_lowercase().as_str() {
            "express" => Ok(ServiceClass::Express),
            "standard" => Ok(ServiceClass::Standard),
            "extended" => Ok(ServiceClass::Extended),
            "premium" => Ok(ServiceClass::Premium),
            _ => Err(Error::UnknownServiceClass(code.to_string())),
        }
    }
}

impl TryFrom<&str> for ServiceClass {
    type Error = Error;

    fn try_from(code: &str) -> Result<Self, Error> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_durations() {
        assert_eq!(ServiceClass::Express.duration_min(), 15);
        assert_eq!(ServiceClass::Standard.duration_min(), 30);
        assert_eq!(ServiceClass::Extended.duration_min(), 45);
        assert_eq!(ServiceClass::Premium.duration_min(), 60);
    }

    #[test]
    fn test_catalog_order() {
        let durations: Vec<i64> = ServiceClass::ALL.iter().map(|c| c.duration_min()).collect();
        assert_eq!(durations, vec![15, 30, 45, 60]);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ServiceClass::from_code("express"), Ok(ServiceClass::Express));
        assert_eq!(ServiceClass::from_code("PREMIUM"), Ok(ServiceClass::Premium));
        assert_eq!(
            ServiceClass::from_code("mega"),
            Err(Error::UnknownServiceClass("mega".into()))
        );
    }

    #[test]
    fn test_try_from() {
        let c: ServiceClass = "standard".try_into().unwrap();
        assert_eq!(c, ServiceClass::Standard);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(ServiceClass::Express.to_string(), "Express Wash");
    }
}
