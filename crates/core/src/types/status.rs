//! Status and selector enums for the storefront domain.

use serde::{Deserialize, Serialize};

/// Roast profile of a coffee product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoastLevel {
    Light,
    Medium,
    Dark,
}

impl RoastLevel {
    /// All roast levels, in menu order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Dark];
}

impl std::fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Medium => write!(f, "Medium"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for RoastLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Light" | "light" => Ok(Self::Light),
            "Medium" | "medium" => Ok(Self::Medium),
            "Dark" | "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid roast level: {s}")),
        }
    }
}

/// Packaging size for a bag of beans.
///
/// Together with the product ID this determines cart line-item identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BagSize {
    /// 250g bag.
    #[default]
    #[serde(rename = "250g")]
    G250,
    /// 500g bag.
    #[serde(rename = "500g")]
    G500,
    /// 1kg bag.
    #[serde(rename = "1kg")]
    Kg1,
}

impl BagSize {
    /// All bag sizes, in menu order.
    pub const ALL: [Self; 3] = [Self::G250, Self::G500, Self::Kg1];
}

impl std::fmt::Display for BagSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::G250 => write!(f, "250g"),
            Self::G500 => write!(f, "500g"),
            Self::Kg1 => write!(f, "1kg"),
        }
    }
}

impl std::str::FromStr for BagSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "250g" => Ok(Self::G250),
            "500g" => Ok(Self::G500),
            "1kg" => Ok(Self::Kg1),
            _ => Err(format!("invalid bag size: {s}. Valid sizes: 250g, 500g, 1kg")),
        }
    }
}

/// Lifecycle status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" | "pending" => Ok(Self::Pending),
            "Shipped" | "shipped" => Ok(Self::Shipped),
            "Delivered" | "delivered" => Ok(Self::Delivered),
            "Cancelled" | "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Which view of the demo the session presents.
///
/// Not persisted; every new session starts as `Customer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
