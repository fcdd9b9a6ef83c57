//! Mock order tracking.
//!
//! The original demo built the tracking payload as an untyped ad hoc record;
//! here the shape is fixed and statically checked. Lookups always succeed
//! with the same Nairobi-export journey regardless of the order number.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use kenyan_beans_core::OrderId;

use crate::checkout::DEMO_ORDER_NUMBER;

/// Where the shipment is in its journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    Processing,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::InTransit => write!(f, "In Transit"),
            Self::OutForDelivery => write!(f, "Out for Delivery"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}

/// One entry in the shipment timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingStep {
    pub status: String,
    pub location: String,
    pub time: NaiveDateTime,
    pub completed: bool,
}

/// Everything the track-order view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingInfo {
    pub order_id: OrderId,
    pub status: ShipmentStatus,
    pub estimated_delivery: NaiveDate,
    pub current_location: String,
    /// Timeline in chronological order; completed steps come first.
    pub history: Vec<TrackingStep>,
}

impl TrackingInfo {
    /// Number of completed timeline steps.
    #[must_use]
    pub fn completed_steps(&self) -> usize {
        self.history.iter().filter(|step| step.completed).count()
    }
}

// The seeded dates are known-valid; a fallback of the epoch keeps the
// constructors infallible without unwrapping.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn step(status: &str, location: &str, time: NaiveDateTime, completed: bool) -> TrackingStep {
    TrackingStep {
        status: status.to_owned(),
        location: location.to_owned(),
        time,
        completed,
    }
}

/// Look up tracking for an order number.
///
/// Every order resolves to the same mock journey; a blank query falls back
/// to the demo confirmation number so the view always has something to show.
#[must_use]
pub fn track(order_id: &str) -> TrackingInfo {
    let order_id = if order_id.trim().is_empty() {
        OrderId::new(DEMO_ORDER_NUMBER)
    } else {
        OrderId::new(order_id.trim())
    };

    TrackingInfo {
        order_id,
        status: ShipmentStatus::InTransit,
        estimated_delivery: date(2026, 2, 25),
        current_location: "Nairobi International Airport (NBO)".to_owned(),
        history: vec![
            step(
                "Package picked up",
                "Nyeri Processing Station",
                datetime(2026, 2, 20, 9, 15),
                true,
            ),
            step(
                "Arrived at Export Hub",
                "Nairobi, KE",
                datetime(2026, 2, 20, 14, 30),
                true,
            ),
            step(
                "Cleared Customs",
                "Nairobi, KE",
                datetime(2026, 2, 20, 17, 45),
                true,
            ),
            step(
                "In Transit to Destination",
                "Nairobi Airport",
                datetime(2026, 2, 21, 1, 20),
                false,
            ),
        ],
    }
}
