//! Display-ready arrival records.

use serde::Serialize;

use super::{Direction, RouteColor};

/// Label shown instead of a minute count when a train is due now.
const ARRIVING_LABEL: &str = "ARR";

/// One upcoming train as published to the display layer.
///
/// `eta_minutes` is unsigned: trains that have already left never become an
/// `Arrival`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrival {
    /// Route identifier, e.g. "F" or "6".
    pub route: String,
    pub direction: Direction,
    /// Whole minutes until arrival.
    pub eta_minutes: u32,
    /// "ARR" when due now, otherwise "<n> MIN".
    pub display_time: String,
    pub color: RouteColor,
}

impl Arrival {
    /// Build an arrival, deriving the display string and color.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_board::domain::{Arrival, Direction, RouteColor};
    ///
    /// let due = Arrival::new("F", Direction::Northbound, 0);
    /// assert_eq!(due.display_time, "ARR");
    ///
    /// let later = Arrival::new("G", Direction::Southbound, 12);
    /// assert_eq!(later.display_time, "12 MIN");
    /// assert_eq!(later.color, RouteColor::Green);
    /// ```
    pub fn new(route: impl Into<String>, direction: Direction, eta_minutes: u32) -> Self {
        let route = route.into();
        let color = RouteColor::for_route(&route);
        Self {
            route,
            direction,
            eta_minutes,
            display_time: display_time(eta_minutes),
            color,
        }
    }

    /// Whether the train is due now.
    pub fn is_arriving(&self) -> bool {
        self.eta_minutes == 0
    }
}

fn display_time(eta_minutes: u32) -> String {
    if eta_minutes == 0 {
        ARRIVING_LABEL.to_string()
    } else {
        format!("{eta_minutes} MIN")
    }
}
