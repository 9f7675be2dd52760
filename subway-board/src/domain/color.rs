//! Route color classification.
//!
//! Colors are a function of the route letter only. The table is static; one
//! color covers several routes that share a trunk line.

use serde::Serialize;

/// Display color class for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteColor {
    Green,
    Orange,
    Blue,
    Red,
    Purple,
    Yellow,
    Gray,
    Brown,
}

impl RouteColor {
    /// Classify a route. Matching is case-insensitive; unknown routes are
    /// [`RouteColor::Gray`].
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_board::domain::RouteColor;
    ///
    /// assert_eq!(RouteColor::for_route("G"), RouteColor::Green);
    /// assert_eq!(RouteColor::for_route("f"), RouteColor::Orange);
    /// assert_eq!(RouteColor::for_route("X"), RouteColor::Gray);
    /// ```
    pub fn for_route(route: &str) -> Self {
        match route.to_uppercase().as_str() {
            "G" => RouteColor::Green,
            "F" | "D" | "B" | "M" => RouteColor::Orange,
            "A" | "C" | "E" => RouteColor::Blue,
            "1" | "2" | "3" => RouteColor::Red,
            "4" | "5" | "6" => RouteColor::Green,
            "7" => RouteColor::Purple,
            "N" | "Q" | "R" | "W" => RouteColor::Yellow,
            "L" => RouteColor::Gray,
            "J" | "Z" => RouteColor::Brown,
            _ => RouteColor::Gray,
        }
    }
}
