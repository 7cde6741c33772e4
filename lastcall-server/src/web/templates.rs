//! Askama templates for the web frontend.

use askama::Template;
use chrono::{DateTime, Local};

use crate::domain::Route;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Destination list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub origin: String,
    pub destinations: Vec<DestinationLink>,
}

/// Leave-now options toward one destination.
#[derive(Template)]
#[template(path = "options.html")]
pub struct OptionsTemplate {
    pub origin: String,
    pub destination: String,
    pub generated_at: String,
    pub options: Vec<RouteView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A link to one destination's options page.
#[derive(Debug, Clone)]
pub struct DestinationLink {
    pub name: String,
    pub href: String,
}

/// A leave-now option as shown on the page.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub depart: String,
    pub arrive: String,
    pub leave_in_mins: i64,
    pub travel_mins: i64,
}

impl RouteView {
    /// Create from a domain Route, relative to `now`.
    pub fn from_route(route: &Route, now: DateTime<Local>) -> Self {
        Self {
            depart: route.depart.format("%H:%M").to_string(),
            arrive: route.arrive.format("%H:%M").to_string(),
            leave_in_mins: route.leave_in(now).num_minutes(),
            travel_mins: route.duration().num_minutes(),
        }
    }

    /// Human countdown, e.g. "in 7 min".
    pub fn leave_label(&self) -> String {
        match self.leave_in_mins {
            m if m < 0 => "gone".to_string(),
            0 => "now".to_string(),
            m => format!("in {m} min"),
        }
    }

    /// Whether the user has to leave within five minutes.
    pub fn is_urgent(&self) -> bool {
        (0..5).contains(&self.leave_in_mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2015, 10, 5, hour, min, 0).unwrap()
    }

    fn view(leave_in_mins: i64) -> RouteView {
        RouteView {
            depart: "09:37".into(),
            arrive: "10:05".into(),
            leave_in_mins,
            travel_mins: 28,
        }
    }

    #[test]
    fn route_view_from_route() {
        let view = RouteView::from_route(&Route::new(at(9, 37), at(10, 5)), at(9, 30));

        assert_eq!(view.depart, "09:37");
        assert_eq!(view.arrive, "10:05");
        assert_eq!(view.leave_in_mins, 7);
        assert_eq!(view.travel_mins, 28);
    }

    #[test]
    fn leave_labels() {
        assert_eq!(view(7).leave_label(), "in 7 min");
        assert_eq!(view(0).leave_label(), "now");
        assert_eq!(view(-2).leave_label(), "gone");
    }

    #[test]
    fn urgency() {
        assert!(view(0).is_urgent());
        assert!(view(4).is_urgent());
        assert!(!view(5).is_urgent());
        assert!(!view(-1).is_urgent());
    }

    #[test]
    fn options_page_lists_routes() {
        let page = OptionsTemplate {
            origin: "Amsterdam Centraal".into(),
            destination: "Utrecht Centraal".into(),
            generated_at: "09:30".into(),
            options: vec![view(7)],
        };

        let html = page.render().unwrap();

        assert!(html.contains("Utrecht Centraal"));
        assert!(html.contains("09:37"));
        assert!(html.contains("in 7 min"));
        assert!(!html.contains("No transit!"));
    }

    #[test]
    fn options_page_without_routes() {
        let page = OptionsTemplate {
            origin: "Amsterdam Centraal".into(),
            destination: "Utrecht Centraal".into(),
            generated_at: "23:30".into(),
            options: vec![],
        };

        assert!(page.render().unwrap().contains("No transit!"));
    }

    #[test]
    fn index_links_destinations() {
        let page = IndexTemplate {
            origin: "Amsterdam Centraal".into(),
            destinations: vec![DestinationLink {
                name: "Den Haag HS".into(),
                href: "/custom/Den%20Haag%20HS".into(),
            }],
        };

        let html = page.render().unwrap();

        assert!(html.contains("href=\"/custom/Den%20Haag%20HS\""));
        assert!(html.contains("Den Haag HS"));
    }

    #[test]
    fn error_page_shows_details() {
        let page = ErrorTemplate {
            title: "Bad Gateway".into(),
            message: "Directions are unavailable".into(),
            details: Some("rate limited".into()),
        };

        let html = page.render().unwrap();

        assert!(html.contains("Bad Gateway"));
        assert!(html.contains("rate limited"));
    }
}
