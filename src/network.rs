//! Network URL constants and tracking endpoints.

/// Default cookie-generation endpoint.
pub const DEFAULT_COOKIE_URL: &str =
    "https://connect-x-back-stable.herokuapp.com/connectx/api/ip/generateCookieV2";

/// Default tracking API base URL. Endpoint paths are appended to it.
pub const DEFAULT_API_URL: &str = "https://connect-x-back-stable.herokuapp.com/connectx/api";

/// Fixed event-submission endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Generic behaviour events.
    WebTracking,
    /// Form identify ("drop form") events.
    DropForm,
    /// Ticket-open events.
    DropFormOpenTicket,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::WebTracking => "/webtracking",
            Self::DropForm => "/webtracking/dropform",
            Self::DropFormOpenTicket => "/webtracking/dropformOpenTicket",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
