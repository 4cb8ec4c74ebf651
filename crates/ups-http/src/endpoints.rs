//! Carrier endpoint tables

use std::fmt;

/// The three operations the carrier exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Track,
    ShipConfirm,
    ShipAccept,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Track => "track",
            Operation::ShipConfirm => "ship_confirm",
            Operation::ShipAccept => "ship_accept",
        }
    }

    /// The path segment under `/ups.app/xml/` for this operation
    pub fn path(self) -> &'static str {
        match self {
            Operation::Track => "Track",
            Operation::ShipConfirm => "ShipConfirm",
            Operation::ShipAccept => "ShipAccept",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One URL per operation, injected into the transport at construction.
///
/// The two carrier-hosted tables are fixed; [`Endpoints::with_base`] exists
/// so tests can point the real transport at a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub track: String,
    pub ship_confirm: String,
    pub ship_accept: String,
}

impl Endpoints {
    pub fn production() -> Self {
        Self::with_base("https://onlinetools.ups.com")
    }

    pub fn testing() -> Self {
        Self::with_base("https://wwwcie.ups.com")
    }

    /// Build a table rooted at an arbitrary host
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            track: format!("{base}/ups.app/xml/{}", Operation::Track.path()),
            ship_confirm: format!("{base}/ups.app/xml/{}", Operation::ShipConfirm.path()),
            ship_accept: format!("{base}/ups.app/xml/{}", Operation::ShipAccept.path()),
        }
    }

    pub fn url(&self, operation: Operation) -> &str {
        match operation {
            Operation::Track => &self.track,
            Operation::ShipConfirm => &self.ship_confirm,
            Operation::ShipAccept => &self.ship_accept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_urls() {
        let endpoints = Endpoints::production();
        assert_eq!(
            endpoints.url(Operation::Track),
            "https://onlinetools.ups.com/ups.app/xml/Track"
        );
        assert_eq!(
            endpoints.url(Operation::ShipConfirm),
            "https://onlinetools.ups.com/ups.app/xml/ShipConfirm"
        );
        assert_eq!(
            endpoints.url(Operation::ShipAccept),
            "https://onlinetools.ups.com/ups.app/xml/ShipAccept"
        );
    }

    #[test]
    fn testing_urls() {
        let endpoints = Endpoints::testing();
        assert_eq!(
            endpoints.url(Operation::Track),
            "https://wwwcie.ups.com/ups.app/xml/Track"
        );
        assert_eq!(
            endpoints.url(Operation::ShipAccept),
            "https://wwwcie.ups.com/ups.app/xml/ShipAccept"
        );
    }

    #[test]
    fn with_base_strips_trailing_slash() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:9999/");
        assert_eq!(
            endpoints.url(Operation::ShipConfirm),
            "http://127.0.0.1:9999/ups.app/xml/ShipConfirm"
        );
    }
}
