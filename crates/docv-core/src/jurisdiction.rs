//! # Jurisdiction Catalog
//!
//! Jurisdiction choices for checks that discriminate by place of
//! incorporation. The catalog is ordered the way selection UIs present it:
//! the "Any Jurisdiction" sentinel first, then US states alphabetically.
//!
//! A jurisdiction with an empty `state` means "do not constrain by
//! jurisdiction" — the request builder omits `address_of_operation` for it.

/// A jurisdiction choice: display label plus the state/country codes sent
/// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jurisdiction {
    /// Display label (e.g. "Delaware").
    pub label: &'static str,
    /// State code (e.g. "DE"); empty for the any-jurisdiction sentinel.
    pub state: &'static str,
    /// ISO 3166-1 alpha-2 country code; empty for the sentinel.
    pub country: &'static str,
}

impl Jurisdiction {
    /// Whether this is the unconstrained sentinel entry.
    pub fn is_any(&self) -> bool {
        self.state.is_empty()
    }
}

/// The unconstrained sentinel: no jurisdiction filter is applied.
pub const ANY_JURISDICTION: Jurisdiction = Jurisdiction {
    label: "Any Jurisdiction",
    state: "",
    country: "",
};

macro_rules! us_state {
    ($label:literal, $code:literal) => {
        Jurisdiction {
            label: $label,
            state: $code,
            country: "US",
        }
    };
}

/// US jurisdictions accepted by incorporation-document checks.
pub const US_JURISDICTIONS: &[Jurisdiction] = &[
    ANY_JURISDICTION,
    us_state!("Alabama", "AL"),
    us_state!("Alaska", "AK"),
    us_state!("Arizona", "AZ"),
    us_state!("Arkansas", "AR"),
    us_state!("California", "CA"),
    us_state!("Colorado", "CO"),
    us_state!("Connecticut", "CT"),
    us_state!("Delaware", "DE"),
    us_state!("Florida", "FL"),
    us_state!("Georgia", "GA"),
    us_state!("Hawaii", "HI"),
    us_state!("Idaho", "ID"),
    us_state!("Illinois", "IL"),
    us_state!("Indiana", "IN"),
    us_state!("Iowa", "IA"),
    us_state!("Kansas", "KS"),
    us_state!("Kentucky", "KY"),
    us_state!("Louisiana", "LA"),
    us_state!("Maine", "ME"),
    us_state!("Maryland", "MD"),
    us_state!("Massachusetts", "MA"),
    us_state!("Michigan", "MI"),
    us_state!("Minnesota", "MN"),
    us_state!("Mississippi", "MS"),
    us_state!("Missouri", "MO"),
    us_state!("Montana", "MT"),
    us_state!("Nebraska", "NE"),
    us_state!("Nevada", "NV"),
    us_state!("New Hampshire", "NH"),
    us_state!("New Jersey", "NJ"),
    us_state!("New Mexico", "NM"),
    us_state!("New York", "NY"),
    us_state!("North Carolina", "NC"),
    us_state!("North Dakota", "ND"),
    us_state!("Ohio", "OH"),
    us_state!("Oklahoma", "OK"),
    us_state!("Oregon", "OR"),
    us_state!("Pennsylvania", "PA"),
    us_state!("Puerto Rico", "PR"),
    us_state!("Rhode Island", "RI"),
    us_state!("South Carolina", "SC"),
    us_state!("South Dakota", "SD"),
    us_state!("Tennessee", "TN"),
    us_state!("Texas", "TX"),
    us_state!("Utah", "UT"),
    us_state!("Vermont", "VT"),
    us_state!("Virginia", "VA"),
    us_state!("Washington", "WA"),
    us_state!("West Virginia", "WV"),
    us_state!("Wisconsin", "WI"),
    us_state!("Wyoming", "WY"),
];
