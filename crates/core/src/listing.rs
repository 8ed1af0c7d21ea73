//! Session listing policy: visibility filters and sort orders.
//!
//! The enums deserialize straight from the listing endpoint's query string;
//! the db layer renders them into SQL. [`ShowFilter::matches`] is the
//! reference predicate the SQL must agree with.

use chrono::{Days, NaiveDate};
use serde::Deserialize;

/// Which slice of the schedule a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowFilter {
    /// Every session whose run has not yet finished.
    #[default]
    All,
    /// Sessions with a showing on the current date.
    Today,
    /// Sessions with a showing on the following date.
    Tomorrow,
}

impl ShowFilter {
    /// The date the window comparison pivots on: today, or the next day
    /// for [`ShowFilter::Tomorrow`].
    pub fn pivot(self, today: NaiveDate) -> NaiveDate {
        match self {
            ShowFilter::All | ShowFilter::Today => today,
            ShowFilter::Tomorrow => today + Days::new(1),
        }
    }

    /// Whether a show window is visible under this filter.
    ///
    /// `All` keeps runs that end after today; `Today` and `Tomorrow` keep
    /// runs that have begun by their pivot date and end after it.
    pub fn matches(self, show_start: NaiveDate, show_end: NaiveDate, today: NaiveDate) -> bool {
        let pivot = self.pivot(today);
        match self {
            ShowFilter::All => show_end > pivot,
            ShowFilter::Today | ShowFilter::Tomorrow => show_start <= pivot && show_end > pivot,
        }
    }
}

/// Row order for the sessions listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSort {
    /// Soonest run first, then title.
    #[default]
    Default,
    /// Earliest daily start time first.
    Start,
    /// Cheapest ticket first.
    PriceAsc,
    /// Most expensive ticket first.
    PriceDesc,
}

impl SessionSort {
    /// Fixed ORDER BY fragment for the listing query.
    pub fn order_by(self) -> &'static str {
        match self {
            SessionSort::Default => "show_start_date ASC, title ASC",
            SessionSort::Start => "start_time ASC",
            SessionSort::PriceAsc => "ticket_price ASC",
            SessionSort::PriceDesc => "ticket_price DESC",
        }
    }
}
