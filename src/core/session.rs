//! Per-user application state and navigation.
//!
//! [`Session`] is the single owner of everything a user's front end would
//! otherwise keep in scattered component state: the current view, the
//! login flow, the selected venue, the visible calendar month and the open
//! booking panel. Each user action is a method that mutates the session and
//! returns a [`Notice`] for the front end to show.

use crate::{
    core::{
        auth::{LoginError, LoginFlow},
        booking::StatusFilter,
        calendar::{MonthStep, YearMonth},
        enquiry::EnquiryForm,
        placement::{PanelEvent, PanelState, PopoverSize},
    },
    entities::VenueCategory,
};
use chrono::NaiveDate;
use std::fmt;
use tracing::info;

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page
    #[default]
    Dashboard,
    /// Month calendar of the user's bookings
    Calendar,
    /// Bookings table
    MyBookings,
    /// Enquiry / help form
    Enquiry,
    /// Details of the selected venue
    VenueDetails,
    /// Venue list of one category
    Category(VenueCategory),
}

impl View {
    /// Routing identifier (`"dashboard"`, `"my-bookings"`, `"pool"`, ...).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Calendar => "calendar",
            Self::MyBookings => "my-bookings",
            Self::Enquiry => "enquiry",
            Self::VenueDetails => "venue-details",
            Self::Category(category) => category.id(),
        }
    }

    /// Parses a routing identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim() {
            "dashboard" => Some(Self::Dashboard),
            "calendar" => Some(Self::Calendar),
            "my-bookings" => Some(Self::MyBookings),
            "enquiry" => Some(Self::Enquiry),
            "venue-details" => Some(Self::VenueDetails),
            other => VenueCategory::from_id(other).map(Self::Category),
        }
    }

    /// Whether the view needs a signed-in user.
    #[must_use]
    pub const fn requires_login(self) -> bool {
        matches!(self, Self::Calendar | Self::MyBookings)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A navigation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Target view
    pub view: View,
    /// Menu label
    pub label: &'static str,
}

/// The full navigation menu in display order.
pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem {
        view: View::Dashboard,
        label: "Dashboard",
    },
    NavItem {
        view: View::Calendar,
        label: "Calendar",
    },
    NavItem {
        view: View::MyBookings,
        label: "My Bookings",
    },
    NavItem {
        view: View::Category(VenueCategory::Indoor),
        label: "Indoor Grounds",
    },
    NavItem {
        view: View::Category(VenueCategory::Outdoor),
        label: "Outdoor Grounds",
    },
    NavItem {
        view: View::Category(VenueCategory::Hall),
        label: "Banquet Halls",
    },
    NavItem {
        view: View::Category(VenueCategory::Pool),
        label: "Swimming Pools",
    },
    NavItem {
        view: View::Category(VenueCategory::Classroom),
        label: "Classrooms",
    },
    NavItem {
        view: View::Enquiry,
        label: "Enquiry / Help",
    },
];

/// Something the user tried to do before signing in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Book the venue with this id
    Book(String),
    /// Open a protected view
    Open(View),
}

/// Feedback for the front end after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Success toast
    Success(String),
    /// The login form must be shown
    LoginRequired,
    /// Inline validation message of the login form
    LoginFailed(LoginError),
    /// Nothing to report
    None,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self::Success(message.to_string())
    }
}

/// Application state for one user.
#[derive(Debug, Clone)]
pub struct Session {
    view: View,
    identity: Option<String>,
    selected_venue: Option<String>,
    login: LoginFlow,
    login_open: bool,
    pending: Option<PendingAction>,
    calendar_month: YearMonth,
    panel: PanelState,
    status_filter: StatusFilter,
    enquiry: EnquiryForm,
}

impl Session {
    /// A signed-out session on the dashboard, calendar showing `today`'s month.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: View::Dashboard,
            identity: None,
            selected_venue: None,
            login: LoginFlow::default(),
            login_open: false,
            pending: None,
            calendar_month: YearMonth::from_date(today),
            panel: PanelState::Closed,
            status_filter: StatusFilter::All,
            enquiry: EnquiryForm::default(),
        }
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Signed-in customer name.
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Venue chosen for the details view.
    #[must_use]
    pub fn selected_venue(&self) -> Option<&str> {
        self.selected_venue.as_deref()
    }

    /// Whether the login form is showing.
    #[must_use]
    pub const fn is_login_open(&self) -> bool {
        self.login_open
    }

    /// Action waiting for a successful login.
    #[must_use]
    pub const fn pending_action(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Month shown by the calendar.
    #[must_use]
    pub const fn calendar_month(&self) -> YearMonth {
        self.calendar_month
    }

    /// Booking-detail panel.
    #[must_use]
    pub const fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Status filter of the bookings list.
    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Login form.
    pub fn login_flow(&mut self) -> &mut LoginFlow {
        &mut self.login
    }

    /// Enquiry form.
    pub fn enquiry_mut(&mut self) -> &mut EnquiryForm {
        &mut self.enquiry
    }

    /// Menu entries visible to this user.
    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        NAV_ITEMS
            .into_iter()
            .filter(|item| self.is_authenticated() || !item.view.requires_login())
            .collect()
    }

    /// Switches view. Protected views open the login form instead and are
    /// remembered until the user signs in.
    pub fn navigate(&mut self, view: View) -> Notice {
        if view.requires_login() && !self.is_authenticated() {
            self.pending = Some(PendingAction::Open(view));
            self.open_login();
            return Notice::LoginRequired;
        }
        self.panel = PanelState::Closed;
        self.view = view;
        Notice::None
    }

    /// Selects a venue and shows its details.
    pub fn view_venue(&mut self, venue_id: &str) {
        self.selected_venue = Some(venue_id.to_string());
        self.view = View::VenueDetails;
    }

    /// "Book Now" on the selected venue.
    pub fn book_selected(&mut self) -> Notice {
        if self.is_authenticated() {
            return Notice::success("Booking confirmed! (Dummy action)");
        }
        if let Some(venue_id) = self.selected_venue.clone() {
            self.pending = Some(PendingAction::Book(venue_id));
        }
        self.open_login();
        Notice::LoginRequired
    }

    /// Shows the login form.
    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    /// Dismisses the login form without signing in.
    pub fn close_login(&mut self) {
        self.login_open = false;
        self.login.reset();
    }

    /// Submits a mobile number to the login form.
    pub fn request_otp(&mut self, mobile: &str) -> Notice {
        self.open_login();
        match self.login.send_otp(mobile) {
            Ok(()) => Notice::None,
            Err(error) => Notice::LoginFailed(error),
        }
    }

    /// Submits the one-time code. On success the user is signed in as
    /// `identity` and any pending action is resumed.
    pub fn verify_otp(&mut self, otp: &str, expected: &str, identity: &str) -> Notice {
        if let Err(error) = self.login.verify(otp, expected) {
            return Notice::LoginFailed(error);
        }
        self.identity = Some(identity.to_string());
        self.login_open = false;
        info!("Session signed in as {identity}");

        match self.pending.take() {
            Some(PendingAction::Book(venue_id)) => {
                self.selected_venue = Some(venue_id);
                self.view = View::VenueDetails;
                Notice::success("Logged in successfully! You can now proceed with booking.")
            }
            Some(PendingAction::Open(view)) => {
                self.view = view;
                Notice::success("Successfully logged in!")
            }
            None => Notice::success("Successfully logged in!"),
        }
    }

    /// Signs out and returns to the dashboard.
    pub fn logout(&mut self) -> Notice {
        if let Some(identity) = self.identity.take() {
            info!("Session for {identity} signed out");
        }
        self.pending = None;
        self.panel = PanelState::Closed;
        self.view = View::Dashboard;
        Notice::success("Logged out successfully")
    }

    /// Moves the calendar.
    pub fn step_calendar(&mut self, step: MonthStep, today: NaiveDate) -> YearMonth {
        self.calendar_month = self.calendar_month.step(step, today);
        self.panel = PanelState::Closed;
        self.calendar_month
    }

    /// Feeds a pointer/viewport event to the booking panel.
    pub fn panel_event(&mut self, event: PanelEvent, size: PopoverSize) -> &PanelState {
        let current = std::mem::take(&mut self.panel);
        self.panel = current.apply(event, size);
        &self.panel
    }

    /// Opens the detail panel as a full-width sheet, for front ends without
    /// trigger geometry.
    pub fn show_booking(&mut self, booking_id: &str) -> &PanelState {
        self.panel = PanelState::OpenCompact {
            booking_id: booking_id.to_string(),
        };
        &self.panel
    }

    /// Changes the bookings list filter.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::auth::LoginStep;
    use crate::core::placement::{Rect, Viewport};
    use crate::entities::BookingStatus;
    use crate::test_utils::*;

    const CODE: &str = "1234";

    fn signed_in() -> Session {
        let mut session = Session::new(test_today());
        session.request_otp("9876543210");
        session.verify_otp(CODE, CODE, "Pavan");
        session
    }

    #[test]
    fn test_view_ids_round_trip() {
        for item in NAV_ITEMS {
            assert_eq!(View::from_id(item.view.id()), Some(item.view));
        }
        assert_eq!(View::from_id("venue-details"), Some(View::VenueDetails));
        assert_eq!(View::from_id("settings"), None);
    }

    #[test]
    fn test_guest_menu_hides_protected_views() {
        let session = Session::new(test_today());
        let views: Vec<View> = session.nav_items().iter().map(|i| i.view).collect();
        assert_eq!(views.len(), 7);
        assert!(!views.contains(&View::Calendar));
        assert!(!views.contains(&View::MyBookings));

        assert_eq!(signed_in().nav_items().len(), 9);
    }

    #[test]
    fn test_protected_view_requires_login_then_resumes() {
        let mut session = Session::new(test_today());

        assert_eq!(session.navigate(View::Calendar), Notice::LoginRequired);
        assert_eq!(session.view(), View::Dashboard);
        assert!(session.is_login_open());

        session.request_otp("9876543210");
        let notice = session.verify_otp(CODE, CODE, "Pavan");

        assert_eq!(notice, Notice::Success("Successfully logged in!".to_string()));
        assert_eq!(session.view(), View::Calendar);
        assert!(!session.is_login_open());
        assert_eq!(session.identity(), Some("Pavan"));
    }

    #[test]
    fn test_booking_while_signed_out_resumes_on_details() {
        let mut session = Session::new(test_today());
        session.view_venue("v4");
        session.navigate(View::Dashboard);

        assert_eq!(session.book_selected(), Notice::LoginRequired);
        assert_eq!(
            session.pending_action(),
            Some(&PendingAction::Book("v4".to_string()))
        );

        session.request_otp("9876543210");
        let notice = session.verify_otp(CODE, CODE, "Pavan");

        assert_eq!(
            notice,
            Notice::Success(
                "Logged in successfully! You can now proceed with booking.".to_string()
            )
        );
        assert_eq!(session.view(), View::VenueDetails);
        assert_eq!(session.selected_venue(), Some("v4"));
        assert!(session.pending_action().is_none());
    }

    #[test]
    fn test_booking_while_signed_in() {
        let mut session = signed_in();
        session.view_venue("v1");
        assert_eq!(
            session.book_selected(),
            Notice::Success("Booking confirmed! (Dummy action)".to_string())
        );
    }

    #[test]
    fn test_failed_otp_keeps_user_signed_out() {
        let mut session = Session::new(test_today());
        assert_eq!(
            session.request_otp("123"),
            Notice::LoginFailed(LoginError::InvalidMobile)
        );
        session.request_otp("9876543210");
        assert_eq!(
            session.verify_otp("99", CODE, "Pavan"),
            Notice::LoginFailed(LoginError::MalformedOtp)
        );
        assert!(!session.is_authenticated());
        assert!(session.is_login_open());
    }

    #[test]
    fn test_close_login_resets_flow() {
        let mut session = Session::new(test_today());
        session.request_otp("9876543210");
        assert!(matches!(
            session.login_flow().step(),
            LoginStep::EnterOtp { .. }
        ));

        session.close_login();

        assert!(!session.is_login_open());
        assert_eq!(session.login_flow().step(), &LoginStep::EnterMobile);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_returns_to_dashboard() {
        let mut session = signed_in();
        session.navigate(View::MyBookings);

        let notice = session.logout();

        assert_eq!(notice, Notice::Success("Logged out successfully".to_string()));
        assert_eq!(session.view(), View::Dashboard);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_calendar_navigation_closes_panel() {
        let today = test_today();
        let mut session = signed_in();
        let desktop = Viewport {
            width: 1280.0,
            height: 800.0,
        };
        let pill = Rect {
            top: 200.0,
            left: 200.0,
            width: 100.0,
            height: 20.0,
        };

        session.panel_event(
            PanelEvent::TriggerClicked {
                booking_id: "b3".to_string(),
                trigger: pill,
                viewport: desktop,
            },
            PopoverSize::default(),
        );
        assert_eq!(session.panel().booking_id(), Some("b3"));

        let month = session.step_calendar(MonthStep::Next, today);

        assert_eq!(month, YearMonth::new(2024, 4).unwrap());
        assert!(!session.panel().is_open());
    }

    #[test]
    fn test_show_booking_opens_compact_sheet() {
        let mut session = signed_in();
        let panel = session.show_booking("b7").clone();
        assert_eq!(
            panel,
            PanelState::OpenCompact {
                booking_id: "b7".to_string()
            }
        );
        session.navigate(View::Dashboard);
        assert!(!session.panel().is_open());
    }

    #[test]
    fn test_status_filter_is_remembered() {
        let mut session = signed_in();
        session.set_status_filter(StatusFilter::Only(BookingStatus::Pending));
        assert_eq!(
            session.status_filter(),
            StatusFilter::Only(BookingStatus::Pending)
        );
    }
}
