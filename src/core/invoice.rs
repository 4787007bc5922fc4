//! Plain-text invoice export.

use crate::entities::{Booking, BookingStatus};
use chrono::NaiveDate;

const RULE: &str = "------------------------------------------------";

/// A rendered invoice ready to be delivered as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    /// Download name, `Invoice_<bookingId>_<date>.txt`
    pub file_name: String,
    /// Document body
    pub content: String,
}

/// Whether an invoice can be downloaded for `booking`. Only confirmed
/// bookings are billable.
#[must_use]
pub fn is_invoiceable(booking: &Booking) -> bool {
    booking.status == BookingStatus::Confirmed
}

/// Renders the invoice for `booking` at `venue_name`, issued on `issued_on`.
#[must_use]
pub fn render_invoice(booking: &Booking, venue_name: &str, issued_on: NaiveDate) -> Invoice {
    let content = format!(
        "VENUE MASTER AI - TAX INVOICE\n\
         {RULE}\n\
         Invoice ID: INV-{invoice_id}\n\
         Date: {issued}\n\
         Status: {status}\n\
         \n\
         BILL TO:\n\
         {customer}\n\
         \n\
         DETAILS:\n\
         Venue: {venue_name}\n\
         Event Date: {event_date}\n\
         Duration: {hours} Hours\n\
         Rate/Hr: Calculated based on venue rates\n\
         \n\
         {RULE}\n\
         TOTAL AMOUNT: ₹{total}\n\
         {RULE}\n\
         \n\
         Thank you for booking with VenueMaster AI!\n",
        invoice_id = booking.id.to_uppercase(),
        issued = issued_on.format("%Y-%m-%d"),
        status = booking.status.as_str().to_uppercase(),
        customer = booking.customer_name,
        event_date = booking.date.format("%Y-%m-%d"),
        hours = booking.duration_hours,
        total = booking.total_price,
    );

    Invoice {
        file_name: format!(
            "Invoice_{}_{}.txt",
            booking.id,
            booking.date.format("%Y-%m-%d")
        ),
        content,
    }
}
