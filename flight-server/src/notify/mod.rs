//! Itinerary notification: report rendering and the email sink.

mod mailer;
mod report;

pub use mailer::{HttpMailer, MailerConfig, MailerError};
pub use report::{FlightView, ItineraryEmail, render_report};
