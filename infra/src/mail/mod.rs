//! Mail module - delivery of verification codes
//!
//! - `SmtpMailer`: SMTP delivery through lettre
//! - `LogMailer`: writes messages to the log instead of sending them

mod log_mailer;
mod smtp;

pub use log_mailer::LogMailer;
pub use smtp::SmtpMailer;
