//! Display formatting collaborators.
//!
//! These functions turn the calculator's integer minor-unit figures and the
//! payroll metadata into the strings the document layer renders: money with
//! thousands grouping, the two supported pay-date styles, the generated-at
//! timestamp, and the download filename.

mod dates;
mod filename;
mod money;

pub use dates::{format_pay_date, format_timestamp};
pub use filename::payslip_filename;
pub use money::format_money;
