//! Core data models for the payslip engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod company;
mod employee;
mod payroll;
mod payslip;

pub use calculation_result::{
    CalculationResult, DeductionLine, EarningLine, PayslipCalculated, ValidationError,
    ValidationErrorKind,
};
pub use company::Company;
pub use employee::Employee;
pub use payroll::{
    DateFormatStyle, DeductionComponent, DeductionMode, EarningComponent, PayrollConfig,
};
pub use payslip::{PayslipPayload, PayslipRecord};
