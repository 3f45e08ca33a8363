// Invoices module

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{ClientInfo, CompanyInfo, Invoice, InvoiceLineItem, InvoiceStatus};
pub use services::InvoiceService;
