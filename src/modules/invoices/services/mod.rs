pub mod invoice_assembler;
pub mod invoice_service;
pub mod mailer;
pub mod renderer;
pub mod validation;

pub use invoice_assembler::{generate_invoice_number, InvoiceAssembler, PAYMENT_TERM_DAYS};
pub use invoice_service::InvoiceService;
pub use mailer::{InvoiceMailer, OutgoingEmail, SimulatedMailer};
