mod invoice;
mod line_item;
mod party;

pub use invoice::{
    CreateInvoiceRequest, EmailReceipt, Invoice, InvoiceStatus, SendInvoiceRequest,
    SendInvoiceResponse,
};
pub use line_item::{InvoiceLineItem, LineItemDraft};
pub use party::{ClientInfo, CompanyInfo};
