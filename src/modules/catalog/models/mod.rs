mod service_offering;

pub use service_offering::{ServiceCategory, ServiceGroup, ServiceOffering};
