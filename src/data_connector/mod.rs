// Data connector module for inquiry persistence backends
pub mod factory;
pub mod inquiries;
pub mod inquiry_memory_store;
pub mod inquiry_postgres_store;

pub use factory::create_inquiry_storage;
pub use inquiries::{
    Inquiry, InquiryStorage, InquiryStorageError, NewInquiry, Result as InquiryResult,
    SharedInquiryStorage,
};
pub use inquiry_memory_store::MemoryInquiryStorage;
pub use inquiry_postgres_store::PostgresInquiryStorage;
