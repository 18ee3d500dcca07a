mod reading_store;

pub use reading_store::IReadingStore;
