mod command;
mod memory;
mod product;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::memory::MemoryProductRepository;
pub use self::product::ProductRepository;
pub use self::query::ProductQueryRepository;
