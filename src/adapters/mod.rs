// Adapters layer: concrete `PersonStore` backends and the paging helper they share.

pub mod dynamodb;
pub mod memory;
pub mod pagination;
