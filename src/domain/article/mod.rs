pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticlePage, PaginationMeta};
pub use repository::ArticleSource;
pub use value_objects::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest};
