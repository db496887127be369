pub mod articles;

pub use articles::{ArticleDto, ArticleListDto, ArticleListMetaDto, PaginationMetaDto};
