mod assembler;
mod get_by_slug;
mod list;
mod service;
mod tags;

pub use assembler::{ArticleViewAssembler, ViewerState};
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
