pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleListFilter, ArticleUpdate, AuthoredArticle, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, FavoriteRepository};
pub use value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, TagList,
};
