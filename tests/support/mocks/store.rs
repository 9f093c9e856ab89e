// tests/support/mocks/store.rs
//! すべてのリポジトリトレイトを実装するインメモリストア
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use conduit_core::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, AuthoredArticle, FavoriteRepository, NewArticle,
};
use conduit_core::domain::errors::{DomainError, DomainResult};
use conduit_core::domain::profile::{FollowEdge, FollowRepository};
use conduit_core::domain::user::{Email, NewUser, User, UserId, UserRepository, UserUpdate, Username};

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    articles: BTreeMap<i64, Article>,
    follows: HashSet<(i64, i64)>,
    favorites: HashSet<(i64, i64)>,
    next_user_id: i64,
    next_article_id: i64,
}

impl State {
    fn authored(&self, article: &Article) -> DomainResult<AuthoredArticle> {
        let author = self
            .users
            .get(&i64::from(article.author_id))
            .ok_or_else(|| DomainError::not_found("author not found"))?;
        Ok(AuthoredArticle {
            article: article.clone(),
            author: author.summary(),
        })
    }

    fn article_mut(&mut self, id: ArticleId) -> DomainResult<&mut Article> {
        self.articles
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::not_found("article not found"))
    }
}

/// UPDATE 文と同じく、指定されたフィールドだけを上書きする
fn apply_user_update(update: &UserUpdate, user: &mut User) {
    if let Some(email) = &update.email {
        user.email = email.clone();
    }
    if let Some(username) = &update.username {
        user.username = username.clone();
    }
    if let Some(bio) = &update.bio {
        user.bio = bio.clone();
    }
    if let Some(image) = &update.image {
        user.image = image.clone();
    }
    if let Some(hash) = &update.password_hash {
        user.password_hash = hash.clone();
    }
}

fn apply_article_update(update: &ArticleUpdate, article: &mut Article) {
    if let Some(title) = &update.title {
        article.title = title.clone();
    }
    if let Some(description) = &update.description {
        article.description = description.clone();
    }
    if let Some(body) = &update.body {
        article.body = body.clone();
    }
    if let Some(tags) = &update.tag_list {
        article.tag_list = tags.clone();
    }
    article.updated_at = update.updated_at;
}

/// 一覧 SQL の WHERE 句（タグは部分一致）をメモリ上で評価する
fn filter_matches(filter: &ArticleListFilter, article: &Article) -> bool {
    if let Some(tag) = &filter.tag {
        if !article.tag_list.to_stored().contains(tag.as_str()) {
            return false;
        }
    }
    if filter.author_id.is_some_and(|id| id != article.author_id) {
        return false;
    }
    filter
        .article_ids
        .as_ref()
        .is_none_or(|ids| ids.contains(&article.id))
}

/// 一意制約・カスケード削除・お気に入りカウンタを Postgres と同じ規則で扱う
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// true の間、すべての操作が一時的な永続化エラーを返す
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// ユーザーを外部から削除する（記事・フォロー・お気に入りもカスケード）
    pub fn remove_user(&self, id: UserId) {
        let raw = i64::from(id);
        let mut state = self.state.lock().unwrap();
        state.users.remove(&raw);
        state.articles.retain(|_, a| a.author_id != id);
        let remaining: HashSet<i64> = state.articles.keys().copied().collect();
        state.follows.retain(|(from, to)| *from != raw && *to != raw);
        state
            .favorites
            .retain(|(user, article)| *user != raw && remaining.contains(article));
    }

    pub fn favorite_edges(&self) -> usize {
        self.state.lock().unwrap().favorites.len()
    }

    pub fn follow_edges(&self) -> usize {
        self.state.lock().unwrap().follows.len()
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, State>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(self.state.lock().unwrap())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.lock()?;
        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        if state.users.values().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        state.next_user_id += 1;
        let user = User {
            id: UserId::new(state.next_user_id)?,
            email: new_user.email,
            username: new_user.username,
            bio: String::new(),
            image: String::new(),
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        let user_key = state.next_user_id;
        state.users.insert(user_key, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.lock()?;
        let id = i64::from(update.id);

        if let Some(email) = &update.email {
            if state.users.values().any(|u| &u.email == email && u.id != update.id) {
                return Err(DomainError::Conflict("email already exists".into()));
            }
        }
        if let Some(username) = &update.username {
            if state
                .users
                .values()
                .any(|u| &u.username == username && u.id != update.id)
            {
                return Err(DomainError::Conflict("username already exists".into()));
            }
        }

        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("user not found"))?;
        apply_user_update(&update, user);
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock()?.users.get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut state = self.lock()?;
        if state.articles.values().any(|a| a.slug == new.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if !state.users.contains_key(&i64::from(new.author_id)) {
            return Err(DomainError::not_found("author not found"));
        }

        state.next_article_id += 1;
        let article = Article {
            id: ArticleId::new(state.next_article_id)?,
            slug: new.slug,
            title: new.title,
            description: new.description,
            body: new.body,
            tag_list: new.tag_list,
            favorites_count: 0,
            author_id: new.author_id,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        let article_key = state.next_article_id;
        state.articles.insert(article_key, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.lock()?;
        let article = state.article_mut(update.id)?;
        apply_article_update(&update, article);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.lock()?;
        let raw = i64::from(id);
        if state.articles.remove(&raw).is_none() {
            return Err(DomainError::not_found("article not found"));
        }
        state.favorites.retain(|(_, article_id)| *article_id != raw);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<AuthoredArticle>> {
        let state = self.lock()?;
        state
            .articles
            .values()
            .find(|a| &a.slug == slug)
            .map(|a| state.authored(a))
            .transpose()
    }

    async fn count_all(&self) -> DomainResult<u64> {
        Ok(self.lock()?.articles.len() as u64)
    }

    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<AuthoredArticle>> {
        let state = self.lock()?;
        let mut matching: Vec<&Article> = state
            .articles
            .values()
            .filter(|a| filter_matches(filter, a))
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map_or(usize::MAX, |l| l as usize);
        matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|a| state.authored(a))
            .collect()
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        let state = self.lock()?;
        let tags: BTreeSet<String> = state
            .articles
            .values()
            .flat_map(|a| a.tag_list.as_slice().iter().cloned())
            .collect();
        Ok(tags.into_iter().collect())
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryStore {
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Article> {
        let mut state = self.lock()?;
        state.article_mut(article_id)?;
        let inserted = state
            .favorites
            .insert((i64::from(user_id), i64::from(article_id)));
        let article = state.article_mut(article_id)?;
        if inserted {
            article.favorites_count += 1;
        }
        Ok(article.clone())
    }

    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Article> {
        let mut state = self.lock()?;
        let removed = state
            .favorites
            .remove(&(i64::from(user_id), i64::from(article_id)));
        let article = state.article_mut(article_id)?;
        if removed {
            article.favorites_count -= 1;
        }
        Ok(article.clone())
    }

    async fn favorite_article_ids(&self, user_id: UserId) -> DomainResult<Vec<ArticleId>> {
        let state = self.lock()?;
        let raw = i64::from(user_id);
        let mut ids: Vec<ArticleId> = state
            .favorites
            .iter()
            .filter(|(user, _)| *user == raw)
            .map(|(_, article)| ArticleId(*article))
            .collect();
        ids.sort();
        Ok(ids)
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool> {
        Ok(self.lock()?.follows.contains(&(
            i64::from(edge.follower_id()),
            i64::from(edge.following_id()),
        )))
    }

    async fn insert(&self, edge: FollowEdge) -> DomainResult<()> {
        self.lock()?.follows.insert((
            i64::from(edge.follower_id()),
            i64::from(edge.following_id()),
        ));
        Ok(())
    }

    async fn delete(&self, edge: FollowEdge) -> DomainResult<()> {
        self.lock()?.follows.remove(&(
            i64::from(edge.follower_id()),
            i64::from(edge.following_id()),
        ));
        Ok(())
    }

    async fn following_ids(&self, follower_id: UserId) -> DomainResult<HashSet<UserId>> {
        let raw = i64::from(follower_id);
        Ok(self
            .lock()?
            .follows
            .iter()
            .filter(|(follower, _)| *follower == raw)
            .map(|(_, following)| UserId(*following))
            .collect())
    }
}
