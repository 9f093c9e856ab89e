use std::sync::Arc;

use crate::application::ports::security::TokenManager;
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) token_manager: Arc<dyn TokenManager>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, token_manager: Arc<dyn TokenManager>) -> Self {
        Self {
            user_repo,
            token_manager,
        }
    }
}
