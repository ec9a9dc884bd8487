// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use secrecy::Secret;

use crate::domain::credentials::repos::CredentialsRepository;

#[derive(Default)]
pub struct InMemoryCredentialsRepository {
    token: RwLock<Option<Secret<String>>>,
}

impl InMemoryCredentialsRepository {
    pub fn new() -> Self {
        InMemoryCredentialsRepository {
            token: Default::default(),
        }
    }
}

impl CredentialsRepository for InMemoryCredentialsRepository {
    fn token(&self) -> Option<Secret<String>> {
        self.token.read().clone()
    }

    fn set_token(&self, token: Secret<String>) {
        self.token.write().replace(token);
    }

    fn clear(&self) {
        self.token.write().take();
    }
}
