mod app;
mod logger;

use crate::App;

use sk_auth::MockAuthenticator;
use sk_store::MemoryStorage;

use std::sync::Arc;

pub(crate) async fn memory_app(storage: &Arc<MemoryStorage>) -> App {
    App::with_adapter(storage.clone(), MockAuthenticator::new()).await
}
