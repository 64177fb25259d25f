pub mod cache;
pub mod endpoints;
pub mod notifier;
pub mod paths;
pub mod rest_client;
pub mod scheduler;
pub mod services;
pub mod storage;

pub use crate::cache::MemoryQueryCache;
pub use crate::endpoints::{
    RestAiApi, RestCmsApi, RestFooterApi, RestLanguageApi, RestProductApi, RestTranslationApi,
};
pub use crate::notifier::{ChannelNotifier, TracingNotifier};
pub use crate::paths::ShopdeskPaths;
pub use crate::rest_client::RestClient;
pub use crate::scheduler::TokioScheduler;
pub use crate::services::ApiServices;
pub use crate::storage::ConfigStorage;
