//! The top-level API client.

use std::sync::Arc;

use crate::config::{ClientOptions, Config};
use crate::error::Error;
use crate::fetcher::Fetcher;
use crate::resources::{
    CalendarResource, EntityResource, EventResource, ImagesResource, MembershipResource,
    UserResource, WebhookResource,
};

/// Handle to the Convene API.
///
/// Cloning is cheap and clones share one connection pool; any number of
/// calls may be in flight concurrently — configuration is immutable
/// after construction and each call owns its own deadline.
///
/// ```no_run
/// # async fn run() -> Result<(), convene::Error> {
/// use convene::{Client, ClientOptions};
///
/// let client = Client::new(ClientOptions::new("convene-api-key"))?;
/// let me = client.user().get_self().await?;
/// println!("authenticated as {}", me.user.api_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    fetcher: Arc<Fetcher>,
}

impl Client {
    /// Build a client from options. Fails only on programmatic misuse
    /// (an unparseable base URL).
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let config = Config::resolve(options)?;
        Ok(Client {
            fetcher: Arc::new(Fetcher::new(config)?),
        })
    }

    /// Escape hatch for endpoints without a typed method.
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn user(&self) -> UserResource<'_> {
        UserResource::new(&self.fetcher)
    }

    pub fn entity(&self) -> EntityResource<'_> {
        EntityResource::new(&self.fetcher)
    }

    pub fn images(&self) -> ImagesResource<'_> {
        ImagesResource::new(&self.fetcher)
    }

    pub fn event(&self) -> EventResource<'_> {
        EventResource::new(&self.fetcher)
    }

    pub fn calendar(&self) -> CalendarResource<'_> {
        CalendarResource::new(&self.fetcher)
    }

    pub fn membership(&self) -> MembershipResource<'_> {
        MembershipResource::new(&self.fetcher)
    }

    pub fn webhook(&self) -> WebhookResource<'_> {
        WebhookResource::new(&self.fetcher)
    }
}
