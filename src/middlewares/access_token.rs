use crate::{client::AccessToken, common::ACCESS_TOKEN_HEADER};
use async_trait::async_trait;
use reqwest::{header::HeaderValue, Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the shop access token into outgoing HTTP requests.
///
/// The token is static: acquiring or rotating it is up to the caller.
pub struct AccessTokenMiddleware {
    pub(crate) access_token: AccessToken,
}

#[async_trait]
impl Middleware for AccessTokenMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let mut header_value = HeaderValue::from_str(self.access_token.expose_secret())
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert(ACCESS_TOKEN_HEADER, header_value);

        next.run(req, extensions).await
    }
}
