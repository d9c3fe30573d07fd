use anyhow::Result;

use super::Server;

/// Routes one incoming request to the first matching handler; anything
/// left unclaimed gets a `MethodNotFound` response.
pub(crate) struct RequestDispatcher<'me> {
    request: Option<lsp_server::Request>,
    server: &'me mut Server,
}

impl<'me> RequestDispatcher<'me> {
    pub(crate) fn new(request: lsp_server::Request, server: &'me mut Server) -> Self {
        Self { request: request.into(), server }
    }

    pub(crate) fn on<R>(mut self, f: fn(&mut Server, R::Params) -> Result<R::Result>) -> Self
    where
        R: lsp_types::request::Request,
    {
        let Some(request) = self.request.take_if(|request| request.method == R::METHOD) else {
            return self;
        };

        let params: R::Params = match crate::from_json(R::METHOD, &request.params) {
            Ok(params) => params,
            Err(error) => {
                self.server.respond(lsp_server::Response::new_err(
                    request.id,
                    lsp_server::ErrorCode::InvalidParams as i32,
                    error.to_string(),
                ));
                return self;
            }
        };

        let response = crate::result_to_response::<R>(request.id, f(self.server, params));
        self.server.respond(response);
        self
    }

    pub(crate) fn finish(self) {
        if let Some(request) = self.request {
            eprintln!("unknown request: {request:?}");
            self.server.respond(lsp_server::Response::new_err(
                request.id,
                lsp_server::ErrorCode::MethodNotFound as i32,
                "unknown request".to_owned(),
            ));
        }
    }
}

/// Notification counterpart. Malformed payloads are logged and dropped;
/// notifications have no response to carry an error back on.
pub(crate) struct NotificationDispatcher<'me> {
    notification: Option<lsp_server::Notification>,
    server: &'me mut Server,
}

impl<'me> NotificationDispatcher<'me> {
    pub(crate) fn new(notification: lsp_server::Notification, server: &'me mut Server) -> Self {
        Self { notification: notification.into(), server }
    }

    pub(crate) fn on<N>(&mut self, f: fn(&mut Server, N::Params) -> Result<()>) -> &mut Self
    where
        N: lsp_types::notification::Notification,
    {
        let Some(notification) = self.notification.take() else {
            return self;
        };

        let params = match notification.extract::<N::Params>(N::METHOD) {
            Ok(params) => params,
            Err(lsp_server::ExtractError::JsonError { method, error }) => {
                eprintln!("malformed notification `{method}`: {error}");
                return self;
            }
            Err(lsp_server::ExtractError::MethodMismatch(notification)) => {
                self.notification = Some(notification);
                return self;
            }
        };

        if let Err(error) = f(self.server, params) {
            eprintln!("{}: {}", N::METHOD, error);
        }
        self
    }

    pub(crate) fn finish(&mut self) {
        if let Some(notification) = &self.notification
            && !notification.method.starts_with("$/")
        {
            eprintln!("unhandled notification: {notification:?}");
        }
    }
}
