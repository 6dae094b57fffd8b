//! POST form parameters.
//!
//! Every field is an optional raw string so that a missing or malformed value is reported
//! by `require_param` with the parameter's name, rather than by the form deserializer.

use axum::extract::{rejection::FormRejection, FromRequest, Request};
use axum::Form;
use serde::{de::DeserializeOwned, Deserialize};
use utoipa::ToSchema;

use crate::server::error::AppError;

/// Form extractor that treats a request without a form body as an empty form.
pub struct PostParams<T>(pub T);

impl<S, T> FromRequest<S> for PostParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(params)) => Ok(Self(params)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(Self(T::default())),
            Err(rejection) => Err(AppError::InvalidArgument(rejection.body_text())),
        }
    }
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct UserIdParam {
    /// Id of the user to look up.
    pub user_id: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct FriendIdParam {
    /// Id of the other user of the relation.
    pub friend_id: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct PositionParam {
    /// Between -180 and 180.
    pub longitude: Option<String>,
    /// Between -90 and 90.
    pub latitude: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct SearchParam {
    /// Case-insensitive prefix of the names to find.
    pub search_text: Option<String>,
}
