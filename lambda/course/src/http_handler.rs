use lambda_http::http::Method;
use lambda_http::{Body, Error, Request, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::course::CourseKey;
use crate::error::{HandlerError, MISSING_PATH, MISSING_PATH_OR_QUERY};
use crate::request::CourseRequest;
use crate::storage::dynamodb::conversions::item_to_json;
use crate::storage::CourseStore;

/// Successful response payloads.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Reply {
    Message {
        message: &'static str,
    },
    Items {
        items: Vec<Value>,
    },
    Updated {
        message: &'static str,
        #[serde(rename = "updatedAttributes")]
        updated_attributes: Value,
    },
    Item(Value),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn json_response<T: Serialize>(status: u16, payload: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(payload)?;
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::Text(body))?)
}

pub(crate) async fn function_handler<S: CourseStore + ?Sized>(
    store: &S,
    event: Request,
) -> Result<Response<Body>, Error> {
    let request = CourseRequest::from_event(&event);
    info!(method = %request.method, path = event.uri().path(), "handling course request");

    match dispatch(store, &request).await {
        Ok(reply) => json_response(200, &reply),
        Err(err) => {
            let status = err.status_code();
            if status >= 500 {
                // The caller only sees the storage message; the event stays in the logs.
                error!(status, error = %err, event = ?event, "course request failed");
            } else {
                warn!(status, error = %err, method = %request.method, "course request rejected");
            }
            json_response(
                status,
                &ErrorResponse {
                    error: err.to_string(),
                },
            )
        }
    }
}

async fn dispatch<S: CourseStore + ?Sized>(
    store: &S,
    request: &CourseRequest,
) -> Result<Reply, HandlerError> {
    match request.method {
        Method::POST => create_item(store, request).await,
        Method::GET => match (&request.key, &request.year) {
            (Some(key), _) => get_item(store, key).await,
            (None, Some(_)) => scan_items(store, request).await,
            (None, None) => Err(HandlerError::MissingParams(MISSING_PATH_OR_QUERY)),
        },
        Method::PUT => update_item(store, request).await,
        Method::DELETE => match &request.key {
            Some(key) => delete_item(store, key).await,
            None => Err(HandlerError::MissingParams(MISSING_PATH)),
        },
        _ => Err(HandlerError::UnsupportedMethod),
    }
}

async fn create_item<S: CourseStore + ?Sized>(
    store: &S,
    request: &CourseRequest,
) -> Result<Reply, HandlerError> {
    let course = request.course()?;
    store.put_course(&course).await?;
    info!(key = %course.key(), "course added");

    Ok(Reply::Message {
        message: "Course added successfully",
    })
}

async fn get_item<S: CourseStore + ?Sized>(
    store: &S,
    key: &CourseKey,
) -> Result<Reply, HandlerError> {
    match store.get_course(key).await? {
        Some(item) => Ok(Reply::Item(item_to_json(&item))),
        None => Err(HandlerError::NotFound),
    }
}

async fn scan_items<S: CourseStore + ?Sized>(
    store: &S,
    request: &CourseRequest,
) -> Result<Reply, HandlerError> {
    let year = request.year()?;
    let items = store.scan_by_year(year).await?;
    info!(year, count = items.len(), "courses listed");

    Ok(Reply::Items {
        items: items.iter().map(item_to_json).collect(),
    })
}

async fn update_item<S: CourseStore + ?Sized>(
    store: &S,
    request: &CourseRequest,
) -> Result<Reply, HandlerError> {
    let course = request.course()?;
    let updated = store.update_course(&course).await?;
    info!(key = %course.key(), "course updated");

    Ok(Reply::Updated {
        message: "Course updated successfully",
        updated_attributes: item_to_json(&updated),
    })
}

async fn delete_item<S: CourseStore + ?Sized>(
    store: &S,
    key: &CourseKey,
) -> Result<Reply, HandlerError> {
    store.delete_course(key).await?;
    info!(%key, "course deleted");

    Ok(Reply::Message {
        message: "Course deleted successfully",
    })
}
