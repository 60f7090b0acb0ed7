//! Query parameters and validation for the route endpoint.

use serde::{Deserialize, Serialize};

use airroute_lib::RouteRequest;

use crate::Problem;

/// Validation of raw request input into a library request.
pub trait Validate {
    type Output;

    /// Validate the input, returning the request to run or the error to send.
    ///
    /// The error is boxed to keep the `Result` small.
    fn validate(self) -> Result<Self::Output, Box<Problem>>;
}

/// Query string of `GET /backendTest`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl Validate for RouteQuery {
    type Output = RouteRequest;

    fn validate(self) -> Result<RouteRequest, Box<Problem>> {
        match (self.origin, self.destination) {
            (Some(origin), Some(destination)) if !origin.is_empty() && !destination.is_empty() => {
                Ok(RouteRequest::new(origin, destination))
            }
            _ => Err(Box::new(Problem::invalid_parameters())),
        }
    }
}
