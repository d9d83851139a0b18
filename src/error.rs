use std::fmt;

/// Custom error type for docgen operations
/// Every variant maps to an HTTP status via `status_hint`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Required request field is absent or blank
    MissingField(String)
  , /// Template id is not one of the supported templates
    UnknownTemplate(String)
  , /// Request body could not be decoded
    InvalidBody(String)
  , /// No gateway API key was configured at startup
    MissingApiKey
  , /// Gateway answered 429
    RateLimited
  , /// Gateway answered 402
    PaymentRequired
  , /// Any other gateway or transport failure
    UpstreamFailure(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Listener or socket failure
    Io(String)
}

impl Error
{   /// Numeric classification used as the HTTP response status
    pub fn status_hint(&self) -> u16
    {   match self
        {   Error::MissingField(_)
          | Error::UnknownTemplate(_)
          | Error::InvalidBody(_) => 400
          , Error::PaymentRequired => 402
          , Error::RateLimited => 429
          , Error::MissingApiKey
          | Error::UpstreamFailure(_)
          | Error::InvalidConfiguration(_)
          | Error::Io(_) => 500
        }
    }

    /// True for errors caused by the caller's request
    pub fn is_client_error(&self) -> bool
    {   self.status_hint() == 400
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingField(field) => {
              write!(f, "Missing required field: {}", field)
            }
          , Error::UnknownTemplate(id) => {
              write!(f, "Invalid template: {}", id)
            }
          , Error::InvalidBody(msg) => {
              write!(f, "Invalid request body: {}", msg)
            }
          , Error::MissingApiKey => {
              write!(f, "AI gateway API key is not configured")
            }
          , Error::RateLimited => {
              write!(f,
                "Rate limit exceeded. Please try again in a moment."
              )
            }
          , Error::PaymentRequired => {
              write!(f,
                "Payment required. Please add credits to your workspace."
              )
            }
          , Error::UpstreamFailure(msg) => {
              write!(f, "AI gateway error: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Io(msg) => {
              write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{   fn from(e: std::io::Error) -> Self
    {   Error::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn status_hints_follow_taxonomy()
    {   assert_eq!(Error::MissingField("input".into()).status_hint(), 400);
        assert_eq!(Error::UnknownTemplate("x".into()).status_hint(), 400);
        assert_eq!(Error::InvalidBody("eof".into()).status_hint(), 400);
        assert_eq!(Error::RateLimited.status_hint(), 429);
        assert_eq!(Error::PaymentRequired.status_hint(), 402);
        assert_eq!(Error::UpstreamFailure("boom".into()).status_hint(), 500);
        assert_eq!(Error::MissingApiKey.status_hint(), 500);
    }

    #[test]
    fn client_errors_are_only_the_400_class()
    {   assert!(Error::MissingField("template".into()).is_client_error());
        assert!(!Error::RateLimited.is_client_error());
        assert!(!Error::UpstreamFailure("x".into()).is_client_error());
    }

    #[test]
    fn messages_are_human_readable()
    {   assert_eq!(
          Error::UnknownTemplate("not-a-template".into()).to_string()
        , "Invalid template: not-a-template"
        );
        assert_eq!(
          Error::RateLimited.to_string()
        , "Rate limit exceeded. Please try again in a moment."
        );
    }
}
