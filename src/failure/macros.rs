//! `failure!` — declares a message-carrying failure kind

/// Declare a failure type carrying a message and an optional cause.
///
/// The generated type displays its message, reports the cause through
/// `Error::source`, and implements [`FromMessage`](crate::FromMessage) so it
/// can be the target of [`reraises`](crate::reraises).
///
/// ```
/// recast::failure! {
///     /// Raised when a configuration value is unusable.
///     pub struct ConfigError;
/// }
///
/// let err = ConfigError::new("port out of range");
/// assert_eq!(err.to_string(), "port out of range");
/// assert!(std::error::Error::source(&err).is_none());
/// ```
#[macro_export]
macro_rules! failure {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            $vis struct $name {
                message: ::std::string::String,
                cause: ::std::option::Option<$crate::BoxError>,
            }

            #[allow(dead_code)]
            impl $name {
                /// Create the failure with no cause.
                pub fn new(message: impl ::std::convert::Into<::std::string::String>) -> Self {
                    Self {
                        message: message.into(),
                        cause: ::std::option::Option::None,
                    }
                }

                pub fn message(&self) -> &str {
                    &self.message
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&self.message)
                }
            }

            impl ::std::error::Error for $name {
                fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                    self.cause
                        .as_deref()
                        .map(|cause| cause as &(dyn ::std::error::Error + 'static))
                }
            }

            impl $crate::FromMessage for $name {
                fn from_message(message: ::std::string::String, cause: $crate::BoxError) -> Self {
                    Self {
                        message,
                        cause: ::std::option::Option::Some(cause),
                    }
                }
            }
        )+
    };
}
